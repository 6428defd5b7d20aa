//! Frontend Models
//!
//! Data structures matching backend JSON shapes.

use serde::{Deserialize, Serialize};

/// A single bingo cell (board or community)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub text: String,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl Card {
    pub fn new(id: impl Into<String>, text: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            background_color: background_color.into(),
            text_color: None,
        }
    }
}

/// Result of a successful code verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

// ========================
// Wire Bodies
// ========================

#[derive(Serialize)]
pub struct MagicLinkRequest<'a> {
    pub email: &'a str,
}

/// Older backends echo the simulated link; newer ones only acknowledge.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkResponse {
    #[serde(default)]
    pub magic_link: Option<String>,
}

#[derive(Serialize)]
pub struct SaveBoardRequest<'a> {
    pub cards: &'a [Card],
}

/// Save acknowledgment; a body without `ok` is not an acknowledgment
#[derive(Debug, Deserialize)]
pub struct SaveBoardResponse {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ContributeRequest<'a> {
    pub card: &'a Card,
}

#[derive(Debug, Deserialize)]
pub struct CommunityCardsResponse {
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Built-in Defaults
// ========================

/// Yarn palette used for the starter board
const BOARD_COLORS: [&str; 9] = [
    "#f4c2c2", "#c9e4de", "#faedcb", "#c6def1", "#dbcdf0", "#f2c6de", "#f7d9c4", "#d4e7c5", "#e2e2df",
];

/// Starter board: nine empty cells
pub fn default_board() -> Vec<Card> {
    BOARD_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| Card::new(format!("cell-{}", i), "", *color))
        .collect()
}

const COMMUNITY_DEFAULTS: [(&str, &str); 15] = [
    ("Knit a swatch", "#f4c2c2"),
    ("Finish a WIP", "#c9e4de"),
    ("Try cables", "#faedcb"),
    ("Frog something", "#c6def1"),
    ("Knit socks", "#dbcdf0"),
    ("Learn a new cast-on", "#f2c6de"),
    ("Block a shawl", "#f7d9c4"),
    ("Use stash yarn only", "#d4e7c5"),
    ("Knit in public", "#e2e2df"),
    ("Try colorwork", "#fde2e4"),
    ("Gift a handknit", "#bee1e6"),
    ("Weave in all ends", "#fff1e6"),
    ("Knit a hat", "#cddafd"),
    ("Try brioche", "#e9edc9"),
    ("Teach someone to knit", "#fad2e1"),
];

/// Community cards shown when the backend has none or is unreachable
pub fn default_community_cards() -> Vec<Card> {
    COMMUNITY_DEFAULTS
        .iter()
        .enumerate()
        .map(|(i, (text, color))| Card::new(format!("default-{}", i), *text, *color))
        .collect()
}
