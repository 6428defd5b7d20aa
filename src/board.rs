//! Board Utilities
//!
//! Precondition check and cell edits for the 3×3 board.

use leptos_dragdrop::DragPayload;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Card;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a bingo board needs exactly {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },
}

/// A board must hold exactly nine cards
pub fn check_board(cards: &[Card]) -> Result<(), BoardError> {
    if cards.len() != BOARD_SIZE {
        return Err(BoardError::WrongSize { expected: BOARD_SIZE, actual: cards.len() });
    }
    Ok(())
}

/// Row-major (row, column) for a cell index
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / BOARD_COLUMNS, index % BOARD_COLUMNS)
}

/// Replace a cell's text. Returns false for an out-of-range index.
pub fn set_text(board: &mut [Card], index: usize, text: String) -> bool {
    match board.get_mut(index) {
        Some(card) => {
            card.text = text;
            true
        }
        None => false,
    }
}

/// Community card dragged from the carousel onto a board cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDrop {
    pub id: String,
    pub text: String,
    pub background_color: String,
}

impl DragPayload for CardDrop {
    const MEDIA_TYPE: &'static str = "application/x-knit-bingo-card";
}

impl From<&Card> for CardDrop {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            text: card.text.clone(),
            background_color: card.background_color.clone(),
        }
    }
}

/// Copy a dropped card's content into a cell. The cell keeps its own id.
pub fn apply_drop(board: &mut [Card], index: usize, dropped: CardDrop) -> bool {
    match board.get_mut(index) {
        Some(card) => {
            card.text = dropped.text;
            card.background_color = dropped.background_color;
            card.text_color = None;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_board;

    #[test]
    fn test_check_board_rejects_wrong_sizes() {
        for len in [0usize, 1, 8, 10, 18] {
            let cards: Vec<Card> = (0..len).map(|i| Card::new(format!("c{}", i), "", "#fff")).collect();
            assert_eq!(
                check_board(&cards),
                Err(BoardError::WrongSize { expected: 9, actual: len })
            );
        }
        assert!(check_board(&default_board()).is_ok());
    }

    #[test]
    fn test_grid_position_is_row_major() {
        assert_eq!(grid_position(0), (0, 0));
        assert_eq!(grid_position(2), (0, 2));
        assert_eq!(grid_position(3), (1, 0));
        assert_eq!(grid_position(8), (2, 2));
    }

    #[test]
    fn test_set_text() {
        let mut board = default_board();
        assert!(set_text(&mut board, 4, "Knit socks".into()));
        assert_eq!(board[4].text, "Knit socks");
        assert!(!set_text(&mut board, 9, "nope".into()));
    }

    #[test]
    fn test_apply_drop_keeps_cell_id() {
        let mut board = default_board();
        let dropped = CardDrop {
            id: "community-7".into(),
            text: "Try cables".into(),
            background_color: "#123456".into(),
        };
        assert!(apply_drop(&mut board, 2, dropped));
        assert_eq!(board[2].id, "cell-2");
        assert_eq!(board[2].text, "Try cables");
        assert_eq!(board[2].background_color, "#123456");
    }

    #[test]
    fn test_card_drop_wire_shape() {
        let raw = r##"{"id":"x","text":"Hat","backgroundColor":"#abc"}"##;
        let dropped = leptos_dragdrop::decode_payload::<CardDrop>(raw).unwrap();
        assert_eq!(dropped.background_color, "#abc");
    }
}
