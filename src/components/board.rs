//! Bingo Board Component
//!
//! Fixed 3×3 grid of editable cards. Cells accept community cards
//! dropped from the carousel.

use leptos::prelude::*;
use leptos_dragdrop::{create_drop_hover, make_on_dragleave, make_on_dragover, make_on_drop};

use crate::board::{check_board, grid_position, CardDrop, BOARD_SIZE};
use crate::components::BingoCard;
use crate::fly::Rect;
use crate::models::Card;

/// What cell `index` shows: always `cards[index]`, placed row-major
struct CellSignals {
    row: usize,
    column: usize,
    text: Signal<String>,
    background: Signal<String>,
    text_color: Signal<Option<String>>,
}

impl CellSignals {
    fn new(cards: Signal<Vec<Card>>, index: usize) -> Self {
        let (row, column) = grid_position(index);
        let field = move |f: fn(&Card) -> String| {
            Signal::derive(move || cards.with(|c| c.get(index).map(f).unwrap_or_default()))
        };
        Self {
            row,
            column,
            text: field(|c| c.text.clone()),
            background: field(|c| c.background_color.clone()),
            text_color: Signal::derive(move || cards.with(|c| c.get(index).and_then(|c| c.text_color.clone()))),
        }
    }
}

#[component]
pub fn BingoBoard(
    /// Must always hold exactly nine cards
    #[prop(into)]
    cards: Signal<Vec<Card>>,
    #[prop(into)] on_text_change: Callback<(usize, String)>,
    #[prop(into)] on_contribute: Callback<(usize, Rect)>,
    #[prop(into)] on_card_drop: Callback<(usize, CardDrop)>,
) -> impl IntoView {
    // Wrong card count is a programmer error: fail loudly
    if let Err(err) = cards.with_untracked(|c| check_board(c)) {
        panic!("{}", err);
    }
    Effect::new(move |_| {
        if let Err(err) = cards.with(|c| check_board(c)) {
            panic!("{}", err);
        }
    });

    let cell = move |index: usize| {
        let CellSignals { row, column, text, background, text_color } = CellSignals::new(cards, index);
        let hover = create_drop_hover();

        view! {
            <div
                class=move || if hover.is_over.get() { "board-cell drop-over" } else { "board-cell" }
                style=format!("grid-row: {}; grid-column: {};", row + 1, column + 1)
                on:dragover=make_on_dragover(hover)
                on:dragleave=make_on_dragleave(hover)
                on:drop=make_on_drop(hover, move |dropped: CardDrop| on_card_drop.run((index, dropped)))
            >
                <BingoCard
                    text=text
                    background_color=background
                    text_color=text_color
                    editable=true
                    placeholder="Write a knitting goal..."
                    on_text_change=Callback::new(move |value: String| on_text_change.run((index, value)))
                    on_contribute=Callback::new(move |rect: Rect| on_contribute.run((index, rect)))
                />
            </div>
        }
    };

    view! {
        <div class="bingo-board">
            {(0..BOARD_SIZE).map(cell).collect_view()}
        </div>
    }
}
