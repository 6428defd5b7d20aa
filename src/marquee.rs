//! Carousel Loop Math
//!
//! The community list is rendered twice back to back. The scroll offset
//! advances every frame and jumps back by half the content extent when it
//! crosses into the copy, which looks like an endless loop.

use crate::models::Card;

/// Pixels advanced per animation frame
pub const SCROLL_STEP_PX: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarqueeState {
    pub offset: f64,
    hovered: bool,
    focused: bool,
}

impl MarqueeState {
    pub fn paused(&self) -> bool {
        self.hovered || self.focused
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Advance one frame given the total scrollable extent (both copies)
    pub fn tick(&mut self, extent: f64) -> f64 {
        let half = extent / 2.0;
        if self.paused() || half <= 0.0 {
            return self.offset;
        }
        self.offset += SCROLL_STEP_PX;
        while self.offset >= half {
            self.offset -= half;
        }
        self.offset
    }
}

/// The list followed by itself once, each entry tagged with its position
/// in `cards`. Ids are not unique across contributors, so the position is
/// what identifies a card.
pub fn doubled(cards: &[Card]) -> Vec<(usize, Card)> {
    let once = cards.iter().cloned().enumerate();
    once.clone().chain(once).collect()
}

/// Single revealed card: clicking it again hides it
pub fn toggle_reveal(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
