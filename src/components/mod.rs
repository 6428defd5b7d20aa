//! UI Components
//!
//! Reusable Leptos components.

mod auth_panel;
mod background;
mod board;
mod card;
mod carousel;
mod feedback;
mod fly_ghost;

pub use auth_panel::AuthPanel;
pub use background::AnimatedBackground;
pub use board::BingoBoard;
pub use card::BingoCard;
pub use carousel::Carousel;
pub use feedback::{ErrorBanner, Toast};
pub use fly_ghost::FlyGhostOverlay;
