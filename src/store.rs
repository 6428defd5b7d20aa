//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every piece of
//! shell state lives here; components read fields and `actions` mutate them.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::{self, AuthPhase};
use crate::board::{self, CardDrop};
use crate::fly::FlyGhost;
use crate::models::{default_board, default_community_cards, Card, Session};

/// Transient message with the ticket that raised it
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub ticket: u64,
    pub text: String,
}

#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Locally edited board, what the grid renders
    pub draft: Vec<Card>,
    /// Last successfully persisted board
    pub saved: Vec<Card>,
    pub auth: AuthPhase,
    pub email: String,
    pub code: String,
    pub community: Vec<Card>,
    /// Single error slot for the last failed action
    pub error: Option<String>,
    /// Acknowledgment shown after a link request
    pub notice: Option<String>,
    pub toast: Option<ToastMessage>,
    pub ghost: Option<FlyGhost>,
    /// Draws attention to the email field
    pub email_pulse: bool,
    pub saving: bool,
    /// A code verification is in flight
    pub verifying: bool,
    pub toast_seq: u64,
    pub flight_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let board = default_board();
        Self {
            saved: board.clone(),
            draft: board,
            auth: AuthPhase::Idle,
            email: String::new(),
            code: String::new(),
            community: default_community_cards(),
            error: None,
            notice: None,
            toast: None,
            ghost: None,
            email_pulse: false,
            saving: false,
            verifying: false,
            toast_seq: 0,
            flight_seq: 0,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn token(&self) -> Option<&str> {
        self.auth.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.draft != self.saved
    }

    pub fn can_save(&self) -> bool {
        self.is_authenticated() && self.has_unsaved_changes() && !self.saving
    }

    pub fn can_request_link(&self) -> bool {
        self.auth == AuthPhase::Idle && auth::email_allowed(&self.email)
    }

    pub fn can_verify(&self) -> bool {
        self.auth == AuthPhase::CodeEntry && !self.verifying && auth::code_allowed(&self.code)
    }

    // ========================
    // Board
    // ========================

    pub fn edit_card(&mut self, index: usize, text: String) {
        board::set_text(&mut self.draft, index, text);
    }

    pub fn drop_card(&mut self, index: usize, dropped: CardDrop) {
        board::apply_drop(&mut self.draft, index, dropped);
    }

    /// Promote the exact cards that were persisted
    pub fn mark_saved(&mut self, persisted: Vec<Card>) {
        self.saved = persisted;
        self.saving = false;
    }

    // ========================
    // Auth
    // ========================

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    pub fn start_over(&mut self) {
        if self.auth.start_over() {
            self.email_pulse = false;
            self.code.clear();
            self.notice = None;
            self.error = None;
        }
    }

    pub fn signed_in(&mut self, session: Session) {
        self.verifying = false;
        if self.auth.verified(session) {
            self.code.clear();
            self.notice = None;
            self.error = None;
        }
    }

    // ========================
    // Community
    // ========================

    /// Replace the community list, falling back to the built-in set when empty
    pub fn set_community(&mut self, cards: Vec<Card>) {
        self.community = if cards.is_empty() { default_community_cards() } else { cards };
    }

    // ========================
    // Feedback
    // ========================

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn raise_toast(&mut self, text: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(ToastMessage { ticket: self.toast_seq, text: text.into() });
        self.toast_seq
    }

    /// Dismiss only if the toast is still the one from `ticket`
    pub fn dismiss_toast(&mut self, ticket: u64) {
        if self.toast.as_ref().map(|t| t.ticket) == Some(ticket) {
            self.toast = None;
        }
    }

    /// Start a new flight, replacing any ghost still in the air
    pub fn launch_ghost(&mut self, make: impl FnOnce(u64) -> FlyGhost) -> u64 {
        self.flight_seq += 1;
        self.ghost = Some(make(self.flight_seq));
        self.flight_seq
    }

    pub fn land_ghost(&mut self, flight: u64) {
        if self.ghost.as_ref().map(|g| g.flight) == Some(flight) {
            self.ghost = None;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Read/write access to the shell state, independent of the container.
/// `None` means the container is gone (component torn down).
pub trait ShellState {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R>;
    fn modify<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;
}

impl ShellState for AppStore {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ShellState for RefCell<AppState> {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
