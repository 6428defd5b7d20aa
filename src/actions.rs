//! Shell Actions
//!
//! Async orchestration between the backend and the shell state. Each action
//! reads what it needs, awaits the network at most a couple of times and
//! writes the outcome back. Failures land in the error slot and leave the
//! rest of the state as it was.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};

use crate::auth::AuthPhase;
use crate::commands::BingoApi;
use crate::fly::{FlyGhost, Point, Rect};
use crate::store::ShellState;

pub const TOAST_DISMISS_MS: u32 = 3000;
pub const LOGIN_TO_CONTRIBUTE: &str = "Log in to contribute and save your bingo.";
pub const CODE_SENT_NOTICE: &str = "Check your email for a login code.";

/// Delay capability so toasts can be tested without a browser
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

// ========================
// Auth
// ========================

pub async fn request_link<A: BingoApi, S: ShellState>(api: &A, state: &S) {
    let email = state
        .modify(|s| {
            if !s.can_request_link() {
                return None;
            }
            s.auth.request_sent();
            s.error = None;
            s.notice = None;
            Some(s.email.trim().to_string())
        })
        .flatten();
    let Some(email) = email else { return };

    match api.request_magic_link(&email).await {
        Ok(_) => {
            log!("[AUTH] Login code requested for {}", email);
            state.modify(|s| {
                if s.auth.link_sent() {
                    s.notice = Some(CODE_SENT_NOTICE.to_string());
                }
            });
        }
        Err(err) => {
            warn!("[AUTH] {} failed: {:?}", err.action(), err);
            state.modify(|s| {
                s.auth.link_failed();
                s.fail(err.to_string());
            });
        }
    }
}

pub async fn verify_code<A: BingoApi, S: ShellState>(api: &A, state: &S) {
    let code = state
        .modify(|s| {
            if !s.can_verify() {
                return None;
            }
            s.verifying = true;
            s.error = None;
            Some(s.code.trim().to_string())
        })
        .flatten();
    let Some(code) = code else { return };

    match api.verify_code(&code).await {
        Ok(session) => {
            log!("[AUTH] Signed in as {}", session.email);
            state.modify(|s| s.signed_in(session));
            refresh_community(api, state).await;
        }
        Err(err) => {
            warn!("[AUTH] {} failed: {:?}", err.action(), err);
            state.modify(|s| {
                s.verifying = false;
                s.fail(err.to_string());
            });
        }
    }
}

pub fn start_over<S: ShellState>(state: &S) {
    state.modify(|s| s.start_over());
}

// ========================
// Board
// ========================

pub async fn save_board<A: BingoApi, S: ShellState>(api: &A, state: &S) {
    let request = state
        .modify(|s| {
            if !s.can_save() {
                return None;
            }
            let token = s.token()?.to_string();
            s.saving = true;
            s.error = None;
            Some((token, s.draft.clone()))
        })
        .flatten();
    let Some((token, snapshot)) = request else { return };

    match api.save_board(&token, &snapshot).await {
        Ok(()) => {
            state.modify(|s| s.mark_saved(snapshot));
        }
        Err(err) => {
            warn!("[BOARD] {} failed: {:?}", err.action(), err);
            state.modify(|s| {
                s.saving = false;
                s.fail(err.to_string());
            });
        }
    }
}

// ========================
// Community
// ========================

/// Share one board card. `flight` is the ghost's origin rectangle and
/// landing point; without it the card is shared but nothing animates.
pub async fn contribute<A, S, T>(api: &A, state: &S, timer: &T, index: usize, flight: Option<(Rect, Point)>)
where
    A: BingoApi,
    S: ShellState,
    T: Timer,
{
    let Some((token, card)) = state.inspect(|s| (s.token().map(str::to_string), s.draft.get(index).cloned())) else {
        return;
    };
    let Some(card) = card else { return };
    let Some(token) = token else {
        // only the idle form has an email field to pulse
        state.modify(|s| s.email_pulse = s.auth == AuthPhase::Idle);
        notify(state, timer, LOGIN_TO_CONTRIBUTE).await;
        return;
    };

    match api.contribute(&token, &card).await {
        Ok(()) => {
            if let Some((from, to)) = flight {
                state.modify(|s| s.launch_ghost(|id| FlyGhost::new(id, card, from, to)));
            }
            refresh_community(api, state).await;
        }
        Err(err) => {
            warn!("[COMMUNITY] {} failed: {:?}", err.action(), err);
            state.modify(|s| s.fail(err.to_string()));
        }
    }
}

/// Reload community cards; empty or unreachable falls back to the defaults
pub async fn refresh_community<A: BingoApi, S: ShellState>(api: &A, state: &S) {
    let cards = match api.community_cards().await {
        Ok(cards) => {
            log!("[COMMUNITY] Loaded {} cards", cards.len());
            cards
        }
        Err(err) => {
            warn!("[COMMUNITY] Using built-in cards: {}", err);
            Vec::new()
        }
    };
    state.modify(|s| s.set_community(cards));
}

pub fn finish_flight<S: ShellState>(state: &S, flight: u64) {
    state.modify(|s| s.land_ghost(flight));
}

// ========================
// Feedback
// ========================

/// Show a toast and dismiss it after `TOAST_DISMISS_MS`
pub async fn notify<S: ShellState, T: Timer>(state: &S, timer: &T, text: &str) {
    let Some(ticket) = state.modify(|s| s.raise_toast(text)) else { return };
    timer.sleep(TOAST_DISMISS_MS).await;
    state.modify(|s| s.dismiss_toast(ticket));
}

pub fn dismiss_toast<S: ShellState>(state: &S) {
    state.modify(|s| s.toast = None);
}

pub fn dismiss_error<S: ShellState>(state: &S) {
    state.modify(|s| s.error = None);
}

pub fn clear_email_pulse<S: ShellState>(state: &S) {
    state.modify(|s| s.email_pulse = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::error::{Action, ApiError};
    use crate::models::{default_community_cards, Card, MagicLinkResponse, Session};
    use crate::store::AppState;

    /// Records every call; outcomes are configured per test
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        link_error: Option<ApiError>,
        accepted_code: Option<&'static str>,
        save_error: Option<ApiError>,
        saved_boards: RefCell<Vec<(String, Vec<Card>)>>,
        contribute_error: Option<ApiError>,
        contributed: RefCell<Vec<Card>>,
        community: Option<Vec<Card>>,
    }

    impl FakeApi {
        fn called(&self, name: &str) -> usize {
            self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
        }
    }

    #[async_trait(?Send)]
    impl BingoApi for FakeApi {
        async fn request_magic_link(&self, _email: &str) -> Result<MagicLinkResponse, ApiError> {
            self.calls.borrow_mut().push("link".into());
            match &self.link_error {
                Some(err) => Err(err.clone()),
                None => Ok(MagicLinkResponse::default()),
            }
        }

        async fn verify_code(&self, code: &str) -> Result<Session, ApiError> {
            self.calls.borrow_mut().push("verify".into());
            if self.accepted_code == Some(code) {
                Ok(Session { token: "tok-1".into(), user_id: "u1".into(), email: "a@b.com".into() })
            } else {
                Err(ApiError::Rejected {
                    action: Action::VerifyCode,
                    status: 404,
                    message: Some("Invalid code".into()),
                })
            }
        }

        async fn save_board(&self, token: &str, cards: &[Card]) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("save".into());
            self.saved_boards.borrow_mut().push((token.to_string(), cards.to_vec()));
            match &self.save_error {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn contribute(&self, _token: &str, card: &Card) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("contribute".into());
            self.contributed.borrow_mut().push(card.clone());
            match &self.contribute_error {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn community_cards(&self) -> Result<Vec<Card>, ApiError> {
            self.calls.borrow_mut().push("community".into());
            self.community.clone().ok_or(ApiError::Network {
                action: Action::LoadCommunity,
                detail: "unreachable".into(),
            })
        }
    }

    /// Resolves immediately, noting the delay and the toast visible at the time
    struct RecordingTimer {
        state: Rc<RefCell<AppState>>,
        seen: RefCell<Vec<(u32, Option<String>)>>,
    }

    #[async_trait(?Send)]
    impl Timer for RecordingTimer {
        async fn sleep(&self, ms: u32) {
            let toast = self.state.borrow().toast.as_ref().map(|t| t.text.clone());
            self.seen.borrow_mut().push((ms, toast));
        }
    }

    fn signed_in_state() -> RefCell<AppState> {
        let mut state = AppState::new();
        state.auth = AuthPhase::Authenticated(Session {
            token: "tok-1".into(),
            user_id: "u1".into(),
            email: "a@b.com".into(),
        });
        RefCell::new(state)
    }

    fn flight() -> Option<(Rect, Point)> {
        Some((Rect { x: 10.0, y: 300.0, width: 100.0, height: 100.0 }, Point { x: 30.0, y: 30.0 }))
    }

    #[tokio::test]
    async fn test_login_flow_reloads_community() {
        let api = FakeApi {
            accepted_code: Some("123456"),
            community: Some(vec![Card::new("c1", "Knit socks", "#fff")]),
            ..Default::default()
        };
        let state = RefCell::new(AppState::new());

        state.borrow_mut().set_email("a@b.com".into());
        request_link(&api, &state).await;
        assert_eq!(state.borrow().auth, AuthPhase::CodeEntry);
        assert_eq!(state.borrow().notice.as_deref(), Some(CODE_SENT_NOTICE));

        state.borrow_mut().set_code("123456".into());
        verify_code(&api, &state).await;

        let s = state.borrow();
        assert_eq!(s.token(), Some("tok-1"));
        assert!(s.code.is_empty());
        assert!(!s.verifying);
        assert_eq!(api.called("community"), 1);
        assert_eq!(s.community[0].text, "Knit socks");
    }

    #[tokio::test]
    async fn test_plus_email_never_hits_network() {
        let api = FakeApi::default();
        let state = RefCell::new(AppState::new());
        state.borrow_mut().set_email("knitter+bingo@b.com".into());

        request_link(&api, &state).await;

        assert!(api.calls.borrow().is_empty());
        assert_eq!(state.borrow().auth, AuthPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_link_request_returns_to_idle() {
        let api = FakeApi {
            link_error: Some(ApiError::Rejected {
                action: Action::RequestLink,
                status: 500,
                message: None,
            }),
            ..Default::default()
        };
        let state = RefCell::new(AppState::new());
        state.borrow_mut().set_email("a@b.com".into());

        request_link(&api, &state).await;

        let s = state.borrow();
        assert_eq!(s.auth, AuthPhase::Idle);
        assert_eq!(s.error.as_deref(), Some("Request link failed (500)"));
    }

    #[tokio::test]
    async fn test_rejected_code_stays_in_code_entry() {
        let api = FakeApi { accepted_code: Some("123456"), ..Default::default() };
        let state = RefCell::new(AppState::new());
        state.borrow_mut().auth = AuthPhase::CodeEntry;
        state.borrow_mut().set_code("000000".into());

        verify_code(&api, &state).await;

        let s = state.borrow();
        assert_eq!(s.auth, AuthPhase::CodeEntry);
        assert_eq!(s.error.as_deref(), Some("Invalid code"));
        assert!(!s.verifying);
        assert_eq!(api.called("community"), 0);
    }

    #[tokio::test]
    async fn test_empty_code_is_not_sent() {
        let api = FakeApi::default();
        let state = RefCell::new(AppState::new());
        state.borrow_mut().auth = AuthPhase::CodeEntry;

        verify_code(&api, &state).await;
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_save_promotes_a_copy_of_the_draft() {
        let api = FakeApi::default();
        let state = signed_in_state();
        state.borrow_mut().edit_card(0, "Knit a swatch".into());

        save_board(&api, &state).await;
        {
            let s = state.borrow();
            assert_eq!(s.saved, s.draft);
            assert!(!s.has_unsaved_changes());
            assert!(!s.saving);
        }
        let (token, sent) = api.saved_boards.borrow()[0].clone();
        assert_eq!(token, "tok-1");
        assert_eq!(sent.len(), 9);

        state.borrow_mut().edit_card(0, "Frog it".into());
        let s = state.borrow();
        assert_eq!(s.saved[0].text, "Knit a swatch");
        assert!(s.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_draft_and_saved() {
        let api = FakeApi {
            save_error: Some(ApiError::Rejected { action: Action::Save, status: 500, message: None }),
            ..Default::default()
        };
        let state = signed_in_state();
        state.borrow_mut().edit_card(3, "Try cables".into());
        let saved_before = state.borrow().saved.clone();

        save_board(&api, &state).await;

        let s = state.borrow();
        assert_eq!(s.draft[3].text, "Try cables");
        assert_eq!(s.saved, saved_before);
        assert_eq!(s.error.as_deref(), Some("Save failed (500)"));
        assert!(!s.saving);
    }

    #[tokio::test]
    async fn test_save_requires_login_and_changes() {
        let api = FakeApi::default();
        let state = RefCell::new(AppState::new());
        state.borrow_mut().edit_card(0, "Knit socks".into());
        save_board(&api, &state).await;

        let clean = signed_in_state();
        save_board(&api, &clean).await;

        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_logged_out_contribute_shows_toast() {
        let api = FakeApi::default();
        let state = Rc::new(RefCell::new(AppState::new()));
        state.borrow_mut().edit_card(0, "Knit a swatch".into());
        let timer = RecordingTimer { state: Rc::clone(&state), seen: RefCell::new(Vec::new()) };

        contribute(&api, &*state, &timer, 0, flight()).await;

        assert!(api.calls.borrow().is_empty());
        assert_eq!(
            timer.seen.borrow().as_slice(),
            &[(TOAST_DISMISS_MS, Some(LOGIN_TO_CONTRIBUTE.to_string()))]
        );
        let s = state.borrow();
        assert!(s.toast.is_none());
        assert!(s.email_pulse);
        assert!(s.ghost.is_none());
    }

    #[tokio::test]
    async fn test_logged_out_contribute_during_code_entry_skips_pulse() {
        let api = FakeApi::default();
        let state = Rc::new(RefCell::new(AppState::new()));
        state.borrow_mut().auth = AuthPhase::CodeEntry;
        let timer = RecordingTimer { state: Rc::clone(&state), seen: RefCell::new(Vec::new()) };

        contribute(&api, &*state, &timer, 0, flight()).await;

        assert_eq!(timer.seen.borrow().len(), 1);
        assert!(!state.borrow().email_pulse);

        start_over(&*state);
        assert_eq!(state.borrow().auth, AuthPhase::Idle);
        assert!(!state.borrow().email_pulse);
    }

    #[test]
    fn test_start_over_drops_pending_pulse() {
        let state = RefCell::new(AppState::new());
        state.borrow_mut().auth = AuthPhase::CodeEntry;
        state.borrow_mut().email_pulse = true;

        start_over(&state);

        assert!(!state.borrow().email_pulse);
    }

    #[tokio::test]
    async fn test_contribute_launches_ghost_and_refreshes() {
        let api = FakeApi { community: Some(Vec::new()), ..Default::default() };
        let state = Rc::new(signed_in_state());
        state.borrow_mut().edit_card(4, "Knit a hat".into());
        let timer = RecordingTimer { state: Rc::clone(&state), seen: RefCell::new(Vec::new()) };

        contribute(&api, &*state, &timer, 4, flight()).await;

        assert_eq!(api.contributed.borrow()[0].text, "Knit a hat");
        assert_eq!(api.called("community"), 1);
        let s = state.borrow();
        let ghost = s.ghost.as_ref().unwrap();
        assert_eq!(ghost.card.text, "Knit a hat");
        assert_eq!(ghost.flight, 1);
        assert_eq!(ghost.to, Point { x: 30.0, y: 30.0 });
        assert!(timer.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_contribute_skips_animation_and_refresh() {
        let api = FakeApi {
            contribute_error: Some(ApiError::Rejected {
                action: Action::Contribute,
                status: 401,
                message: Some("Invalid token".into()),
            }),
            community: Some(Vec::new()),
            ..Default::default()
        };
        let state = Rc::new(signed_in_state());
        let timer = RecordingTimer { state: Rc::clone(&state), seen: RefCell::new(Vec::new()) };

        contribute(&api, &*state, &timer, 0, flight()).await;

        assert_eq!(api.called("community"), 0);
        let s = state.borrow();
        assert!(s.ghost.is_none());
        assert_eq!(s.error.as_deref(), Some("Invalid token"));
    }

    #[tokio::test]
    async fn test_empty_community_uses_defaults() {
        let api = FakeApi { community: Some(Vec::new()), ..Default::default() };
        let state = RefCell::new(AppState::new());
        state.borrow_mut().community = vec![Card::new("old", "Old", "#000")];

        refresh_community(&api, &state).await;

        let s = state.borrow();
        assert_eq!(s.community.len(), 15);
        assert_eq!(s.community, default_community_cards());
    }

    #[tokio::test]
    async fn test_unreachable_community_uses_defaults() {
        let api = FakeApi::default();
        let state = RefCell::new(AppState::new());
        state.borrow_mut().community = vec![Card::new("old", "Old", "#000")];

        refresh_community(&api, &state).await;

        assert_eq!(state.borrow().community, default_community_cards());
        assert!(state.borrow().error.is_none());
    }
}
