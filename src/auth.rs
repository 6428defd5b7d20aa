//! Auth Flow
//!
//! Email code login: idle → link requested → code entry → authenticated.

use crate::models::Session;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthPhase {
    #[default]
    Idle,
    /// Magic link request in flight
    LinkRequested,
    /// Waiting for the user to type the emailed code
    CodeEntry,
    Authenticated(Session),
}

impl AuthPhase {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    pub fn request_sent(&mut self) -> bool {
        self.advance(AuthPhase::Idle, AuthPhase::LinkRequested)
    }

    pub fn link_sent(&mut self) -> bool {
        self.advance(AuthPhase::LinkRequested, AuthPhase::CodeEntry)
    }

    pub fn link_failed(&mut self) -> bool {
        self.advance(AuthPhase::LinkRequested, AuthPhase::Idle)
    }

    pub fn verified(&mut self, session: Session) -> bool {
        self.advance(AuthPhase::CodeEntry, AuthPhase::Authenticated(session))
    }

    pub fn start_over(&mut self) -> bool {
        self.advance(AuthPhase::CodeEntry, AuthPhase::Idle)
    }

    fn advance(&mut self, from: AuthPhase, to: AuthPhase) -> bool {
        if *self != from {
            return false;
        }
        *self = to;
        true
    }
}

/// Emails with `+` are refused before any request is made
pub fn email_allowed(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && !email.contains('+')
}

pub fn code_allowed(code: &str) -> bool {
    !code.trim().is_empty()
}
