//! API Errors
//!
//! Display strings are exactly what the error slot shows.

use std::fmt;
use thiserror::Error;

/// User-facing action a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RequestLink,
    VerifyCode,
    Save,
    Contribute,
    LoadCommunity,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::RequestLink => "Request link",
            Action::VerifyCode => "Verify code",
            Action::Save => "Save",
            Action::Contribute => "Contribute",
            Action::LoadCommunity => "Load community cards",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("{}", rejection_text(.action, .status, .message))]
    Rejected {
        action: Action,
        status: u16,
        message: Option<String>,
    },
    /// Request could not be built (body serialization)
    #[error("{action} failed (invalid request)")]
    Encode { action: Action, detail: String },
    #[error("{action} failed (network error)")]
    Network { action: Action, detail: String },
    #[error("{action} failed (unreadable response)")]
    Decode { action: Action, detail: String },
}

impl ApiError {
    pub fn action(&self) -> Action {
        match self {
            ApiError::Rejected { action, .. }
            | ApiError::Encode { action, .. }
            | ApiError::Network { action, .. }
            | ApiError::Decode { action, .. } => *action,
        }
    }
}

fn rejection_text(action: &Action, status: &u16, message: &Option<String>) -> String {
    match message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("{} failed ({})", action, status),
    }
}
