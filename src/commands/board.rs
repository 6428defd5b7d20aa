//! Board Endpoints

use gloo::net::http::Request;
use leptos::logging::log;

use super::{bearer, send, HttpApi};
use crate::error::{Action, ApiError};
use crate::models::{Card, SaveBoardRequest, SaveBoardResponse};

pub async fn save_board(api: &HttpApi, token: &str, cards: &[Card]) -> Result<(), ApiError> {
    let request = Request::put(&api.url("bingo3x3"))
        .header("Authorization", &bearer(token))
        .json(&SaveBoardRequest { cards });
    let response = send(Action::Save, request).await?;
    let status = response.status();
    let ack = response.json::<SaveBoardResponse>().await.ok();
    confirm_saved(status, ack)?;
    log!("[BOARD] Saved {} cards", cards.len());
    Ok(())
}

/// A 2xx that explicitly says `ok: false` is still a failed save.
/// An empty or unreadable body counts as saved.
fn confirm_saved(status: u16, ack: Option<SaveBoardResponse>) -> Result<(), ApiError> {
    match ack {
        Some(SaveBoardResponse { ok: false }) => Err(ApiError::Rejected {
            action: Action::Save,
            status,
            message: None,
        }),
        _ => Ok(()),
    }
}
