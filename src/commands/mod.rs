//! Backend API Wrappers
//!
//! Frontend bindings to the Knit Bingo REST API, organized by domain.

mod auth;
mod board;
mod community;

use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Action, ApiError};
use crate::models::{Card, ErrorBody, MagicLinkResponse, Session};

/// Backend operations used by the shell
///
/// `?Send` because browser futures hold JS handles.
#[async_trait(?Send)]
pub trait BingoApi {
    /// Ask the backend to email a login code
    async fn request_magic_link(&self, email: &str) -> Result<MagicLinkResponse, ApiError>;

    /// Exchange an emailed code for a session
    async fn verify_code(&self, code: &str) -> Result<Session, ApiError>;

    /// Persist the full nine-card board
    async fn save_board(&self, token: &str, cards: &[Card]) -> Result<(), ApiError>;

    /// Share one card with the community
    async fn contribute(&self, token: &str, card: &Card) -> Result<(), ApiError>;

    /// Current community cards (may be empty)
    async fn community_cards(&self) -> Result<Vec<Card>, ApiError>;
}

/// HTTP implementation over `fetch`
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl BingoApi for HttpApi {
    async fn request_magic_link(&self, email: &str) -> Result<MagicLinkResponse, ApiError> {
        auth::request_magic_link(self, email).await
    }

    async fn verify_code(&self, code: &str) -> Result<Session, ApiError> {
        auth::verify_code(self, code).await
    }

    async fn save_board(&self, token: &str, cards: &[Card]) -> Result<(), ApiError> {
        board::save_board(self, token, cards).await
    }

    async fn contribute(&self, token: &str, card: &Card) -> Result<(), ApiError> {
        community::contribute(self, token, card).await
    }

    async fn community_cards(&self) -> Result<Vec<Card>, ApiError> {
        community::community_cards(self).await
    }
}

// ========================
// Shared Helpers
// ========================

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Send a built request and turn non-2xx into `ApiError::Rejected`
async fn send(action: Action, request: Result<Request, gloo::net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| build_failed(action, e))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network { action, detail: e.to_string() })?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.message);
    Err(ApiError::Rejected { action, status, message })
}

fn build_failed(action: Action, err: gloo::net::Error) -> ApiError {
    ApiError::Encode { action, detail: err.to_string() }
}

async fn read_json<T: DeserializeOwned>(action: Action, response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode { action, detail: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbuildable_request_is_not_a_bad_response() {
        let err = build_failed(Action::Contribute, gloo::net::Error::GlooError("bad body".into()));
        assert_eq!(err, ApiError::Encode { action: Action::Contribute, detail: "bad body".into() });
        assert_eq!(err.to_string(), "Contribute failed (invalid request)");
    }
}
