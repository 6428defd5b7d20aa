//! Auth Endpoints

use gloo::net::http::Request;
use leptos::logging::log;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{read_json, send, HttpApi};
use crate::error::{Action, ApiError};
use crate::models::{MagicLinkRequest, MagicLinkResponse, Session};

pub async fn request_magic_link(api: &HttpApi, email: &str) -> Result<MagicLinkResponse, ApiError> {
    let request = Request::post(&api.url("auth/magic-link")).json(&MagicLinkRequest { email });
    let response = send(Action::RequestLink, request).await?;
    // An empty or non-JSON acknowledgment is still a success
    let ack = response.json::<MagicLinkResponse>().await.unwrap_or_default();
    log!("[AUTH] Magic link requested (link echoed: {})", ack.magic_link.is_some());
    Ok(ack)
}

pub async fn verify_code(api: &HttpApi, code: &str) -> Result<Session, ApiError> {
    let url = format!("{}?code={}", api.url("auth/magic-link-callback"), encode_code(code));
    let response = send(Action::VerifyCode, Request::get(&url).build()).await?;
    read_json(Action::VerifyCode, response).await
}

fn encode_code(code: &str) -> String {
    utf8_percent_encode(code.trim(), NON_ALPHANUMERIC).to_string()
}
