//! Community Endpoints

use gloo::net::http::Request;
use leptos::logging::log;

use super::{bearer, read_json, send, HttpApi};
use crate::error::{Action, ApiError};
use crate::models::{Card, CommunityCardsResponse, ContributeRequest};

pub async fn contribute(api: &HttpApi, token: &str, card: &Card) -> Result<(), ApiError> {
    let request = Request::post(&api.url("contribute"))
        .header("Authorization", &bearer(token))
        .json(&ContributeRequest { card });
    // 2xx is enough; the body is not needed
    send(Action::Contribute, request).await?;
    log!("[COMMUNITY] Contributed card {}", card.id);
    Ok(())
}

pub async fn community_cards(api: &HttpApi) -> Result<Vec<Card>, ApiError> {
    let response = send(Action::LoadCommunity, Request::get(&api.url("community/cards")).build()).await?;
    let body: CommunityCardsResponse = read_json(Action::LoadCommunity, response).await?;
    Ok(body.cards)
}
