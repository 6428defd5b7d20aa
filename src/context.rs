//! Application Context
//!
//! The store and the API client, provided to every component.

use leptos::logging::log;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpApi;
use crate::config::ApiConfig;
use crate::store::{AppState, AppStore};

/// Provide the shell state and backend client; returns the store
pub fn provide_app_context(config: ApiConfig) -> AppStore {
    log!("[APP] Backend at {}", config.base_url());
    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(HttpApi::new(config));
    store
}

/// Backend client from context
pub fn use_api() -> HttpApi {
    expect_context::<HttpApi>()
}
