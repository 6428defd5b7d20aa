//! Toast and Error Banner
//!
//! Toasts dismiss themselves (see `actions::notify`) or on click.
//! The error banner holds the last failed action's message.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.toast().get().map(|toast| view! {
            <div class="toast" role="status" on:click=move |_| actions::dismiss_toast(&store)>
                {toast.text}
            </div>
        })}
    }
}

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span>{message}</span>
                <button class="close-btn" on:click=move |_| actions::dismiss_error(&store)>"×"</button>
            </div>
        })}
    }
}
