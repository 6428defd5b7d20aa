//! Auth Panel Component
//!
//! Email → code → signed in. The email field pulses when a logged-out
//! user tries to contribute.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::actions;
use crate::auth::AuthPhase;
use crate::context::use_api;
use crate::store::{use_app_store, AppStateStoreFields};

/// Which form to show; the session itself is read separately
#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Email,
    Sending,
    Code,
    SignedIn,
}

impl From<&AuthPhase> for Stage {
    fn from(phase: &AuthPhase) -> Self {
        match phase {
            AuthPhase::Idle => Stage::Email,
            AuthPhase::LinkRequested => Stage::Sending,
            AuthPhase::CodeEntry => Stage::Code,
            AuthPhase::Authenticated(_) => Stage::SignedIn,
        }
    }
}

#[component]
fn EmailForm(sending: bool) -> impl IntoView {
    let store = use_app_store();

    let api = use_api();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            actions::request_link(&api, &store).await;
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input
                type="email"
                class=move || if store.email_pulse().get() { "email-input pulse" } else { "email-input" }
                placeholder="you@example.com"
                disabled=sending
                prop:value=move || store.email().get()
                on:input=move |ev| store.update(|s| s.set_email(event_target_value(&ev)))
                on:animationend=move |_| actions::clear_email_pulse(&store)
            />
            <button type="submit" disabled=move || !store.with(|s| s.can_request_link())>
                {if sending { "Sending..." } else { "Email me a code" }}
            </button>
            <Show when=move || store.email().with(|e| e.contains('+'))>
                <p class="auth-hint">"Emails with '+' are not supported."</p>
            </Show>
        </form>
    }
}

#[component]
fn CodeForm() -> impl IntoView {
    let store = use_app_store();

    let api = use_api();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            actions::verify_code(&api, &store).await;
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            {move || store.notice().get().map(|notice| view! { <p class="auth-notice">{notice}</p> })}
            <input
                type="text"
                class="code-input"
                inputmode="numeric"
                autocomplete="one-time-code"
                placeholder="Code"
                prop:value=move || store.code().get()
                on:input=move |ev| store.update(|s| s.set_code(event_target_value(&ev)))
            />
            <button type="submit" disabled=move || !store.with(|s| s.can_verify())>
                {move || if store.verifying().get() { "Checking..." } else { "Verify" }}
            </button>
            <button type="button" class="link-btn" on:click=move |_| actions::start_over(&store)>
                "Start over"
            </button>
        </form>
    }
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_app_store();
    let stage = Memo::new(move |_| store.auth().with(|phase| Stage::from(phase)));
    let signed_in_as = move || {
        store
            .auth()
            .with(|phase| phase.session().map(|s| s.email.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="auth-panel">
            {move || match stage.get() {
                Stage::Email => view! { <EmailForm sending=false /> }.into_any(),
                Stage::Sending => view! { <EmailForm sending=true /> }.into_any(),
                Stage::Code => view! { <CodeForm /> }.into_any(),
                Stage::SignedIn => view! {
                    <p class="signed-in">"Signed in as " <strong>{signed_in_as}</strong></p>
                }.into_any(),
            }}
        </div>
    }
}
