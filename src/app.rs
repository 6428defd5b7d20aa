//! Knit Bingo Frontend App
//!
//! Application shell: owns the store, wires board/carousel events to
//! actions, and renders the overlays.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, GlooTimer};
use crate::board::CardDrop;
use crate::components::{
    AnimatedBackground, AuthPanel, BingoBoard, Carousel, ErrorBanner, FlyGhostOverlay, Toast,
};
use crate::config::ApiConfig;
use crate::context::{provide_app_context, use_api};
use crate::fly::{destination_for, BrowserMeasure, Measure, Rect};
use crate::store::AppStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let store = provide_app_context(ApiConfig::resolve());
    let api = use_api();
    let carousel_ref = NodeRef::<Div>::new();

    // Load community cards on mount
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                actions::refresh_community(&api, &store).await;
            });
        }
    });

    let on_text_change = Callback::new(move |(index, text): (usize, String)| {
        store.update(|s| s.edit_card(index, text));
    });

    let on_card_drop = Callback::new(move |(index, dropped): (usize, CardDrop)| {
        store.update(|s| s.drop_card(index, dropped));
    });

    let on_contribute = Callback::new({
        let api = api.clone();
        move |(index, origin): (usize, Rect)| {
            let api = api.clone();
            let destination = carousel_ref
                .get_untracked()
                .map(|el| destination_for(BrowserMeasure.measure(&el)));
            spawn_local(async move {
                let flight = destination.map(|to| (origin, to));
                actions::contribute(&api, &store, &GlooTimer, index, flight).await;
            });
        }
    });

    let save = move |_| {
        let api = api.clone();
        spawn_local(async move {
            actions::save_board(&api, &store).await;
        });
    };

    view! {
        <AnimatedBackground />
        <div class="app-layout">
            <header class="app-header">
                <h1>"Knit Bingo"</h1>
                <AuthPanel />
            </header>

            <ErrorBanner />

            <main class="main-content">
                <BingoBoard
                    cards=Signal::derive(move || store.draft().get())
                    on_text_change=on_text_change
                    on_contribute=on_contribute
                    on_card_drop=on_card_drop
                />

                <div class="save-row">
                    <button
                        class="save-btn"
                        disabled=move || !store.with(|s| s.can_save())
                        on:click=save
                    >
                        {move || if store.saving().get() { "Saving..." } else { "Save board" }}
                    </button>
                    <Show when=move || store.with(|s| s.has_unsaved_changes())>
                        <span class="unsaved">"Unsaved changes"</span>
                    </Show>
                </div>

                <Carousel cards=Signal::derive(move || store.community().get()) viewport=carousel_ref />
            </main>
        </div>
        <Toast />
        <FlyGhostOverlay />
    }
}
