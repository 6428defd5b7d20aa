//! Fly-Ghost Overlay
//!
//! Portal-rendered clone of a contributed card, animated from its board
//! cell to the carousel. Removed when its animation ends.

use leptos::portal::Portal;
use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FlyGhostOverlay() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Portal>
            {move || store.ghost().get().map(|ghost| {
                let flight = ghost.flight;
                let keyframes = ghost.keyframes_css();
                let style = ghost.style();
                view! {
                    <style>{keyframes}</style>
                    <div
                        class="fly-ghost bingo-card"
                        style=style
                        on:animationend=move |_| actions::finish_flight(&store, flight)
                    >
                        <span class="card-text">{ghost.card.text}</span>
                    </div>
                }
            })}
        </Portal>
    }
}
