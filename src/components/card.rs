//! Bingo Card Component
//!
//! A single cell: static text, or an editable text area with a
//! "Contribute" action.

use leptos::prelude::*;
use web_sys::{AnimationEvent, HtmlTextAreaElement, MouseEvent};

use crate::fly::{BrowserMeasure, Measure, Rect};

const TOSS_ANIMATION: &str = "card-toss";

/// One toss at a time per card; cleared when the toss animation ends
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TossGuard {
    active: bool,
}

impl TossGuard {
    pub fn active(&self) -> bool {
        self.active
    }

    /// Returns false while a previous toss is still playing
    pub fn try_start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    pub fn finish(&mut self) {
        self.active = false;
    }
}

#[component]
pub fn BingoCard(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] background_color: Signal<String>,
    #[prop(optional, into)] text_color: MaybeProp<String>,
    /// Render a text area instead of static text
    #[prop(optional)]
    editable: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] on_text_change: Option<Callback<String>>,
    /// Receives the card's on-screen rectangle
    #[prop(optional, into)]
    on_contribute: Option<Callback<Rect>>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let toss = RwSignal::new(TossGuard::default());

    let style = move || {
        let mut style = format!("background-color: {};", background_color.get());
        if let Some(color) = text_color.get() {
            style.push_str(&format!(" color: {};", color));
        }
        style
    };

    let class = move || {
        if toss.get().active() {
            "bingo-card tossing"
        } else {
            "bingo-card"
        }
    };

    let handle_contribute = move |ev: MouseEvent| {
        ev.stop_propagation();
        let Some(callback) = on_contribute else { return };
        let mut started = false;
        toss.update(|guard| started = guard.try_start());
        if !started {
            return;
        }
        let rect = card_ref
            .get_untracked()
            .map(|el| BrowserMeasure.measure(&el))
            .unwrap_or_default();
        callback.run(rect);
    };

    let body = if editable {
        let placeholder = placeholder.unwrap_or_default();
        view! {
            <textarea
                class="card-input"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target::<HtmlTextAreaElement>(&ev).value();
                    if let Some(callback) = on_text_change {
                        callback.run(value);
                    }
                }
            />
        }
        .into_any()
    } else {
        view! { <span class="card-text">{move || text.get()}</span> }.into_any()
    };

    view! {
        <div
            node_ref=card_ref
            class=class
            style=style
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
            on:animationend=move |ev: AnimationEvent| {
                if ev.animation_name() == TOSS_ANIMATION {
                    toss.update(|guard| guard.finish());
                }
            }
        >
            {body}
            {on_contribute.map(|_| view! {
                <button
                    class="card-action"
                    disabled=move || toss.get().active()
                    on:click=handle_contribute
                >
                    "Contribute"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toss_guard_blocks_second_click() {
        let mut guard = TossGuard::default();
        assert!(guard.try_start());
        assert!(!guard.try_start());
        guard.finish();
        assert!(guard.try_start());
    }
}
