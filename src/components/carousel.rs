//! Community Carousel
//!
//! Endless auto-scrolling strip of community cards. Hovering or focusing
//! the strip pauses it; clicking a card reveals its text.

use gloo::render::{request_animation_frame, AnimationFrame};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::write_payload;
use web_sys::DragEvent;

use crate::board::CardDrop;
use crate::components::BingoCard;
use crate::marquee::{doubled, toggle_reveal, MarqueeState};
use crate::models::Card;

type FrameSlot = StoredValue<Option<AnimationFrame>, LocalStorage>;

/// Advance the strip once per frame and re-arm
fn schedule_tick(viewport: NodeRef<Div>, marquee: StoredValue<MarqueeState>, frame: FrameSlot) {
    let handle = request_animation_frame(move |_timestamp| {
        if marquee.is_disposed() {
            return;
        }
        if let Some(el) = viewport.get_untracked() {
            let extent = f64::from(el.scroll_width());
            if let Some(offset) = marquee.try_update_value(|m| m.tick(extent)) {
                el.set_scroll_left(offset.round() as i32);
            }
        }
        schedule_tick(viewport, marquee, frame);
    });
    // A disposed slot drops the handle, which cancels the frame
    frame.try_update_value(|slot| *slot = Some(handle));
}

#[component]
pub fn Carousel(
    #[prop(into)] cards: Signal<Vec<Card>>,
    /// Scroll viewport, measured by the shell as the fly-ghost destination
    viewport: NodeRef<Div>,
) -> impl IntoView {
    let marquee = StoredValue::new(MarqueeState::default());
    let frame: FrameSlot = StoredValue::new_local(None);
    let (revealed, set_revealed) = signal(None::<usize>);

    // positions point into the old list once it is replaced
    Effect::new(move |_| {
        cards.with(|_| ());
        set_revealed.set(None);
    });

    schedule_tick(viewport, marquee, frame);
    on_cleanup(move || {
        frame.try_update_value(|slot| slot.take());
    });

    let set_hovered = move |hovered: bool| marquee.update_value(|m| m.set_hovered(hovered));
    let set_focused = move |focused: bool| marquee.update_value(|m| m.set_focused(focused));

    view! {
        <section class="community">
            <h2>"Community cards"</h2>
            <div
                class="carousel-viewport"
                node_ref=viewport
                on:mouseenter=move |_| set_hovered(true)
                on:mouseleave=move |_| set_hovered(false)
                on:focusin=move |_| set_focused(true)
                on:focusout=move |_| set_focused(false)
            >
                <div class="carousel-track">
                    <For
                        each=move || doubled(&cards.get()).into_iter().enumerate()
                        key=|(slot, (index, card))| (*slot, *index, card.id.clone())
                        children=move |(_, (index, card))| {
                            let is_revealed = move || revealed.get() == Some(index);
                            let text = {
                                let full = card.text.clone();
                                Signal::derive(move || if is_revealed() { full.clone() } else { String::new() })
                            };
                            let drop = CardDrop::from(&card);
                            view! {
                                <div
                                    class=move || if is_revealed() { "carousel-item revealed" } else { "carousel-item" }
                                    tabindex="0"
                                    draggable="true"
                                    on:dragstart=move |ev: DragEvent| write_payload(&ev, &drop)
                                >
                                    <BingoCard
                                        text=text
                                        background_color=card.background_color.clone()
                                        text_color=card.text_color.clone()
                                        on_click=Callback::new(move |_| {
                                            set_revealed.update(|r| *r = toggle_reveal(*r, index));
                                        })
                                    />
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
