//! Leptos DragDrop Utilities
//!
//! Typed HTML5 drag-and-drop for Leptos.
//! A payload travels through the browser's drag-data channel as JSON under a
//! custom media type; anything that fails to decode is dropped silently.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::DragEvent;

/// A value that can ride the drag-data channel
pub trait DragPayload: Serialize + DeserializeOwned {
    /// Media type the payload is stored under (e.g. `application/x-my-app-thing`)
    const MEDIA_TYPE: &'static str;
}

/// Encode a payload for `DataTransfer::setData`
pub fn encode_payload<T: DragPayload>(payload: &T) -> Option<String> {
    serde_json::to_string(payload).ok()
}

/// Decode a raw drag-data string. Empty or malformed data yields `None`.
pub fn decode_payload<T: DragPayload>(raw: &str) -> Option<T> {
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Attach a payload to a `dragstart` event
pub fn write_payload<T: DragPayload>(ev: &DragEvent, payload: &T) {
    let Some(transfer) = ev.data_transfer() else { return };
    let Some(raw) = encode_payload(payload) else { return };
    let _ = transfer.set_data(T::MEDIA_TYPE, &raw);
    transfer.set_effect_allowed("copy");
}

/// Read the payload from a `drop` event
pub fn read_payload<T: DragPayload>(ev: &DragEvent) -> Option<T> {
    let transfer = ev.data_transfer()?;
    let raw = transfer.get_data(T::MEDIA_TYPE).ok()?;
    decode_payload(&raw)
}

/// Hover state for a single drop target
#[derive(Clone, Copy)]
pub struct DropHover {
    pub is_over: ReadSignal<bool>,
    set_is_over: WriteSignal<bool>,
}

pub fn create_drop_hover() -> DropHover {
    let (is_over, set_is_over) = signal(false);
    DropHover { is_over, set_is_over }
}

/// `dragover` handler: marks the target hovered and allows dropping
pub fn make_on_dragover(hover: DropHover) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("copy");
        }
        hover.set_is_over.set(true);
    }
}

/// `dragleave` handler
pub fn make_on_dragleave(hover: DropHover) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        hover.set_is_over.set(false);
    }
}

/// `drop` handler: decodes the payload and hands it to `on_drop`.
/// Drops without a readable payload are ignored.
pub fn make_on_drop<T, F>(hover: DropHover, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    T: DragPayload,
    F: Fn(T) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        hover.set_is_over.set(false);
        if let Some(payload) = read_payload::<T>(&ev) {
            on_drop(payload);
        }
    }
}
