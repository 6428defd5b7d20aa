#![allow(warnings)]
//! Knit Bingo Frontend Entry Point

mod actions;
mod app;
mod auth;
mod board;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod fly;
mod marquee;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
