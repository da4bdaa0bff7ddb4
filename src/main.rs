//! Zero Regret Frontend Entry Point

mod app;
mod binder;
mod cart;
mod catalog;
mod chrome;
mod components;
mod config;
mod contact;
mod context;
mod dom;
mod error;
mod filter;
mod models;
mod notify;
mod overlay;
mod render;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
