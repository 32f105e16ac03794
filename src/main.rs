#![allow(warnings)]
//! Memoir Frontend Entry Point

mod config;
mod error;
mod models;
mod session;
mod api;
mod auth;
mod nav;
mod dashboard;
mod render;
mod store;
mod context;
mod controller;
mod components;
mod views;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Some(level) = config::log_level().to_level() {
        _ = console_log::init_with_level(level);
    }
    mount_to_body(App);
}
