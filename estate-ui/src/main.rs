//! Estate Admin Dashboard
//!
//! Real-estate CRM back office built with Leptos (WASM).
//!
//! # Features
//!
//! - Client, lead, property, development, user and wallet screens
//! - Composed document titles and breadcrumbs for every route
//! - Session cookie bootstrap before any mutating call
//! - Mock lookups and REST fetches behind one resolver capability
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Routing, titles and resolution come from the `estate-admin`
//! crate; this crate only renders.

use leptos::*;
use std::str::FromStr;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod views;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = state::load_config();
    let level = log::Level::from_str(&config.logging.level).unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);

    mount_to_body(move || view! { <app::App config=config /> });
}
