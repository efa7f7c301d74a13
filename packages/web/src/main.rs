//! OpenSource Hub - web front-end
//!
//! Browse, search and filter the community resources served by the hub
//! REST API: datasets, tools and code snippets.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging; wasm builds rely on the launcher's logger
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}
