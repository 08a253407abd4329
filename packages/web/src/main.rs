//! Provider directory search - Dioxus fullstack web application
//!
//! One page: a filter form, a call to `POST /api/search/providers`, and the
//! matching providers rendered as cards.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! PROVIDER_API_URL=http://localhost:8000 dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! PROVIDER_API_URL=https://directory.example.org dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;

use provider_search::ApiConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    // The browser has no process environment; it gets the build-time value.
    #[cfg(not(target_arch = "wasm32"))]
    let config = ApiConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    let config = ApiConfig::from_build_env();

    tracing::info!(api_url = config.base_url(), "Starting provider search");
    api::init_api_config(config);

    dioxus::launch(app::App);
}
