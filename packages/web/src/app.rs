//! Root application component

use dioxus::prelude::*;

use crate::api::provider_client;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    // The search page pulls the client from context instead of global state.
    use_context_provider(provider_client);

    rsx! {
        // Global styles
        document::Script { src: "https://cdn.tailwindcss.com" }

        Router::<Route> {}
    }
}
