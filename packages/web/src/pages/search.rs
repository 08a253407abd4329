//! Provider search page

use dioxus::prelude::*;
use provider_search::{ProviderClient, ProviderSearchRequest, SearchFailure, SearchQuery};

use crate::components::{ProviderList, SearchBar};

/// Search form, error banner and results
#[component]
pub fn SearchPage() -> Element {
    let client = use_context::<ProviderClient>();
    let mut query = use_signal(SearchQuery::new);

    let handle_search = move |filter: ProviderSearchRequest| {
        let ticket = query.write().start(&filter);
        let client = client.clone();

        spawn(async move {
            let outcome = client
                .search_providers(&filter)
                .await
                .map(|response| response.providers)
                .map_err(SearchFailure::from);

            query.write().complete(ticket, outcome);
        });
    };

    let is_loading = query.read().is_loading();
    let failure = query.read().failure().cloned();
    let results = query.read().results_view();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-8",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",

                // Header
                div {
                    class: "mb-8",
                    h1 { class: "text-3xl font-bold text-gray-900", "ProviderSync" }
                    p {
                        class: "text-gray-600 mt-2",
                        "Search for healthcare providers using the NPPES registry and web enrichment"
                    }
                }

                SearchBar { on_search: handle_search, is_loading }

                if let Some(failure) = failure {
                    div {
                        class: "bg-red-50 border border-red-200 rounded-lg p-4 mb-6",
                        p { class: "text-red-800", "{failure}" }
                    }
                }

                if let Some(view) = results {
                    ProviderList { view }
                }
            }
        }
    }
}
