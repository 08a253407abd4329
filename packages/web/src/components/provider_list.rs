//! Search results: loading placeholder, empty state, or a grid of cards

use dioxus::prelude::*;
use provider_search::{ResultsView, EMPTY_HINT, EMPTY_MESSAGE, LOADING_MESSAGE};

use super::{LoadingSpinner, ProviderCard};

#[component]
pub fn ProviderList(view: ResultsView) -> Element {
    match view {
        ResultsView::Loading => rsx! {
            LoadingSpinner { message: LOADING_MESSAGE }
        },
        ResultsView::Empty => rsx! {
            div {
                class: "bg-white rounded-lg shadow-md p-12 text-center",
                p { class: "text-gray-500 text-lg", "{EMPTY_MESSAGE}" }
                p { class: "text-gray-400 text-sm mt-2", "{EMPTY_HINT}" }
            }
        },
        ResultsView::Listing { heading, cards } => rsx! {
            div {
                class: "space-y-4",
                div {
                    class: "mb-4",
                    h2 { class: "text-xl font-semibold text-gray-900", "{heading}" }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                    for card in cards {
                        ProviderCard { key: "{card.npi}", card: card.clone() }
                    }
                }
            }
        },
    }
}
