//! Provider card component

use dioxus::prelude::*;
use provider_search::{ProviderCardView, WEBSITE_LINK_TEXT};

/// Props for ProviderCard
#[derive(Props, Clone, PartialEq)]
pub struct ProviderCardProps {
    pub card: ProviderCardView,
}

/// Card for a single directory record
#[component]
pub fn ProviderCard(props: ProviderCardProps) -> Element {
    let card = &props.card;

    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-lg p-4 hover:shadow-md transition-shadow",

            // Header: name + enumeration type
            div {
                class: "flex justify-between items-start mb-2",
                h3 {
                    class: "text-lg font-semibold text-gray-900",
                    "{card.display_name}"
                }
                span {
                    class: "text-xs bg-blue-100 text-blue-800 px-2 py-1 rounded",
                    title: card.enumeration_label.unwrap_or_default(),
                    "{card.enumeration_type}"
                }
            }

            div {
                class: "space-y-1 text-sm text-gray-600",
                div {
                    span { class: "font-medium", "NPI:" }
                    " {card.npi}"
                }
                if let Some(location) = &card.location {
                    div {
                        span { class: "font-medium", "Location:" }
                        " {location}"
                    }
                }
                if let Some(specialty) = &card.specialty {
                    div {
                        span { class: "font-medium", "Specialty:" }
                        " {specialty}"
                    }
                }
            }

            if let Some(website) = &card.website {
                div {
                    class: "mt-3",
                    a {
                        href: "{website}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "text-blue-600 hover:text-blue-800 text-sm font-medium",
                        "{WEBSITE_LINK_TEXT}"
                    }
                }
            }
        }
    }
}
