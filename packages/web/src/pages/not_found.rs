use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex flex-col items-center justify-center",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-4", "/{path}" }
            Link {
                to: Route::SearchPage {},
                class: "text-blue-600 hover:text-blue-700 text-sm",
                "\u{2190} Back to search"
            }
        }
    }
}
