//! Provider search form

use dioxus::prelude::*;
use provider_search::{ProviderSearchRequest, SearchField, SearchForm};

const INPUT_CLASS: &str = "border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Seven free-text filters. Emits a normalized filter on click or Enter;
/// performs no network access itself.
#[component]
pub fn SearchBar(on_search: EventHandler<ProviderSearchRequest>, is_loading: bool) -> Element {
    let mut form = use_signal(SearchForm::default);

    let submit = move || {
        let form = form.read();
        if form.can_submit(is_loading) {
            on_search.call(form.submit());
        }
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md p-6 mb-6",
            h2 { class: "text-lg font-semibold mb-4", "Search Providers" }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                for field in SearchField::variants().iter().copied() {
                    input {
                        key: "{field.key()}",
                        r#type: "text",
                        name: field.key(),
                        class: INPUT_CLASS,
                        placeholder: field.label(),
                        value: form.read().get(field).to_string(),
                        oninput: move |e: FormEvent| form.write().set(field, e.value()),
                        onkeydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                }
                button {
                    r#type: "button",
                    class: "bg-blue-600 text-white rounded-md px-4 py-2 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !form.read().can_submit(is_loading),
                    onclick: move |_| submit(),
                    if is_loading { "Searching..." } else { "Search" }
                }
            }
        }
    }
}
