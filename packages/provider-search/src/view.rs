//! Presentation rules for search results
//!
//! Pure functions from provider records to what a renderer shows. The web
//! page and the CLI both draw from these.

use crate::types::Provider;

pub const UNKNOWN_PROVIDER: &str = "Unknown Provider";
pub const LOADING_MESSAGE: &str = "Searching providers...";
pub const EMPTY_MESSAGE: &str = "No providers found";
pub const EMPTY_HINT: &str = "Try adjusting your search criteria";
pub const WEBSITE_LINK_TEXT: &str = "Visit Website \u{2192}";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Person name when both parts exist, else organization name, else the sentinel.
pub fn display_name(provider: &Provider) -> String {
    match (present(&provider.first_name), present(&provider.last_name)) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        _ => present(&provider.organization_name)
            .unwrap_or(UNKNOWN_PROVIDER)
            .to_string(),
    }
}

/// `city, state, postal_code`, skipping absent parts. `None` when all are absent.
pub fn display_location(provider: &Provider) -> Option<String> {
    let parts: Vec<&str> = [&provider.city, &provider.state, &provider.postal_code]
        .into_iter()
        .filter_map(present)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// `Found 1 provider` / `Found 3 providers`.
pub fn results_heading(count: usize) -> String {
    let noun = if count == 1 { "provider" } else { "providers" };
    format!("Found {count} {noun}")
}

/// Everything a provider card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCardView {
    /// Stable render key; unique within one response.
    pub npi: String,
    pub enumeration_type: String,
    /// Readable form of `enumeration_type` for known NPPES tags.
    pub enumeration_label: Option<&'static str>,
    pub display_name: String,
    pub location: Option<String>,
    pub specialty: Option<String>,
    /// Opened in a new tab with `rel="noreferrer"`.
    pub website: Option<String>,
}

impl From<&Provider> for ProviderCardView {
    fn from(provider: &Provider) -> Self {
        Self {
            npi: provider.npi.clone(),
            enumeration_type: provider.enumeration_type.clone(),
            enumeration_label: provider.enumeration().map(|kind| kind.label()),
            display_name: display_name(provider),
            location: display_location(provider),
            specialty: present(&provider.taxonomy).map(str::to_string),
            website: present(&provider.website).map(str::to_string),
        }
    }
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Loading,
    Empty,
    Listing {
        heading: String,
        cards: Vec<ProviderCardView>,
    },
}

impl ResultsView {
    /// Loading wins over any list still held from an earlier search.
    pub fn build(providers: &[Provider], is_loading: bool) -> Self {
        if is_loading {
            return ResultsView::Loading;
        }
        if providers.is_empty() {
            return ResultsView::Empty;
        }

        ResultsView::Listing {
            heading: results_heading(providers.len()),
            cards: providers.iter().map(ProviderCardView::from).collect(),
        }
    }
}
