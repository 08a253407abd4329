//! Provider directory search.
//!
//! Everything the search page needs that isn't markup: the wire contract for
//! `POST /api/search/providers`, a client for it, the search form's filter
//! normalization, the request lifecycle, and the rules that turn provider
//! records into cards.
//!
//! # Example
//!
//! ```rust,ignore
//! use provider_search::{ApiConfig, ProviderClient, ResultsView, SearchField, SearchForm};
//!
//! let client = ProviderClient::new(ApiConfig::from_env());
//!
//! let mut form = SearchForm::default();
//! form.set(SearchField::City, "Austin");
//!
//! let response = client.search_providers(&form.submit()).await?;
//! match ResultsView::build(&response.providers, false) {
//!     ResultsView::Listing { heading, cards } => println!("{heading}: {}", cards.len()),
//!     _ => println!("No providers found"),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod query;
pub mod types;
pub mod view;

pub use client::ProviderClient;
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ClientError, Result};
pub use form::{SearchField, SearchForm, DEFAULT_RESULT_LIMIT};
pub use query::{QueryTicket, SearchFailure, SearchQuery, SEARCH_FAILED_FALLBACK};
pub use types::*;
pub use view::{
    display_location, display_name, results_heading, ProviderCardView, ResultsView, EMPTY_HINT,
    EMPTY_MESSAGE, LOADING_MESSAGE, UNKNOWN_PROVIDER, WEBSITE_LINK_TEXT,
};
