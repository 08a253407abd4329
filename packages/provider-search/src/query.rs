//! Search request lifecycle
//!
//! `Inactive -> Pending -> Settled`, re-entering `Pending` on every new
//! submission. Each submission gets a ticket; only the latest ticket may
//! settle the query, so a slow earlier response can't overwrite a newer one.

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::types::{Provider, ProviderSearchRequest};
use crate::view::ResultsView;

/// Shown when a failure carries no usable text.
pub const SEARCH_FAILED_FALLBACK: &str = "Failed to search providers";

/// The single user-visible error kind: the search request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    message: String,
}

impl SearchFailure {
    /// Use `message` when it has content, otherwise the fixed fallback.
    pub fn from_message(message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(SEARCH_FAILED_FALLBACK);
        Self {
            message: message.to_string(),
        }
    }

    pub fn from_error(error: &ClientError) -> Self {
        debug!(status = ?error.status(), error = %error, "Provider search request failed");
        Self::from_message(Some(&error.to_string()))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

impl From<ClientError> for SearchFailure {
    fn from(error: ClientError) -> Self {
        Self::from_error(&error)
    }
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
enum QueryState {
    /// Nothing submitted yet.
    #[default]
    Inactive,
    /// Request in flight.
    Pending,
    Settled(Result<Vec<Provider>, SearchFailure>),
}

/// Owns the current search state. Replaced wholesale on each submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    state: QueryState,
    latest: u64,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new request for `filter`. Any earlier in-flight request becomes stale.
    pub fn start(&mut self, filter: &ProviderSearchRequest) -> QueryTicket {
        self.latest += 1;
        self.state = QueryState::Pending;
        debug!(
            sequence = self.latest,
            unconstrained = filter.is_unconstrained(),
            "Search started"
        );
        QueryTicket(self.latest)
    }

    /// Apply a finished request. Returns false (and changes nothing) when
    /// `ticket` has been superseded by a later `start`.
    pub fn complete(
        &mut self,
        ticket: QueryTicket,
        outcome: Result<Vec<Provider>, SearchFailure>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                sequence = ticket.0,
                latest = self.latest,
                "Discarding stale search response"
            );
            return false;
        }

        if let Err(failure) = &outcome {
            warn!(sequence = ticket.0, error = %failure.message(), "Search failed");
        }
        self.state = QueryState::Settled(outcome);
        true
    }

    fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Pending)
    }

    /// What the results area shows. `None` while inactive and after a
    /// failure; a pending query shows the loading placeholder.
    pub fn results_view(&self) -> Option<ResultsView> {
        match &self.state {
            QueryState::Inactive | QueryState::Settled(Err(_)) => None,
            QueryState::Pending => Some(ResultsView::Loading),
            QueryState::Settled(Ok(providers)) => Some(ResultsView::build(providers, false)),
        }
    }

    pub fn failure(&self) -> Option<&SearchFailure> {
        match &self.state {
            QueryState::Settled(Err(failure)) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(npi: &str) -> Provider {
        Provider {
            npi: npi.to_string(),
            enumeration_type: "NPI-1".to_string(),
            first_name: None,
            last_name: None,
            organization_name: None,
            city: None,
            state: None,
            postal_code: None,
            taxonomy: None,
            website: None,
            confidence: 0.5,
        }
    }

    #[test]
    fn starts_inactive() {
        let query = SearchQuery::new();
        assert_eq!(query.state, QueryState::Inactive);
        assert!(!query.is_loading());
    }

    #[test]
    fn start_then_complete_settles() {
        let mut query = SearchQuery::new();
        let ticket = query.start(&ProviderSearchRequest::default());
        assert!(query.is_loading());

        assert!(query.complete(ticket, Ok(vec![provider("1")])));
        assert!(!query.is_loading());
        assert!(matches!(&query.state, QueryState::Settled(Ok(p)) if p.len() == 1));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut query = SearchQuery::new();
        let first = query.start(&ProviderSearchRequest::default());
        let second = query.start(&ProviderSearchRequest::default());
        assert!(second > first);

        assert!(!query.complete(first, Ok(vec![provider("old")])));
        assert!(query.is_loading());

        assert!(query.complete(second, Ok(vec![provider("new")])));
        assert!(matches!(&query.state, QueryState::Settled(Ok(p)) if p[0].npi == "new"));

        // A late first response after the second settled changes nothing.
        assert!(!query.complete(first, Err(SearchFailure::from_message(None))));
        assert!(query.failure().is_none());
    }

    #[test]
    fn new_submission_returns_to_pending() {
        let mut query = SearchQuery::new();
        let ticket = query.start(&ProviderSearchRequest::default());
        query.complete(ticket, Ok(vec![provider("1")]));

        query.start(&ProviderSearchRequest::default());
        assert!(query.is_loading());
        assert_eq!(query.state, QueryState::Pending);
    }

    #[test]
    fn inactive_query_renders_nothing() {
        assert_eq!(SearchQuery::new().results_view(), None);
    }

    #[test]
    fn pending_query_renders_loading_placeholder() {
        let mut query = SearchQuery::new();
        let ticket = query.start(&ProviderSearchRequest::default());
        query.complete(ticket, Ok(vec![provider("1")]));

        query.start(&ProviderSearchRequest::default());
        assert_eq!(query.results_view(), Some(ResultsView::Loading));
    }

    #[test]
    fn failed_query_renders_no_results() {
        let mut query = SearchQuery::new();
        let ticket = query.start(&ProviderSearchRequest::default());
        query.complete(ticket, Err(SearchFailure::from_message(None)));

        assert_eq!(query.results_view(), None);
        assert!(query.failure().is_some());
    }

    #[test]
    fn settled_empty_query_renders_empty_state() {
        let mut query = SearchQuery::new();
        let ticket = query.start(&ProviderSearchRequest::default());
        query.complete(ticket, Ok(Vec::new()));

        assert_eq!(query.results_view(), Some(ResultsView::Empty));
    }

    #[test]
    fn settled_query_renders_listing() {
        let mut query = SearchQuery::new();
        let ticket = query.start(&ProviderSearchRequest::default());
        query.complete(ticket, Ok(vec![provider("1")]));

        match query.results_view() {
            Some(ResultsView::Listing { heading, cards }) => {
                assert_eq!(heading, "Found 1 provider");
                assert_eq!(cards[0].npi, "1");
            }
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let failure = SearchFailure::from_message(None);
        assert_eq!(failure.message(), "Failed to search providers");

        let failure = SearchFailure::from_message(Some("  "));
        assert_eq!(failure.message(), SEARCH_FAILED_FALLBACK);
    }

    #[test]
    fn failure_keeps_underlying_message() {
        let error = ClientError::Api {
            status: 400,
            message: "Invalid state code".into(),
        };
        let failure = SearchFailure::from(error);
        assert_eq!(failure.message(), "Invalid state code");
        assert_eq!(failure.to_string(), "Error: Invalid state code");
    }

    #[test]
    fn api_error_with_empty_body_uses_fallback() {
        let error = ClientError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(SearchFailure::from_error(&error).message(), SEARCH_FAILED_FALLBACK);
    }
}
