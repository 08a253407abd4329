//! Search form state and filter normalization

use crate::types::ProviderSearchRequest;

/// Result cap applied to every form submission.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// One text input on the search form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchField {
    FirstName,
    LastName,
    OrganizationName,
    City,
    State,
    PostalCode,
    Taxonomy,
}

impl SearchField {
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::FirstName => "First Name",
            SearchField::LastName => "Last Name",
            SearchField::OrganizationName => "Organization Name",
            SearchField::City => "City",
            SearchField::State => "State",
            SearchField::PostalCode => "Postal Code",
            SearchField::Taxonomy => "Taxonomy/Specialty",
        }
    }

    /// Request body key.
    pub fn key(&self) -> &'static str {
        match self {
            SearchField::FirstName => "first_name",
            SearchField::LastName => "last_name",
            SearchField::OrganizationName => "organization_name",
            SearchField::City => "city",
            SearchField::State => "state",
            SearchField::PostalCode => "postal_code",
            SearchField::Taxonomy => "taxonomy",
        }
    }

    /// Display order.
    pub fn variants() -> &'static [SearchField] {
        &[
            SearchField::FirstName,
            SearchField::LastName,
            SearchField::OrganizationName,
            SearchField::City,
            SearchField::State,
            SearchField::PostalCode,
            SearchField::Taxonomy,
        ]
    }
}

/// Raw user input for the seven filter fields. No validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub first_name: String,
    pub last_name: String,
    pub organization_name: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub taxonomy: String,
}

impl SearchForm {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::FirstName => &self.first_name,
            SearchField::LastName => &self.last_name,
            SearchField::OrganizationName => &self.organization_name,
            SearchField::City => &self.city,
            SearchField::State => &self.state,
            SearchField::PostalCode => &self.postal_code,
            SearchField::Taxonomy => &self.taxonomy,
        }
    }

    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        let slot = match field {
            SearchField::FirstName => &mut self.first_name,
            SearchField::LastName => &mut self.last_name,
            SearchField::OrganizationName => &mut self.organization_name,
            SearchField::City => &mut self.city,
            SearchField::State => &mut self.state,
            SearchField::PostalCode => &mut self.postal_code,
            SearchField::Taxonomy => &mut self.taxonomy,
        };
        *slot = value.into();
    }

    /// Submission is blocked while a search is in flight.
    pub fn can_submit(&self, is_loading: bool) -> bool {
        !is_loading
    }

    /// Build the filter for this submission.
    ///
    /// Blank fields are omitted, kept fields are trimmed, and the cap is
    /// always [`DEFAULT_RESULT_LIMIT`]. An all-blank form still yields a
    /// (constraint-free) filter.
    pub fn submit(&self) -> ProviderSearchRequest {
        ProviderSearchRequest {
            first_name: non_blank(&self.first_name),
            last_name: non_blank(&self.last_name),
            organization_name: non_blank(&self.organization_name),
            city: non_blank(&self.city),
            state: non_blank(&self.state),
            postal_code: non_blank(&self.postal_code),
            taxonomy: non_blank(&self.taxonomy),
            limit: Some(DEFAULT_RESULT_LIMIT),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
