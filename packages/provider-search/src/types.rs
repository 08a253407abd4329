//! Wire types for the provider directory API
//!
//! Field names match the backend's JSON exactly (snake_case), so no renames.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search Request
// ============================================================================

/// Filter sent to `POST /api/search/providers`.
///
/// `None` means "no constraint on this attribute". Absent fields are left out
/// of the JSON body entirely rather than sent as `null` or `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ProviderSearchRequest {
    /// True when no attribute is constrained. `limit` is not a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.organization_name.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.taxonomy.is_none()
    }
}

// ============================================================================
// Provider Types
// ============================================================================

/// NPPES enumeration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationType {
    Individual,
    Organization,
}

impl EnumerationType {
    /// Parse an NPPES tag (`NPI-1` / `NPI-2`). Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "NPI-1" | "INDIVIDUAL" => Some(EnumerationType::Individual),
            "NPI-2" | "ORGANIZATION" => Some(EnumerationType::Organization),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnumerationType::Individual => "Individual",
            EnumerationType::Organization => "Organization",
        }
    }
}

/// A directory record as returned by the backend. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub npi: String,
    pub enumeration_type: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub taxonomy: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub confidence: f64,
}

impl Provider {
    pub fn enumeration(&self) -> Option<EnumerationType> {
        EnumerationType::from_tag(&self.enumeration_type)
    }
}

// ============================================================================
// Response Envelopes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSearchResponse {
    pub providers: Vec<Provider>,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Error body FastAPI-style backends send on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// `detail` is a string for `HTTPException`, a list for validation errors.
    pub(crate) fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_filter_fields_are_omitted() {
        let request = ProviderSearchRequest {
            city: Some("Austin".into()),
            limit: Some(10),
            ..Default::default()
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "city": "Austin", "limit": 10 }));
    }

    #[test]
    fn provider_optional_fields_default_to_none() {
        let provider: Provider = serde_json::from_value(json!({
            "npi": "1234567893",
            "enumeration_type": "NPI-2",
            "organization_name": "Acme Clinic",
            "confidence": 0.82
        }))
        .unwrap();

        assert_eq!(provider.organization_name.as_deref(), Some("Acme Clinic"));
        assert!(provider.first_name.is_none());
        assert!(provider.website.is_none());
        assert_eq!(provider.enumeration(), Some(EnumerationType::Organization));
    }

    #[test]
    fn provider_accepts_explicit_nulls() {
        let provider: Provider = serde_json::from_value(json!({
            "npi": "1234567893",
            "enumeration_type": "NPI-1",
            "first_name": null,
            "city": null,
            "confidence": 1
        }))
        .unwrap();

        assert!(provider.first_name.is_none());
        assert_eq!(provider.confidence, 1.0);
    }

    #[test]
    fn unknown_enumeration_tag_is_none() {
        assert_eq!(EnumerationType::from_tag("npi-1"), Some(EnumerationType::Individual));
        assert_eq!(EnumerationType::from_tag("NPI-3"), None);
    }

    #[test]
    fn unconstrained_ignores_limit() {
        let request = ProviderSearchRequest {
            limit: Some(10),
            ..Default::default()
        };
        assert!(request.is_unconstrained());
    }

    #[test]
    fn error_detail_string_and_list() {
        let detail: ErrorDetail = serde_json::from_value(json!({ "detail": "Bad state" })).unwrap();
        assert_eq!(detail.message().as_deref(), Some("Bad state"));

        let detail: ErrorDetail = serde_json::from_value(json!({
            "detail": [{ "msg": "field required" }, { "msg": "too long" }]
        }))
        .unwrap();
        assert_eq!(detail.message().as_deref(), Some("field required; too long"));
    }
}
