//! API request models and route registration metadata

use serde::{Deserialize, Serialize};

/// Query parameters for the summary route.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummaryQuery {
    /// ISO-8601 start of the summary window.
    pub date_start: Option<String>,
}

/// Who may call a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAccess {
    Public,
    Internal,
}

/// Why a route is deprecated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeprecationReason {
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeprecationSeverity {
    Warning,
}

/// Deprecation advisory attached to a route at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDeprecation {
    pub documentation_url: String,
    pub reason: DeprecationReason,
    pub severity: DeprecationSeverity,
}

/// Everything the router records about a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRegistration {
    pub path: &'static str,
    pub access: RouteAccess,
    pub deprecated: RouteDeprecation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deprecation_reason_serializes_as_tagged_type() {
        let value = serde_json::to_value(DeprecationReason::Remove).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "remove" }));
    }

    #[test]
    fn severity_serializes_lowercase() {
        let value = serde_json::to_value(DeprecationSeverity::Warning).unwrap();
        assert_eq!(value, serde_json::json!("warning"));
    }

    #[test]
    fn query_accepts_camel_case_date_start() {
        let query: AlertSummaryQuery =
            serde_json::from_str(r#"{"dateStart":"2026-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(query.date_start.as_deref(), Some("2026-01-01T00:00:00Z"));
    }
}
