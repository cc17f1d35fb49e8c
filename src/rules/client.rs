//! Rules client trait and error types

use async_trait::async_trait;
use thiserror::Error;

use crate::types::AlertSummary;

/// Object type used in not-found messages.
pub const RULE_OBJECT_TYPE: &str = "alert";

/// Parameters for a summary read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAlertSummaryParams {
    pub id: String,
    /// Optional ISO-8601 start of the summary window.
    pub date_start: Option<String>,
}

/// Errors surfaced by a rules client.
#[derive(Debug, Error)]
pub enum RulesClientError {
    /// The identifier does not resolve to a known rule. Rendered verbatim by
    /// the HTTP layer as a not-found response.
    #[error("Saved object [{object_type}/{id}] not found")]
    NotFound { object_type: String, id: String },

    /// The supplied start date could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Any other client failure.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RulesClientError {
    pub fn rule_not_found(id: &str) -> Self {
        Self::NotFound {
            object_type: RULE_OBJECT_TYPE.to_string(),
            id: id.to_string(),
        }
    }
}

/// Read access to rule state, supplied by the host.
#[async_trait]
pub trait RulesClient: Send + Sync {
    /// Fetch the current summary of one rule.
    async fn get_alert_summary(
        &self,
        params: GetAlertSummaryParams,
    ) -> Result<AlertSummary, RulesClientError>;
}
