//! In-memory rules client
//!
//! Keeps summaries in a `DashMap` keyed by rule id. Used by the binary and by
//! tests that need a real client rather than a scripted mock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::rules::client::{GetAlertSummaryParams, RulesClient, RulesClientError};
use crate::types::AlertSummary;

#[derive(Default)]
pub struct InMemoryRulesClient {
    summaries: DashMap<String, AlertSummary>,
}

impl InMemoryRulesClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the summary for a rule.
    pub fn insert_summary(&self, summary: AlertSummary) {
        self.summaries.insert(summary.id.clone(), summary);
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[async_trait]
impl RulesClient for InMemoryRulesClient {
    async fn get_alert_summary(
        &self,
        params: GetAlertSummaryParams,
    ) -> Result<AlertSummary, RulesClientError> {
        let date_start = params
            .date_start
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|_| RulesClientError::InvalidDate(raw.to_string()))
            })
            .transpose()?;

        let mut summary = self
            .summaries
            .get(&params.id)
            .map(|entry| entry.clone())
            .ok_or_else(|| RulesClientError::rule_not_found(&params.id))?;

        // A caller-supplied start date narrows the status window.
        if let Some(start) = date_start {
            summary.status_start_date = start;
        }

        debug!("Resolved summary for rule {}", params.id);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::types::{AlertStatusValue, ExecutionDuration};

    fn summary(id: &str) -> AlertSummary {
        let now = Utc::now();
        AlertSummary {
            id: id.to_string(),
            name: "disk watch".to_string(),
            tags: vec![],
            rule_type_id: "threshold".to_string(),
            consumer: "alerts".to_string(),
            mute_all: false,
            throttle: None,
            enabled: true,
            status_start_date: now,
            status_end_date: now,
            status: AlertStatusValue::Ok,
            error_messages: vec![],
            alerts: HashMap::new(),
            execution_duration: ExecutionDuration::default(),
            revision: 3,
        }
    }

    #[test]
    fn insert_updates_registry_size() {
        let client = InMemoryRulesClient::new();
        assert!(client.is_empty());

        client.insert_summary(summary("r1"));
        client.insert_summary(summary("r2"));
        assert_eq!(client.len(), 2);

        // Re-inserting the same id replaces, not grows.
        client.insert_summary(summary("r1"));
        assert_eq!(client.len(), 2);
        assert!(!client.is_empty());
    }

    #[tokio::test]
    async fn returns_stored_summary() {
        let client = InMemoryRulesClient::new();
        client.insert_summary(summary("r1"));

        let got = client
            .get_alert_summary(GetAlertSummaryParams {
                id: "r1".to_string(),
                date_start: None,
            })
            .await
            .unwrap();
        assert_eq!(got.id, "r1");
        assert_eq!(got.revision, 3);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let client = InMemoryRulesClient::new();
        let err = client
            .get_alert_summary(GetAlertSummaryParams {
                id: "missing".to_string(),
                date_start: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RulesClientError::NotFound { .. }));
        assert_eq!(err.to_string(), "Saved object [alert/missing] not found");
    }

    #[tokio::test]
    async fn date_start_moves_status_window() {
        let client = InMemoryRulesClient::new();
        client.insert_summary(summary("r1"));

        let got = client
            .get_alert_summary(GetAlertSummaryParams {
                id: "r1".to_string(),
                date_start: Some("2026-01-02T03:04:05Z".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(
            got.status_start_date,
            DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z").unwrap()
        );
    }

    #[tokio::test]
    async fn invalid_date_start_is_rejected() {
        let client = InMemoryRulesClient::new();
        client.insert_summary(summary("r1"));

        let err = client
            .get_alert_summary(GetAlertSummaryParams {
                id: "r1".to_string(),
                date_start: Some("not-a-date".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RulesClientError::InvalidDate(_)));
    }
}
