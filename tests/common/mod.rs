//! Common test utilities and helpers

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use alertsrv::api::{alert_instance_summary_registration, create_router};
use alertsrv::license::{LicenseState, UnrestrictedLicense};
use alertsrv::rules::{GetAlertSummaryParams, RulesClient, RulesClientError};
use alertsrv::types::{AlertStatusValue, AlertSummary, ExecutionDuration};
use alertsrv::usage::UsageCounter;
use alertsrv::AppState;

pub const TEST_DOCS_BASE_URL: &str = "https://docs.alertsrv.dev";

/// Scripted outcome for the mock rules client.
pub enum MockOutcome {
    Summary(AlertSummary),
    NotFound,
    Failure(String),
}

/// Rules client that records every call and replays a scripted outcome.
pub struct MockRulesClient {
    outcome: MockOutcome,
    pub calls: Mutex<Vec<GetAlertSummaryParams>>,
}

impl MockRulesClient {
    pub fn new(outcome: MockOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RulesClient for MockRulesClient {
    async fn get_alert_summary(
        &self,
        params: GetAlertSummaryParams,
    ) -> Result<AlertSummary, RulesClientError> {
        let id = params.id.clone();
        self.calls.lock().push(params);
        match &self.outcome {
            MockOutcome::Summary(summary) => Ok(summary.clone()),
            MockOutcome::NotFound => Err(RulesClientError::rule_not_found(&id)),
            MockOutcome::Failure(message) => {
                Err(RulesClientError::Internal(anyhow::anyhow!(message.clone())))
            }
        }
    }
}

/// A fully populated summary record with a fixed timestamp.
pub fn sample_summary(id: &str) -> AlertSummary {
    let date: DateTime<Utc> = "2026-08-01T12:00:00Z".parse().unwrap();
    AlertSummary {
        id: id.to_string(),
        name: "cpu watch".to_string(),
        tags: vec!["infra".to_string()],
        rule_type_id: "threshold".to_string(),
        consumer: "alerts".to_string(),
        mute_all: false,
        throttle: None,
        enabled: true,
        status_start_date: date,
        status_end_date: date,
        status: AlertStatusValue::Ok,
        error_messages: vec![],
        alerts: HashMap::new(),
        execution_duration: ExecutionDuration::default(),
        revision: 2,
    }
}

/// Build app state around a mock client, with a default public registration.
pub fn test_state(
    rules_client: Arc<dyn RulesClient>,
    usage_counter: Option<Arc<dyn UsageCounter>>,
) -> AppState {
    test_state_with(rules_client, usage_counter, Arc::new(UnrestrictedLicense), false)
}

pub fn test_state_with(
    rules_client: Arc<dyn RulesClient>,
    usage_counter: Option<Arc<dyn UsageCounter>>,
    license: Arc<dyn LicenseState>,
    serverless: bool,
) -> AppState {
    AppState::new(
        rules_client,
        license,
        usage_counter,
        alert_instance_summary_registration(TEST_DOCS_BASE_URL, serverless),
    )
}

/// Create a test router for API testing
pub fn test_router(state: AppState) -> Router {
    create_router(state)
}
