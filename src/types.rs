//! Alert summary wire types
//!
//! Read-only projection of a rule's current status as produced by the rules
//! client. Field names follow the public API surface (camelCase), so a record
//! returned by the client serializes onto the wire unchanged.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate status of a rule over the summary window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatusValue {
    #[serde(rename = "OK")]
    Ok,
    Active,
    Error,
}

/// One execution error observed inside the summary window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummaryError {
    pub date: DateTime<Utc>,
    pub message: String,
}

/// Status of a single alert instance tracked by the rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInstanceSummary {
    pub status: AlertStatusValue,
    pub muted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_start_date: Option<DateTime<Utc>>,
    pub flapping: bool,
    pub tracked: bool,
}

/// Execution duration statistics, keyed by execution timestamp (epoch millis).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionDuration {
    pub average: u64,
    pub values_with_timestamp: BTreeMap<i64, u64>,
}

/// Point-in-time summary of a rule and its alert instances.
///
/// Produced entirely by the [`RulesClient`](crate::rules::RulesClient); the
/// service passes it through without modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub rule_type_id: String,
    pub consumer: String,
    pub mute_all: bool,
    pub throttle: Option<String>,
    pub enabled: bool,
    pub status_start_date: DateTime<Utc>,
    pub status_end_date: DateTime<Utc>,
    pub status: AlertStatusValue,
    pub error_messages: Vec<AlertSummaryError>,
    pub alerts: HashMap<String, AlertInstanceSummary>,
    pub execution_duration: ExecutionDuration,
    pub revision: u64,
}
