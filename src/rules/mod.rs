//! Rules client seam
//!
//! The service never stores or evaluates rules itself; everything goes through
//! the [`RulesClient`] trait. The in-memory implementation backs the binary
//! and the integration tests.

pub mod client;
pub mod memory;

pub use client::{GetAlertSummaryParams, RulesClient, RulesClientError, RULE_OBJECT_TYPE};
pub use memory::InMemoryRulesClient;
