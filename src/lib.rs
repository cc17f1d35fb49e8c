//! Alert summary read service and application-shell context store.
//!
//! Two loosely coupled pieces share this crate: the HTTP surface exposing the
//! deprecated rule instance-summary route, and the [`context`] store that
//! aggregates collaborator contracts for the application shell.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod license;
pub mod rules;
pub mod types;
pub mod usage;

use std::sync::Arc;

pub use config::AlertConfig;
pub use error::{AlertError, Result};
pub use types::AlertSummary;

use api::models::RouteRegistration;
use license::LicenseState;
use rules::RulesClient;
use usage::UsageCounter;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub rules_client: Arc<dyn RulesClient>,
    pub license: Arc<dyn LicenseState>,
    pub usage_counter: Option<Arc<dyn UsageCounter>>,
    pub registration: Arc<RouteRegistration>,
}

impl AppState {
    pub fn new(
        rules_client: Arc<dyn RulesClient>,
        license: Arc<dyn LicenseState>,
        usage_counter: Option<Arc<dyn UsageCounter>>,
        registration: RouteRegistration,
    ) -> Self {
        Self {
            rules_client,
            license,
            usage_counter,
            registration: Arc::new(registration),
        }
    }
}
