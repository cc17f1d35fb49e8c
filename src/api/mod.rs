//! HTTP API for alertsrv

pub mod handlers;
pub mod models;
pub mod routes;

pub use models::{
    AlertSummaryQuery, DeprecationReason, DeprecationSeverity, RouteAccess, RouteDeprecation,
    RouteRegistration,
};
pub use routes::{
    alert_instance_summary_registration, create_router, ALERT_INSTANCE_SUMMARY_PATH,
    DEPRECATION_ANCHOR,
};
