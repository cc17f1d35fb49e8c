//! Route registration
//!
//! The summary route carries registration metadata (access level and a fixed
//! deprecation advisory) alongside the axum wiring. Deprecation is also
//! surfaced at runtime through response headers.

use axum::{
    extract::{Request, State},
    http::{header::LINK, HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tracing::info;

use crate::api::handlers;
use crate::api::models::{
    DeprecationReason, DeprecationSeverity, RouteAccess, RouteDeprecation, RouteRegistration,
};
use crate::AppState;

/// Path of the deprecated summary route.
pub const ALERT_INSTANCE_SUMMARY_PATH: &str = "/api/alerts/alert/{id}/_instance_summary";

/// Anchor of the breaking-change entry the advisory points at.
pub const DEPRECATION_ANCHOR: &str = "#breaking-201550";

static DEPRECATION_HEADER: HeaderName = HeaderName::from_static("deprecation");

/// Registration metadata for the summary route.
///
/// Access is public unless the deployment is serverless, in which case the
/// route is internal-only.
pub fn alert_instance_summary_registration(
    docs_base_url: &str,
    is_serverless: bool,
) -> RouteRegistration {
    RouteRegistration {
        path: ALERT_INSTANCE_SUMMARY_PATH,
        access: if is_serverless {
            RouteAccess::Internal
        } else {
            RouteAccess::Public
        },
        deprecated: RouteDeprecation {
            documentation_url: format!(
                "{}/breaking-changes{}",
                docs_base_url.trim_end_matches('/'),
                DEPRECATION_ANCHOR
            ),
            reason: DeprecationReason::Remove,
            severity: DeprecationSeverity::Warning,
        },
    }
}

/// Mark responses from a deprecated route.
async fn deprecation_headers(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(DEPRECATION_HEADER.clone(), HeaderValue::from_static("true"));
    if let Ok(link) = HeaderValue::from_str(&format!(
        "<{}>; rel=\"deprecation\"",
        state.registration.deprecated.documentation_url
    )) {
        response.headers_mut().insert(LINK, link);
    }
    response
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let registration = state.registration.as_ref();
    info!(
        "Registering {} (access: {:?}, deprecated: {:?})",
        registration.path, registration.access, registration.deprecated.reason
    );

    let summary_route = Router::new()
        .route(
            ALERT_INSTANCE_SUMMARY_PATH,
            get(handlers::get_alert_instance_summary),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            deprecation_headers,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(summary_route)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_defaults_to_public_access() {
        let reg = alert_instance_summary_registration("https://docs.alertsrv.dev", false);
        assert_eq!(reg.path, "/api/alerts/alert/{id}/_instance_summary");
        assert_eq!(reg.access, RouteAccess::Public);
    }

    #[test]
    fn serverless_registration_is_internal() {
        let reg = alert_instance_summary_registration("https://docs.alertsrv.dev", true);
        assert_eq!(reg.access, RouteAccess::Internal);
    }

    #[test]
    fn deprecation_advisory_is_fixed() {
        let reg = alert_instance_summary_registration("https://docs.alertsrv.dev/", false);
        assert_eq!(reg.deprecated.reason, DeprecationReason::Remove);
        assert_eq!(reg.deprecated.severity, DeprecationSeverity::Warning);
        assert!(reg.deprecated.documentation_url.ends_with("#breaking-201550"));
        // Trailing slash on the base URL does not double up.
        assert!(!reg.deprecated.documentation_url.contains("//breaking"));
    }
}
