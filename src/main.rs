//! Alert summary service entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use alertsrv::api::{alert_instance_summary_registration, create_router};
use alertsrv::config::AlertConfig;
use alertsrv::license::UnrestrictedLicense;
use alertsrv::rules::InMemoryRulesClient;
use alertsrv::usage::{InMemoryUsageCounter, UsageCounter};
use alertsrv::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Alert Summary Service...");

    let config = AlertConfig::load()?;

    let registration =
        alert_instance_summary_registration(&config.docs.base_url, config.serverless);
    let usage_counter: Arc<dyn UsageCounter> = Arc::new(InMemoryUsageCounter::new());
    let rules_client = Arc::new(InMemoryRulesClient::new());
    if rules_client.is_empty() {
        info!("Rules registry is empty; summaries resolve to not-found until seeded");
    } else {
        info!("Rules registry holds {} summaries", rules_client.len());
    }
    let state = AppState::new(
        rules_client,
        Arc::new(UnrestrictedLicense),
        Some(usage_counter),
        registration,
    );

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Alert Summary Service started on {}", addr);
    info!("API endpoints:");
    info!("  GET /health - Health check");
    info!("  GET /api/alerts/alert/{{id}}/_instance_summary - Rule instance summary (deprecated)");

    axum::serve(listener, app).await?;
    Ok(())
}
