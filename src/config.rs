//! Service configuration
//!
//! Defaults, then an optional YAML file, then `ALERTSRV_` environment
//! variables. Layering is done with figment.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{AlertError, Result};

/// Top-level configuration for alertsrv.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlertConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    /// Serverless deployments register the summary route as internal.
    #[serde(default)]
    pub serverless: bool,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Documentation links advertised in deprecation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_base_url")]
    pub base_url: String,
}

fn default_service_name() -> String {
    "alertsrv".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_docs_base_url() -> String {
    "https://docs.alertsrv.dev".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: default_docs_base_url(),
        }
    }
}

impl AlertConfig {
    /// Load configuration, probing the usual file locations.
    pub fn load() -> Result<Self> {
        let candidates = [
            "config/alertsrv/alertsrv.yaml",
            "config/alertsrv.yaml",
            "alertsrv.yaml",
        ];
        let yaml_path = candidates.iter().find(|p| Path::new(p).exists());
        Self::load_from(yaml_path.copied())
    }

    /// Load configuration from an explicit file path (or defaults + env only).
    pub fn load_from(yaml_path: Option<&str>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AlertConfig::default()));
        if let Some(path) = yaml_path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("ALERTSRV_").split("__"))
            .extract()
            .map_err(|e| AlertError::Config(e.to_string()))
    }

    /// Render the current configuration as YAML.
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).unwrap_or_else(|_| "# failed to render config".to_string())
    }
}
