//! Collaborator contracts
//!
//! Start contracts exposed by other plugins of the host application. The
//! shell treats them as opaque capability references; only the handful of
//! methods the store itself needs are spelled out.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The authenticated identity reported by the security service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub roles: Vec<String>,
}

/// Navigation primitive of the host application.
#[async_trait]
pub trait ApplicationContract: Send + Sync {
    async fn navigate_to_url(&self, url: &str) -> anyhow::Result<()>;
}

/// Chrome surface: breadcrumbs, document title, visibility.
pub trait ChromeContract: Send + Sync {
    fn set_breadcrumbs(&self, breadcrumbs: Vec<Breadcrumb>);
    fn set_doc_title(&self, title: &str);
    fn set_is_visible(&self, visible: bool);
}

/// Core security service; resolves the current authenticated identity.
#[async_trait]
pub trait SecurityContract: Send + Sync {
    async fn current_user(&self) -> anyhow::Result<AuthenticatedUser>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub text: String,
    pub href: Option<String>,
}

/// Feature switches granted to the current space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub features: HashMap<String, bool>,
}

/// Client-side configuration delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: Option<String>,
}

/// Search backend endpoint shown to the user when none is configured yet.
pub const SEARCH_HOST_PLACEHOLDER: &str = "https://your_deployment_url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsConfig {
    pub elasticsearch_host: String,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            elasticsearch_host: SEARCH_HOST_PLACEHOLDER.to_string(),
        }
    }
}

/// Cloud deployment information, when the app runs in a managed environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudContract {
    pub is_cloud_enabled: bool,
    pub cloud_id: Option<String>,
    pub deployment_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductAccess {
    pub has_search_access: bool,
    pub has_analytics_access: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFeatures {
    pub has_connectors: bool,
    pub has_web_crawler: bool,
}

/// Connector type advertised by the connectors plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDefinition {
    pub service_type: String,
    pub name: String,
    pub is_native: bool,
}

// Opaque plugin handles. The shell only holds on to them and republishes the
// references to consumers.
pub trait ChartsContract: Send + Sync {}
pub trait ConsoleContract: Send + Sync {}
pub trait DataContract: Send + Sync {}
pub trait GuidedOnboardingContract: Send + Sync {}
pub trait IndexMappingRenderer: Send + Sync {}
pub trait LensContract: Send + Sync {}
pub trait MlContract: Send + Sync {}
pub trait InferenceEndpointsContract: Send + Sync {}
pub trait SecurityPluginContract: Send + Sync {}
pub trait ShareContract: Send + Sync {}

/// UI settings client.
pub trait UiSettingsContract: Send + Sync {
    fn get_bool(&self, key: &str) -> bool;
}

/// Everything the host hands over when mounting the shell.
///
/// Optional fields resolve to documented defaults inside
/// [`ContextStore::new`](crate::context::ContextStore::new).
pub struct ContextProps {
    pub application: Arc<dyn ApplicationContract>,
    pub capabilities: Capabilities,
    pub charts: Option<Arc<dyn ChartsContract>>,
    pub chrome: Arc<dyn ChromeContract>,
    pub cloud: Option<CloudContract>,
    pub config: ClientConfig,
    pub connector_types: Option<Vec<ConnectorDefinition>>,
    pub console: Option<Arc<dyn ConsoleContract>>,
    pub core_security: Option<Arc<dyn SecurityContract>>,
    pub data: Option<Arc<dyn DataContract>>,
    pub es_config: Option<EsConfig>,
    pub guided_onboarding: Option<Arc<dyn GuidedOnboardingContract>>,
    /// Base path of the deployment, prefix of every composed href.
    pub base_path: String,
    pub index_mapping_renderer: Option<Arc<dyn IndexMappingRenderer>>,
    pub inference_endpoints: Option<Arc<dyn InferenceEndpointsContract>>,
    pub is_sidebar_enabled: bool,
    pub lens: Option<Arc<dyn LensContract>>,
    pub ml: Option<Arc<dyn MlContract>>,
    pub product_access: ProductAccess,
    pub product_features: ProductFeatures,
    pub product_version: Option<String>,
    pub security: Option<Arc<dyn SecurityPluginContract>>,
    pub share: Option<Arc<dyn ShareContract>>,
    pub ui_settings: Option<Arc<dyn UiSettingsContract>>,
    pub user: Option<AuthenticatedUser>,
}
