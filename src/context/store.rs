//! Context store
//!
//! Plain struct standing in for the host's reactive store: constructor values
//! are republished field by field with per-field defaults, the current user is
//! the only mutable field, and `is_cloud` is derived from the cloud contract.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::context::contracts::{
    ApplicationContract, AuthenticatedUser, Capabilities, ChartsContract, ChromeContract,
    ClientConfig, CloudContract, ConnectorDefinition, ConsoleContract, ContextProps, DataContract,
    EsConfig, GuidedOnboardingContract, IndexMappingRenderer, InferenceEndpointsContract,
    LensContract, MlContract, ProductAccess, ProductFeatures, SecurityContract,
    SecurityPluginContract, ShareContract, UiSettingsContract,
};

/// Options for [`ContextStore::create_href`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateHrefOptions {
    /// Use the path verbatim instead of composing it with the base path.
    pub should_not_create_href: bool,
}

pub struct ContextStore {
    pub application: Arc<dyn ApplicationContract>,
    pub capabilities: Capabilities,
    pub charts: Option<Arc<dyn ChartsContract>>,
    pub chrome: Arc<dyn ChromeContract>,
    pub cloud: Option<CloudContract>,
    pub config: ClientConfig,
    pub connector_types: Vec<ConnectorDefinition>,
    pub console: Option<Arc<dyn ConsoleContract>>,
    pub core_security: Option<Arc<dyn SecurityContract>>,
    pub data: Option<Arc<dyn DataContract>>,
    pub es_config: EsConfig,
    pub guided_onboarding: Option<Arc<dyn GuidedOnboardingContract>>,
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
    user: RwLock<Option<AuthenticatedUser>>,
}

impl ContextStore {
    /// Build the store, applying per-field defaults for absent collaborators.
    pub fn new(props: ContextProps) -> Self {
        Self {
            application: props.application,
            capabilities: props.capabilities,
            charts: props.charts,
            chrome: props.chrome,
            cloud: props.cloud,
            config: props.config,
            connector_types: props.connector_types.unwrap_or_default(),
            console: props.console,
            core_security: props.core_security,
            data: props.data,
            es_config: props.es_config.unwrap_or_default(),
            guided_onboarding: props.guided_onboarding,
            base_path: props.base_path,
            index_mapping_renderer: props.index_mapping_renderer,
            inference_endpoints: props.inference_endpoints,
            is_sidebar_enabled: props.is_sidebar_enabled,
            lens: props.lens,
            ml: props.ml,
            product_access: props.product_access,
            product_features: props.product_features,
            product_version: props.product_version,
            security: props.security,
            share: props.share,
            ui_settings: props.ui_settings,
            user: RwLock::new(props.user),
        }
    }

    /// Replace the current user. Observable immediately.
    pub fn set_user(&self, user: Option<AuthenticatedUser>) {
        *self.user.write() = user;
    }

    pub fn user(&self) -> Option<AuthenticatedUser> {
        self.user.read().clone()
    }

    /// True iff a cloud contract was supplied and reports cloud as enabled.
    pub fn is_cloud(&self) -> bool {
        self.cloud
            .as_ref()
            .map(|cloud| cloud.is_cloud_enabled)
            .unwrap_or(false)
    }

    /// Compose a target href from the base path and the supplied options.
    pub fn create_href(&self, path: &str, options: CreateHrefOptions) -> String {
        if options.should_not_create_href {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Compose an href and delegate to the host's navigation primitive.
    pub async fn navigate_to_url(
        &self,
        path: &str,
        options: CreateHrefOptions,
    ) -> anyhow::Result<()> {
        let href = self.create_href(path, options);
        self.application.navigate_to_url(&href).await
    }
}

/// Build the store and kick off the one-shot identity fetch.
///
/// When a core-security contract was supplied, the returned handle resolves
/// once the fetched identity has been applied through
/// [`ContextStore::set_user`]. A failed fetch leaves the user field at its
/// initial value.
pub fn mount_context(props: ContextProps) -> (Arc<ContextStore>, Option<JoinHandle<()>>) {
    let store = Arc::new(ContextStore::new(props));
    let fetch = store.core_security.clone().map(|security| {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            match security.current_user().await {
                Ok(user) => store.set_user(Some(user)),
                Err(err) => debug!("current-user fetch failed: {err}"),
            }
        })
    });
    (store, fetch)
}
