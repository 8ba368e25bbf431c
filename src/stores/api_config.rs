use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

/// Used when neither localStorage nor the build environment names a backend
pub const DEFAULT_API_BASE: &str = "/api";

/// Overrides the backend base URL at runtime (handy against staging servers)
const STORAGE_KEY: &str = "freelancer_api_base";

/// Backend location for all REST calls
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("FREELANCER_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// URL of the freelancer lookup endpoint for one identifier
    pub fn freelancer_url(&self, id: &str) -> String {
        format!("{}/freelancers/{}", self.base_url, urlencoding::encode(id))
    }
}

/// Global API configuration
pub static API_CONFIG: GlobalSignal<ApiConfig> = Signal::global(ApiConfig::default);

/// Initialize the API config, preferring a base URL saved in localStorage
pub fn init_api_config() {
    match LocalStorage::get::<String>(STORAGE_KEY) {
        Ok(base) => {
            let config = ApiConfig::new(&base);
            log::info!("Using API base from storage: {}", config.base_url);
            *API_CONFIG.write() = config;
        }
        Err(_) => {
            log::info!("Using API base: {}", API_CONFIG.read().base_url);
        }
    }
}

/// Snapshot of the current config for use inside async tasks
pub fn current() -> ApiConfig {
    API_CONFIG.read().clone()
}
