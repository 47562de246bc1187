//! Remote Store Configuration

use log::LevelFilter;

/// Firebase Realtime Database used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "https://ingredient-card-hooks-default-rtdb.firebaseio.com";

/// Quiet period before the search box queries the store
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Console log level installed at startup
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Connection settings for the remote store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Database root, without trailing slash
    pub base_url: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Default URL, or `INGREDIENTS_STORE_URL` if it was set at build time
    pub fn from_build_env() -> Self {
        match option_env!("INGREDIENTS_STORE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
