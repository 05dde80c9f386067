//! Frontend configuration module
//!
//! Compile-time settings baked into the bundle through `option_env!`, plus the
//! fixed keys used for values persisted in the browser's local storage.

/// Local storage key holding the serialized [`shared::models::Session`].
pub const SESSION_STORAGE_KEY: &str = "auth";

/// Local storage key holding the selected language code.
pub const LANGUAGE_STORAGE_KEY: &str = "app-lang";

/// Frontend configuration for the API location and defaults
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the REST API, absolute or relative to the page origin
    pub api_base_url: String,
    /// Language used when nothing valid is stored
    pub default_language: String,
    /// Number of users requested per directory page
    pub user_page_size: u32,
    /// Maximum `log` level forwarded to the browser console
    pub log_level: log::LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("PORTICO_API_BASE_URL")
                .unwrap_or("/api/v1")
                .to_string(),
            default_language: option_env!("PORTICO_DEFAULT_LANGUAGE")
                .unwrap_or("en")
                .to_string(),
            user_page_size: 3,
            log_level: option_env!("PORTICO_LOG")
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::LevelFilter::Info),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the API base against `origin` when it is a relative path.
    ///
    /// reqwest only accepts absolute URLs, so `/api/v1` served from
    /// `https://example.org` becomes `https://example.org/api/v1`.
    pub fn resolve_api_base(&self, origin: Option<&str>) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        match origin {
            Some(origin) if base.starts_with('/') => {
                format!("{}{}", origin.trim_end_matches('/'), base)
            }
            _ => base.to_string(),
        }
    }
}
