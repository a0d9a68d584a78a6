//! Profile Park - user directory gateway
//!
//! A small directory-browsing service: one relay endpoint proxies a public
//! user listing, and the directory view stack (cache-backed controller,
//! debounced search, derived stats) turns that possibly-failing fetch into a
//! consistent, searchable view.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::http_client::HttpClient;
use infrastructure::upstream::JsonPlaceholderDirectory;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let source = Arc::new(JsonPlaceholderDirectory::with_base_url(
        HttpClient::new(),
        config.upstream.base_url.clone(),
    ));

    AppState::new(source)
}
