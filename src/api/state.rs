//! Shared application state

use std::sync::Arc;

use crate::domain::directory::DirectorySource;

/// State handed to every handler. The proxy is stateless beyond its
/// collaborator handles; nothing here is mutated between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory_source: Arc<dyn DirectorySource>,
}

impl AppState {
    pub fn new(directory_source: Arc<dyn DirectorySource>) -> Self {
        Self { directory_source }
    }
}
