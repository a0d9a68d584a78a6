//! JSONPlaceholder-backed directory source

use async_trait::async_trait;
use bytes::Bytes;

use super::http_client::HttpClientTrait;
use crate::domain::DomainError;
use crate::domain::directory::DirectorySource;

/// Default upstream base URL, used when configuration does not override it
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Directory source backed by the JSONPlaceholder user listing
#[derive(Debug)]
pub struct JsonPlaceholderDirectory<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> JsonPlaceholderDirectory<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_UPSTREAM_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[async_trait]
impl<C: HttpClientTrait> DirectorySource for JsonPlaceholderDirectory<C> {
    async fn fetch_raw(&self) -> Result<Bytes, DomainError> {
        self.client.get_bytes(&self.users_url()).await
    }

    fn source_name(&self) -> &'static str {
        "jsonplaceholder"
    }
}

/// Directory source backed by the gateway's own relay endpoint.
///
/// This is what a directory view client constructs: from its perspective the
/// proxy endpoint IS the upstream.
#[derive(Debug)]
pub struct ProxyDirectoryClient<C: HttpClientTrait> {
    client: C,
    endpoint: String,
}

impl<C: HttpClientTrait> ProxyDirectoryClient<C> {
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> DirectorySource for ProxyDirectoryClient<C> {
    async fn fetch_raw(&self) -> Result<Bytes, DomainError> {
        self.client.get_bytes(&self.endpoint).await
    }

    fn source_name(&self) -> &'static str {
        "directory-proxy"
    }
}
