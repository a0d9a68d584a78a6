//! Upstream source abstraction
//!
//! The upstream service owns the authoritative user data; the proxy relays
//! it without interpretation. Implementations live in the infrastructure
//! layer.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::DomainError;

/// A source serving the full user listing
#[async_trait]
pub trait DirectorySource: Send + Sync + std::fmt::Debug {
    /// Fetch the full user listing as raw response bytes.
    ///
    /// Every call performs a fresh outbound request; there is no caching and
    /// no retry at this seam.
    async fn fetch_raw(&self) -> Result<Bytes, DomainError>;

    /// Name of the source, for diagnostics
    fn source_name(&self) -> &'static str;
}
