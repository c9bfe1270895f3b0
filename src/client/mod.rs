//! VMS client trait — the seam between sync logic and transport
//!
//! `StatusSync` talks to the VMS only through `VmsClient`, so the HTTP
//! implementation can be swapped for an in-process mock in tests.

use crate::error::Result;
use crate::types::ResourceKind;
use async_trait::async_trait;

pub mod http;

pub use http::HttpVmsClient;

/// Core operations against the VMS JSON:API
#[async_trait]
pub trait VmsClient: Send + Sync {
    /// Look up resources of `kind` matching the consignment reference
    ///
    /// Returns the raw body of a 200 answer, undecoded; decode it with
    /// [`crate::types::FilterResponse::parse`]. A non-200 answer is an
    /// [`crate::SyncError::Upstream`].
    async fn lookup(&self, kind: ResourceKind, reference: &str) -> Result<String>;

    /// Set the `dms-status` attribute of one resource, returning the parsed
    /// response body
    async fn update_status(
        &self,
        kind: ResourceKind,
        id: &str,
        status: &str,
    ) -> Result<serde_json::Value>;

    /// Client name (e.g., "http", "mock")
    fn name(&self) -> &str;
}
