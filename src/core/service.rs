//! Listing service trait
//!
//! The seam between the normalization core and the query layer that
//! actually hits a data store. The crate only defines the contract; a
//! repository or query-builder implements it per domain.

use anyhow::Result;
use async_trait::async_trait;

use super::params::{FindAllParams, Page, PageRequest};

/// Service trait for executing a composed list request
///
/// Implementations translate the sanitized filters and sort spec into a
/// data-store query. They may assume every populated filter field already
/// passed validation and must not re-validate. Cancellation and timeouts
/// belong to the implementation, not to the callers of this trait.
#[async_trait]
pub trait ListingService<T>: Send + Sync {
    /// Run the listing and return one page of results
    async fn find_all(&self, params: &FindAllParams, page: &PageRequest) -> Result<Page<T>>;
}
