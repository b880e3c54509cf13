//! Transport seams for the two remote catalogs.
//!
//! The engine only ever talks to these traits; the reqwest-backed
//! implementations live in [`crate::http`] and tests substitute
//! in-memory fakes.

use async_trait::async_trait;
use catsync_core::{MappedCategory, MappedProduct, Result, SourceCategory, SourceProduct};
use serde_json::Value;

/// The source-of-record API.
///
/// Collections arrive wrapped in an envelope whose `data` field holds
/// the records; implementations must treat a missing payload as an
/// empty sequence, never as an error.
#[async_trait]
pub trait SourceCatalog: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<SourceCategory>>;
    async fn fetch_products(&self) -> Result<Vec<SourceProduct>>;
}

/// The lagging destination API.
///
/// Reads return the collection directly as the response body; records
/// are kept as raw JSON because the engine only reads the identity
/// field. Writes carry one whole batch and return the destination's
/// acknowledgment body opaquely.
#[async_trait]
pub trait DestinationCatalog: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Value>>;
    async fn fetch_products(&self) -> Result<Vec<Value>>;
    async fn push_categories(&self, batch: &[MappedCategory]) -> Result<Value>;
    async fn push_products(&self, batch: &[MappedProduct]) -> Result<Value>;
}
