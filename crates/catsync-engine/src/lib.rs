//! Reconciliation engine for catsync.
//!
//! One invocation is a strictly linear run: fetch both catalogs,
//! build the destination identity set, diff, map, then either push the
//! whole delta in a single write or short-circuit. Nothing survives a
//! run, so concurrent invocations are safe by construction.

pub mod api;
pub mod delta;
pub mod http;
pub mod mapper;
pub mod pipeline;

pub use api::{DestinationCatalog, SourceCatalog};
pub use http::{HttpDestinationCatalog, HttpSourceCatalog};
pub use pipeline::{sync_categories, sync_products};
