//! Record shapes on both sides of the sync.
//!
//! Source records arrive in the source vocabulary (Spanish field
//! names, loosely typed); mapped records carry exactly the destination
//! schema and nothing else. All of these are transient, scoped to a
//! single invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A category as the source system reports it.
///
/// Loosely-typed fields are kept as raw JSON and coerced during
/// mapping; absent fields deserialize to `null` rather than failing
/// the whole fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceCategory {
    #[serde(rename = "id_categoria", default)]
    pub id: Value,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub activo: Value,
}

/// A product as the source system reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceProduct {
    #[serde(rename = "id_producto", default)]
    pub id: Value,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(rename = "id_categoria", default)]
    pub categoria: Value,
    #[serde(default)]
    pub precio: Value,
    #[serde(default)]
    pub stock: Value,
    #[serde(default)]
    pub activo: Value,
}

/// A category in destination shape, ready for submission.
///
/// The struct is closed: serialization emits exactly the destination
/// schema's fields, so nothing from the source can leak through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedCategory {
    #[serde(rename = "categoryID")]
    pub category_id: Value,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// A product in destination shape, ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedProduct {
    #[serde(rename = "productID")]
    pub product_id: Value,
    pub sku: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "categoryID")]
    pub category_id: Value,
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Outcome of one successful sync run.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The delta was empty; no write was issued.
    UpToDate,
    /// `count` records were pushed in one batch; the destination's
    /// acknowledgment body is carried opaquely.
    Synced {
        count: usize,
        destination_response: Value,
    },
}

impl SyncOutcome {
    /// Number of records pushed by this run.
    pub fn synced_count(&self) -> usize {
        match self {
            Self::UpToDate => 0,
            Self::Synced { count, .. } => *count,
        }
    }
}
