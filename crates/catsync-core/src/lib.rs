pub mod coerce;
pub mod error;
pub mod identity;
pub mod record;

pub use error::{ErrorCategory, Result, SyncError};
pub use identity::{IdentityKey, IdentitySet};
pub use record::{MappedCategory, MappedProduct, SourceCategory, SourceProduct, SyncOutcome};
