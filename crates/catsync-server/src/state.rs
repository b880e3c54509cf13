use std::sync::Arc;

use catsync_engine::{DestinationCatalog, HttpDestinationCatalog, HttpSourceCatalog, SourceCatalog};
use url::Url;

use crate::config::AppConfig;

/// Shared transports, built once from configuration.
///
/// The catalogs hold no mutable state, so handlers can run any number
/// of sync invocations concurrently over the same clients.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SourceCatalog>,
    pub destination: Arc<dyn DestinationCatalog>,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let source_url = Url::parse(&cfg.source.base_url)?;
        let destination_url = Url::parse(&cfg.destination.base_url)?;
        Ok(Self {
            source: Arc::new(HttpSourceCatalog::new(source_url)),
            destination: Arc::new(HttpDestinationCatalog::new(destination_url)),
        })
    }

    /// Swap in arbitrary catalogs; used by tests.
    pub fn with_catalogs(
        source: Arc<dyn SourceCatalog>,
        destination: Arc<dyn DestinationCatalog>,
    ) -> Self {
        Self {
            source,
            destination,
        }
    }
}
