//! The linear sync run: fetch → diff → map → submit | skip → report.
//!
//! The two fetches have no ordering dependency and run concurrently;
//! the write strictly depends on both plus the diff/map steps. Any
//! failure aborts the run — there is no retry, no partial result and
//! no state to resume.

use catsync_core::{IdentityKey, IdentitySet, MappedCategory, MappedProduct, Result, SyncOutcome};

use crate::api::{DestinationCatalog, SourceCatalog};
use crate::delta::delta;
use crate::mapper::{map_category, map_product};

/// Reconcile categories: push the ones the destination is missing.
pub async fn sync_categories(
    source: &dyn SourceCatalog,
    destination: &dyn DestinationCatalog,
) -> Result<SyncOutcome> {
    tracing::info!("starting category sync");

    let (origen, destino) =
        tokio::join!(source.fetch_categories(), destination.fetch_categories());
    let origen = origen?;
    let destino = destino?;
    tracing::info!(
        source = origen.len(),
        destination = destino.len(),
        "fetched category collections"
    );

    let existing = IdentitySet::from_records(destino.iter(), "categoryID");
    let nuevas: Vec<MappedCategory> = delta(origen, &existing, |cat| {
        IdentityKey::from_value(&cat.id)
    })
    .iter()
    .map(map_category)
    .collect();

    if nuevas.is_empty() {
        tracing::info!("no new categories to sync");
        return Ok(SyncOutcome::UpToDate);
    }

    tracing::info!(count = nuevas.len(), "pushing new categories");
    let respuesta = destination.push_categories(&nuevas).await?;
    tracing::info!(count = nuevas.len(), "categories pushed");

    Ok(SyncOutcome::Synced {
        count: nuevas.len(),
        destination_response: respuesta,
    })
}

/// Reconcile products: push the ones the destination is missing.
pub async fn sync_products(
    source: &dyn SourceCatalog,
    destination: &dyn DestinationCatalog,
) -> Result<SyncOutcome> {
    tracing::info!("starting product sync");

    let (origen, destino) = tokio::join!(source.fetch_products(), destination.fetch_products());
    let origen = origen?;
    let destino = destino?;
    tracing::info!(
        source = origen.len(),
        destination = destino.len(),
        "fetched product collections"
    );

    let existing = IdentitySet::from_records(destino.iter(), "productID");
    let nuevos: Vec<MappedProduct> = delta(origen, &existing, |prod| {
        IdentityKey::from_value(&prod.id)
    })
    .iter()
    .map(map_product)
    .collect();

    if nuevos.is_empty() {
        tracing::info!("no new products to sync");
        return Ok(SyncOutcome::UpToDate);
    }

    tracing::info!(count = nuevos.len(), "pushing new products");
    let respuesta = destination.push_products(&nuevos).await?;
    tracing::info!(count = nuevos.len(), "products pushed");

    Ok(SyncOutcome::Synced {
        count: nuevos.len(),
        destination_response: respuesta,
    })
}
