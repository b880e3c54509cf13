//! Schema mapping from source vocabulary to destination vocabulary.
//!
//! Pure functions, no I/O, total: a malformed numeric field maps to a
//! documented sentinel (price `0.0`, stock `0`) with a warning instead
//! of failing the run.

use catsync_core::{MappedCategory, MappedProduct, SourceCategory, SourceProduct, coerce};

/// `{id → categoryID, nombre → categoryName, activo → isActive}`.
pub fn map_category(cat: &SourceCategory) -> MappedCategory {
    MappedCategory {
        category_id: cat.id.clone(),
        category_name: cat.nombre.clone(),
        is_active: coerce::truthy(&cat.activo),
    }
}

/// `{id → productID, sku, nombre → productName, id_categoria → categoryID,
/// precio → price, stock, activo → isActive}`.
pub fn map_product(prod: &SourceProduct) -> MappedProduct {
    let price = coerce::as_f64(&prod.precio).unwrap_or_else(|| {
        tracing::warn!(
            product_id = %prod.id,
            precio = %prod.precio,
            "unparsable price, defaulting to 0.0"
        );
        0.0
    });
    let stock = coerce::as_i64(&prod.stock).unwrap_or_else(|| {
        tracing::warn!(
            product_id = %prod.id,
            stock = %prod.stock,
            "unparsable stock, defaulting to 0"
        );
        0
    });

    MappedProduct {
        product_id: prod.id.clone(),
        sku: prod.sku.clone(),
        product_name: prod.nombre.clone(),
        category_id: prod.categoria.clone(),
        price,
        stock,
        is_active: coerce::truthy(&prod.activo),
    }
}
