use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use catsync_core::{SyncError, SyncOutcome};
use serde::Serialize;
use serde_json::{Value, json};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "Catsync",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

/// Caller-facing wording for one record kind. The envelope vocabulary
/// (Spanish messages, `sincronizadas`/`sincronizados` count field) is
/// kept from the original service so existing callers keep working.
struct Wording {
    count_field: &'static str,
    up_to_date: &'static str,
    failure: &'static str,
}

const CATEGORY_WORDING: Wording = Wording {
    count_field: "sincronizadas",
    up_to_date: "No hay categorías nuevas para sincronizar.",
    failure: "Error sincronizando categorías",
};

const PRODUCT_WORDING: Wording = Wording {
    count_field: "sincronizados",
    up_to_date: "No hay productos nuevos para sincronizar.",
    failure: "Error sincronizando productos",
};

/// Trigger a category reconciliation run.
///
/// Always answers with a structured envelope: `{success: true, ...}`
/// with either a count or a nothing-to-sync message, or HTTP 500 with
/// `{success: false, message, error}` on any classified failure.
pub async fn sync_category(State(state): State<AppState>) -> impl IntoResponse {
    let result =
        catsync_engine::sync_categories(state.source.as_ref(), state.destination.as_ref()).await;
    envelope(result, &CATEGORY_WORDING)
}

/// Trigger a product reconciliation run.
pub async fn sync_product(State(state): State<AppState>) -> impl IntoResponse {
    let result =
        catsync_engine::sync_products(state.source.as_ref(), state.destination.as_ref()).await;
    envelope(result, &PRODUCT_WORDING)
}

fn envelope(
    result: Result<SyncOutcome, SyncError>,
    wording: &Wording,
) -> (StatusCode, Json<Value>) {
    match result {
        Ok(SyncOutcome::UpToDate) => (
            StatusCode::OK,
            Json(json!({"success": true, "message": wording.up_to_date})),
        ),
        Ok(SyncOutcome::Synced {
            count,
            destination_response,
        }) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                wording.count_field: count,
                "respuestaDestino": destination_response,
            })),
        ),
        Err(err) => {
            tracing::error!(category = %err.category(), error = %err, "{}", wording.failure);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": wording.failure,
                    "error": err.to_string(),
                })),
            )
        }
    }
}
