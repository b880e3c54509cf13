//! End-to-end tests: the trigger surface against wiremock upstreams.

use catsync_server::{AppConfig, AppState, build_app};
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_server(
    source_uri: &str,
    destination_uri: &str,
) -> (String, tokio::sync::oneshot::Sender<()>, JoinHandle<()>) {
    let mut cfg = AppConfig::default();
    cfg.source.base_url = source_uri.to_string();
    cfg.destination.base_url = destination_uri.to_string();
    let state = AppState::from_config(&cfg).expect("build state");
    let app = build_app(state);

    // Bind to an ephemeral port
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });

    (format!("http://{addr}"), tx, server)
}

#[tokio::test]
async fn health_and_banner_endpoints_work() {
    let source = MockServer::start().await;
    let destination = MockServer::start().await;
    let (base, shutdown_tx, handle) = start_server(&source.uri(), &destination.uri()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["service"], "Catsync");
    assert_eq!(body["status"], "ok");

    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

/// Scenario A: one of two source categories is missing downstream; it
/// is mapped, pushed in a single batch and counted in the envelope.
#[tokio::test]
async fn sync_category_pushes_missing_records() {
    let source = MockServer::start().await;
    let destination = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id_categoria": 1, "nombre": "Books", "activo": 1},
                {"id_categoria": 2, "nombre": "Toys", "activo": 0}
            ]
        })))
        .mount(&source)
        .await;

    Mock::given(method("GET"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"categoryID": 1, "categoryName": "Books", "isActive": true}
        ])))
        .mount(&destination)
        .await;

    Mock::given(method("POST"))
        .and(path("/categorias"))
        .and(body_json(json!([
            {"categoryID": 2, "categoryName": "Toys", "isActive": false}
        ])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"created": 1})))
        .expect(1)
        .mount(&destination)
        .await;

    let (base, shutdown_tx, handle) = start_server(&source.uri(), &destination.uri()).await;

    let resp = reqwest::get(format!("{base}/sync_category")).await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["sincronizadas"], json!(1));
    assert_eq!(body["respuestaDestino"], json!({"created": 1}));

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

/// Scenario B: identical identity sets; the run short-circuits and the
/// destination sees zero POST calls.
#[tokio::test]
async fn sync_category_short_circuits_when_up_to_date() {
    let source = MockServer::start().await;
    let destination = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id_categoria": 1, "nombre": "Books", "activo": 1}]
        })))
        .mount(&source)
        .await;

    Mock::given(method("GET"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"categoryID": 1}])))
        .mount(&destination)
        .await;

    Mock::given(method("POST"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&destination)
        .await;

    let (base, shutdown_tx, handle) = start_server(&source.uri(), &destination.uri()).await;

    let resp = reqwest::get(format!("{base}/sync_category")).await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("No hay categorías nuevas para sincronizar.")
    );

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

/// Scenario C: the destination fetch gets connection refused; the run
/// aborts with the failure envelope and nothing is submitted.
#[tokio::test]
async fn sync_category_fails_when_destination_unreachable() {
    let source = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id_categoria": 1, "nombre": "Books", "activo": 1}]
        })))
        .mount(&source)
        .await;

    // Grab an ephemeral port, then free it so nothing is listening.
    let dead = MockServer::start().await;
    let dead_uri = dead.uri();
    drop(dead);

    let (base, shutdown_tx, handle) = start_server(&source.uri(), &dead_uri).await;

    let resp = reqwest::get(format!("{base}/sync_category")).await.unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error sincronizando categorías"));
    assert!(!body["error"].as_str().unwrap().is_empty());

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

/// Scenario D: the destination rejects the batch with HTTP 400; the
/// envelope carries the status and body for diagnostics.
#[tokio::test]
async fn sync_product_surfaces_rejected_submit() {
    let source = MockServer::start().await;
    let destination = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id_producto": 9,
                "sku": "SKU-9",
                "nombre": "Silla",
                "id_categoria": 2,
                "precio": "129.50",
                "stock": 4,
                "activo": 1
            }]
        })))
        .mount(&source)
        .await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&destination)
        .await;

    Mock::given(method("POST"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"detail\":\"sku exists\"}"))
        .expect(1)
        .mount(&destination)
        .await;

    let (base, shutdown_tx, handle) = start_server(&source.uri(), &destination.uri()).await;

    let resp = reqwest::get(format!("{base}/sync_product")).await.unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error sincronizando productos"));
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("400"));
    assert!(error.contains("sku exists"));

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

/// Missing `data` payloads on the source side are treated as empty,
/// so the run reports nothing to sync for products.
#[tokio::test]
async fn sync_product_treats_missing_payload_as_empty() {
    let source = MockServer::start().await;
    let destination = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&source)
        .await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&destination)
        .await;

    Mock::given(method("POST"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&destination)
        .await;

    let (base, shutdown_tx, handle) = start_server(&source.uri(), &destination.uri()).await;

    let resp = reqwest::get(format!("{base}/sync_product")).await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("No hay productos nuevos para sincronizar.")
    );

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}
