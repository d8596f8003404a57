use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pajak::handlers;
use crate::features::pajak::services::PajakService;

/// Create routes for the tax record feature
pub fn routes(service: Arc<PajakService>) -> Router {
    Router::new()
        .route(
            "/pajak",
            get(handlers::list_pajak).post(handlers::add_pajak),
        )
        .route(
            "/pajak/{id_pajak}",
            get(handlers::get_pajak_by_id)
                .put(handlers::update_pajak_by_id)
                .delete(handlers::delete_pajak_by_id),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pajak::models::seed_pajak;
    use crate::shared::store::MemStore;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let service = Arc::new(PajakService::new(Arc::new(MemStore::new(seed_pajak()))));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn list_returns_success_envelope() {
        let server = server();
        let response = server.get("/pajak").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
        assert_eq!(body["errors"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn duplicate_id_is_conflict() {
        let server = server();
        let response = server
            .post("/pajak")
            .json(&json!({
                "id_pajak": "PJ001",
                "status_kepemilikan": "Swasta",
                "jenis_pajak": "Pajak Pertahanan Nilai (PPN)",
                "tarif_pajak": 0.11,
                "besar_pajak": 1000000
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CONFLICT);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn malformed_id_is_validation_error() {
        let server = server();
        let response = server
            .post("/pajak")
            .json(&json!({
                "id_pajak": "pj-1",
                "status_kepemilikan": "Swasta",
                "jenis_pajak": "PPN",
                "tarif_pajak": 0.11,
                "besar_pajak": 1000000
            }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let server = server();
        server
            .get("/pajak/PJ999")
            .await
            .assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let server = server();
        server.delete("/pajak/PJ003").await.assert_status_ok();
        server
            .get("/pajak/PJ003")
            .await
            .assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
