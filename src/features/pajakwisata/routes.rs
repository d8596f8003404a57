use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pajakwisata::handlers;
use crate::features::pajakwisata::services::MergeService;

/// Create routes for the merged tax + tourism feature
pub fn routes(service: Arc<MergeService>) -> Router {
    Router::new()
        .route(
            "/pajakwisata",
            get(handlers::get_pajak_wisata).post(handlers::create_pajak_wisata),
        )
        .route(
            "/pajakwisata/{id_pajak}",
            get(handlers::get_pajak_wisata_by_id)
                .put(handlers::update_pajak_wisata)
                .delete(handlers::delete_pajak_wisata),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pajak::models::{seed_pajak, Pajak};
    use crate::features::pajakwisata::models::MergePolicy;
    use crate::features::wisata::clients::WisataClient;
    use crate::shared::remote::RemoteClient;
    use crate::shared::store::MemStore;
    use axum_test::TestServer;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_against(remote: &MockServer, local: Vec<Pajak>) -> TestServer {
        let store = Arc::new(MemStore::new(local));
        let client = Arc::new(WisataClient::new(
            RemoteClient::new(Duration::from_secs(2)).unwrap(),
            format!("{}/wisata", remote.uri()),
        ));
        let service = Arc::new(MergeService::new(store, client, MergePolicy::KeyMatch));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn merged_list_carries_both_sides() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id_wisata": "PJ001", "nama_objek": "Pantai Kuta"},
            ])))
            .mount(&remote)
            .await;

        let server = server_against(&remote, seed_pajak());
        let response = server.get("/pajakwisata").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["nama_objek"], "Pantai Kuta");
        // unmatched rows serialize tourism fields as explicit nulls
        assert!(rows[1]["nama_objek"].is_null());
    }

    #[tokio::test]
    async fn remote_down_is_bad_gateway() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&remote)
            .await;

        let server = server_against(&remote, seed_pajak());
        server
            .get("/pajakwisata")
            .await
            .assert_status(axum::http::StatusCode::BAD_GATEWAY);
        server
            .get("/pajakwisata/PJ001")
            .await
            .assert_status(axum::http::StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn join_miss_and_unknown_id_are_both_not_found() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id_wisata": "PJ001", "nama_objek": "Pantai Kuta"},
            ])))
            .mount(&remote)
            .await;

        let server = server_against(&remote, seed_pajak());
        server.get("/pajakwisata/PJ001").await.assert_status_ok();
        // known tax id, no tourism counterpart
        server
            .get("/pajakwisata/PJ002")
            .await
            .assert_status(axum::http::StatusCode::NOT_FOUND);
        // unknown tax id
        server
            .get("/pajakwisata/PJ999")
            .await
            .assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
