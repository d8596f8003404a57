use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::wisata::handlers;
use crate::features::wisata::services::WisataService;

/// Create routes for the tourism-object feature
pub fn routes(service: Arc<WisataService>) -> Router {
    Router::new()
        .route("/wisata", get(handlers::list_wisata))
        .route("/wisata/{id_wisata}", get(handlers::get_wisata_by_id))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::wisata::clients::WisataClient;
    use crate::shared::remote::RemoteClient;
    use axum_test::TestServer;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_against(remote: &MockServer) -> TestServer {
        let client = Arc::new(WisataClient::new(
            RemoteClient::new(Duration::from_secs(2)).unwrap(),
            format!("{}/wisata", remote.uri()),
        ));
        TestServer::new(routes(Arc::new(WisataService::new(client)))).unwrap()
    }

    async fn mock_list(remote: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id_wisata": "W1", "nama_objek": "Pantai Kuta"},
                {"id_wisata": "W2", "nama_objek": "Gunung Bromo"},
            ])))
            .mount(remote)
            .await;
    }

    #[tokio::test]
    async fn list_proxies_the_remote_snapshot() {
        let remote = MockServer::start().await;
        mock_list(&remote).await;

        let server = server_against(&remote);
        let response = server.get("/wisata").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_finds_a_match() {
        let remote = MockServer::start().await;
        mock_list(&remote).await;

        let server = server_against(&remote);
        let response = server.get("/wisata/W2").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["nama_objek"], "Gunung Bromo");
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_not_found() {
        let remote = MockServer::start().await;
        mock_list(&remote).await;

        let server = server_against(&remote);
        let response = server.get("/wisata/W999").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn remote_down_is_bad_gateway_on_both_endpoints() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wisata"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&remote)
            .await;

        let server = server_against(&remote);
        server
            .get("/wisata")
            .await
            .assert_status(axum::http::StatusCode::BAD_GATEWAY);
        server
            .get("/wisata/W1")
            .await
            .assert_status(axum::http::StatusCode::BAD_GATEWAY);
    }
}
