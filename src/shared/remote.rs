use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::core::error::{AppError, Result};

/// HTTP client for fetching record lists from sibling services.
///
/// One GET per call, bounded by the configured timeout, no retries and no
/// caching: every merge operation sees a fresh remote snapshot. Any failure
/// mode (network error, timeout, non-2xx status, body that is not a JSON
/// array) surfaces as `RemoteUnavailable` for the whole operation.
#[derive(Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("PemdataCore/1.0 (government-data-aggregator)")
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch a JSON array of records from `url`.
    pub async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Remote request to {} failed: {:?}", url, e);
            AppError::RemoteUnavailable(format!("Request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Remote {} returned status: {}", url, status);
            return Err(AppError::RemoteUnavailable(format!(
                "Remote {} returned status {}",
                url, status
            )));
        }

        // A body that is not a JSON array of records is a fetch failure,
        // never an empty list.
        response.json::<Vec<T>>().await.map_err(|e| {
            tracing::error!("Failed to parse response from {}: {:?}", url, e);
            AppError::RemoteUnavailable(format!("Malformed response from {}: {}", url, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Row {
        id: String,
    }

    fn client() -> RemoteClient {
        RemoteClient::new(Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn parses_json_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rows"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": "a"}, {"id": "b"}])),
            )
            .mount(&server)
            .await;

        let rows: Vec<Row> = client()
            .get_list(&format!("{}/rows", server.uri()))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "a");
    }

    #[tokio::test]
    async fn non_success_status_is_remote_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rows"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result: Result<Vec<Row>> = client().get_list(&format!("{}/rows", server.uri())).await;
        assert!(matches!(result, Err(AppError::RemoteUnavailable(_))));
    }

    #[tokio::test]
    async fn non_array_body_is_remote_unavailable_not_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rows"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "a"})),
            )
            .mount(&server)
            .await;

        let result: Result<Vec<Row>> = client().get_list(&format!("{}/rows", server.uri())).await;
        assert!(matches!(result, Err(AppError::RemoteUnavailable(_))));
    }

    #[tokio::test]
    async fn timeout_is_remote_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rows"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = RemoteClient::new(Duration::from_millis(50)).unwrap();
        let result: Result<Vec<Row>> = client.get_list(&format!("{}/rows", server.uri())).await;
        assert!(matches!(result, Err(AppError::RemoteUnavailable(_))));
    }

    #[tokio::test]
    async fn connection_error_is_remote_unavailable() {
        // Nothing listens on this port.
        let result: Result<Vec<Row>> = client().get_list("http://127.0.0.1:9/rows").await;
        assert!(matches!(result, Err(AppError::RemoteUnavailable(_))));
    }
}
