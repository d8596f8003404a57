use crate::core::error::Result;
use crate::features::wisata::models::Wisata;
use crate::shared::remote::RemoteClient;

/// Client for the sibling tourism-object service.
pub struct WisataClient {
    remote: RemoteClient,
    url: String,
}

impl WisataClient {
    pub fn new(remote: RemoteClient, url: String) -> Self {
        Self { remote, url }
    }

    /// Fetch the full tourism-object list. Fails wholesale with
    /// `RemoteUnavailable` when the sibling service is down, slow or returns
    /// a malformed body.
    pub async fn fetch_all(&self) -> Result<Vec<Wisata>> {
        self.remote.get_list(&self.url).await
    }
}
