use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::wisata::clients::WisataClient;
use crate::features::wisata::models::Wisata;

/// Service for tourism-object reads. Pure pass-through over the sibling
/// service; nothing is cached between calls.
pub struct WisataService {
    client: Arc<WisataClient>,
}

impl WisataService {
    pub fn new(client: Arc<WisataClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Wisata>> {
        self.client.fetch_all().await
    }

    pub async fn get_by_id(&self, id_wisata: &str) -> Result<Wisata> {
        let all = self.client.fetch_all().await?;
        all.into_iter()
            .find(|w| w.id_wisata == id_wisata)
            .ok_or_else(|| {
                AppError::NotFound(format!("Tourism object '{}' not found", id_wisata))
            })
    }
}
