use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::pajak::models::Pajak;
use crate::features::pajakwisata::models::Pajakwisata;
use crate::shared::validation::PAJAK_ID_REGEX;

/// Request DTO for creating or replacing a merged record.
///
/// Carries the full merged field set, but only the local-owned tax fields are
/// persisted; the tourism service has no write path, so `id_wisata` and
/// `nama_objek` are accepted and echoed back only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PajakwisataDto {
    #[validate(regex(path = *PAJAK_ID_REGEX, message = "id_pajak must match PJnnn"))]
    pub id_pajak: String,

    pub id_wisata: Option<String>,

    pub nama_objek: Option<String>,

    #[validate(length(min = 1, max = 100, message = "status_kepemilikan is required"))]
    pub status_kepemilikan: String,

    #[validate(length(min = 1, max = 100, message = "jenis_pajak is required"))]
    pub jenis_pajak: String,

    #[validate(range(min = 0.0, max = 1.0, message = "tarif_pajak must be between 0 and 1"))]
    pub tarif_pajak: f64,

    #[validate(range(min = 0, message = "besar_pajak must not be negative"))]
    pub besar_pajak: i64,
}

impl PajakwisataDto {
    /// The local-owned subset that actually gets stored.
    pub fn local_record(&self) -> Pajak {
        Pajak {
            id_pajak: self.id_pajak.clone(),
            status_kepemilikan: self.status_kepemilikan.clone(),
            jenis_pajak: self.jenis_pajak.clone(),
            tarif_pajak: self.tarif_pajak,
            besar_pajak: self.besar_pajak,
        }
    }

    /// Echo of the full input as a merged record.
    pub fn into_merged(self) -> Pajakwisata {
        Pajakwisata {
            id_pajak: Some(self.id_pajak),
            id_wisata: self.id_wisata,
            nama_objek: self.nama_objek,
            status_kepemilikan: Some(self.status_kepemilikan),
            jenis_pajak: Some(self.jenis_pajak),
            tarif_pajak: Some(self.tarif_pajak),
            besar_pajak: Some(self.besar_pajak),
        }
    }
}
