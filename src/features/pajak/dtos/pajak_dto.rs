use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::pajak::models::Pajak;
use crate::shared::validation::PAJAK_ID_REGEX;

/// Request DTO for creating or replacing a tax record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PajakDto {
    /// Tax record identifier, e.g. "PJ001"
    #[validate(regex(path = *PAJAK_ID_REGEX, message = "id_pajak must match PJnnn"))]
    pub id_pajak: String,

    /// Ownership status: Swasta, Pemerintah or Campuran
    #[validate(length(min = 1, max = 100, message = "status_kepemilikan is required"))]
    pub status_kepemilikan: String,

    /// Tax kind, e.g. "Pajak Pertahanan Nilai (PPN)"
    #[validate(length(min = 1, max = 100, message = "jenis_pajak is required"))]
    pub jenis_pajak: String,

    /// Tax rate as a fraction (0.11 = 11%)
    #[validate(range(min = 0.0, max = 1.0, message = "tarif_pajak must be between 0 and 1"))]
    pub tarif_pajak: f64,

    /// Taxed amount in rupiah
    #[validate(range(min = 0, message = "besar_pajak must not be negative"))]
    pub besar_pajak: i64,
}

impl From<PajakDto> for Pajak {
    fn from(dto: PajakDto) -> Self {
        Self {
            id_pajak: dto.id_pajak,
            status_kepemilikan: dto.status_kepemilikan,
            jenis_pajak: dto.jenis_pajak,
            tarif_pajak: dto.tarif_pajak,
            besar_pajak: dto.besar_pajak,
        }
    }
}
