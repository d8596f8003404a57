use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::setoran::models::Setoran;
use crate::shared::validation::{PAJAK_ID_REGEX, TANGGAL_REGEX};

/// Request DTO for creating a tax deposit record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetoranDto {
    #[validate(range(min = 1, message = "id_setoran must be positive"))]
    pub id_setoran: i64,

    /// Tax record this deposit belongs to
    #[validate(regex(path = *PAJAK_ID_REGEX, message = "id_pajak must match PJnnn"))]
    pub id_pajak: String,

    /// Due date, DD-MM-YYYY
    #[validate(regex(path = *TANGGAL_REGEX, message = "tanggal_jatuh_tempo must be DD-MM-YYYY"))]
    pub tanggal_jatuh_tempo: String,

    /// Deposit date, DD-MM-YYYY
    #[validate(regex(path = *TANGGAL_REGEX, message = "tanggal_setoran must be DD-MM-YYYY"))]
    pub tanggal_setoran: String,

    /// "tepat waktu" or "terlambat"
    #[validate(length(min = 1, max = 50, message = "status_setoran is required"))]
    pub status_setoran: String,

    /// Late-payment fine as a fraction
    #[validate(range(min = 0.0, max = 1.0, message = "denda must be between 0 and 1"))]
    pub denda: f64,

    #[validate(range(min = 0, message = "besar_pajak_setelah_denda must not be negative"))]
    pub besar_pajak_setelah_denda: i64,
}

impl From<SetoranDto> for Setoran {
    fn from(dto: SetoranDto) -> Self {
        Self {
            id_setoran: dto.id_setoran,
            id_pajak: dto.id_pajak,
            tanggal_jatuh_tempo: dto.tanggal_jatuh_tempo,
            tanggal_setoran: dto.tanggal_setoran,
            status_setoran: dto.status_setoran,
            denda: dto.denda,
            besar_pajak_setelah_denda: dto.besar_pajak_setelah_denda,
        }
    }
}
