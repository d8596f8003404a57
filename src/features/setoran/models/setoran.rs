use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::Keyed;

/// Tax deposit record (setoran pajak objek wisata).
///
/// Dates keep the registry's DD-MM-YYYY wire format.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Setoran {
    pub id_setoran: i64,
    pub id_pajak: String,
    pub tanggal_jatuh_tempo: String,
    pub tanggal_setoran: String,
    pub status_setoran: String,
    pub denda: f64,
    pub besar_pajak_setelah_denda: i64,
}

impl Keyed for Setoran {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id_setoran
    }
}

/// Demonstration rows the deposit register boots with.
pub fn seed_setoran() -> Vec<Setoran> {
    [
        (1, "PJ001", "tepat waktu", 0.0, 0),
        (2, "PJ002", "terlambat", 0.02, 100_000_000),
        (3, "PJ003", "tepat waktu", 0.0, 0),
        (4, "PJ004", "terlambat", 0.02, 75_000_000),
        (5, "PJ005", "tepat waktu", 0.0, 0),
    ]
    .into_iter()
    .map(|(id_setoran, id_pajak, status, denda, besar)| Setoran {
        id_setoran,
        id_pajak: id_pajak.to_string(),
        tanggal_jatuh_tempo: "30-11-2023".to_string(),
        tanggal_setoran: "30-11-2023".to_string(),
        status_setoran: status.to_string(),
        denda,
        besar_pajak_setelah_denda: besar,
    })
    .collect()
}
