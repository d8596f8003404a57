use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::Keyed;

/// Tax record for a tourism object (pajak objek wisata)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pajak {
    pub id_pajak: String,
    pub status_kepemilikan: String,
    pub jenis_pajak: String,
    pub tarif_pajak: f64,
    pub besar_pajak: i64,
}

impl Keyed for Pajak {
    type Key = String;

    fn key(&self) -> String {
        self.id_pajak.clone()
    }
}

/// Demonstration rows the registry boots with.
pub fn seed_pajak() -> Vec<Pajak> {
    let ppn = "Pajak Pertahanan Nilai (PPN)";
    vec![
        Pajak {
            id_pajak: "PJ001".to_string(),
            status_kepemilikan: "Swasta".to_string(),
            jenis_pajak: ppn.to_string(),
            tarif_pajak: 0.11,
            besar_pajak: 50_000_000,
        },
        Pajak {
            id_pajak: "PJ002".to_string(),
            status_kepemilikan: "Swasta".to_string(),
            jenis_pajak: ppn.to_string(),
            tarif_pajak: 0.11,
            besar_pajak: 100_000_000,
        },
        Pajak {
            id_pajak: "PJ003".to_string(),
            status_kepemilikan: "Pemerintah".to_string(),
            jenis_pajak: ppn.to_string(),
            tarif_pajak: 0.0,
            besar_pajak: 0,
        },
        Pajak {
            id_pajak: "PJ004".to_string(),
            status_kepemilikan: "Pemerintah".to_string(),
            jenis_pajak: ppn.to_string(),
            tarif_pajak: 0.11,
            besar_pajak: 75_000_000,
        },
        Pajak {
            id_pajak: "PJ005".to_string(),
            status_kepemilikan: "Campuran".to_string(),
            jenis_pajak: ppn.to_string(),
            tarif_pajak: 0.11,
            besar_pajak: 65_000_000,
        },
    ]
}
