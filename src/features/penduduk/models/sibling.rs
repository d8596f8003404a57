//! Record shapes served by the partner groups' own APIs. These are fetched
//! live and never stored; the fields mirror what each group publishes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resident as published by the insurance group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Asuransi {
    pub nik: i64,
    pub nama: String,
    pub provinsi: String,
    pub kota: String,
    pub kecamatan: String,
    pub desa: String,
}

/// Resident as published by the bank group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Bank {
    pub nik: i64,
    pub nama: String,
}

/// Resident as published by the hotel group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Hotel {
    pub nik: i64,
    pub nama: String,
    pub kabupaten: String,
}

/// Customer as published by the car-rental group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Rental {
    pub nomor_telepon: String,
    pub email: String,
}

/// Guide as published by the tour-guide group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Guide {
    pub id_guider: String,
    pub nama_guider: String,
}
