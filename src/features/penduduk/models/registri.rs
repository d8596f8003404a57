//! Per-partner resident sub-registries. Each partner group receives its own
//! projection of the civil register, with only the fields that group needs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::Keyed;

/// Resident subset shared with the car-rental group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendudukRental {
    pub nik: i64,
    pub nama: String,
    pub kota: String,
}

impl Keyed for PendudukRental {
    type Key = i64;

    fn key(&self) -> i64 {
        self.nik
    }
}

/// Resident subset shared with the hotel group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendudukHotel {
    pub nik: i64,
    pub nama: String,
    pub kota: String,
}

impl Keyed for PendudukHotel {
    type Key = i64;

    fn key(&self) -> i64 {
        self.nik
    }
}

/// Resident subset shared with the insurance group (full address).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendudukAsuransi {
    pub nik: i64,
    pub nama: String,
    pub provinsi: String,
    pub kota: String,
    pub kecamatan: String,
    pub desa: String,
}

impl Keyed for PendudukAsuransi {
    type Key = i64;

    fn key(&self) -> i64 {
        self.nik
    }
}

/// Resident subset shared with the bank group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendudukBank {
    pub nik: i64,
    pub nama: String,
}

impl Keyed for PendudukBank {
    type Key = i64;

    fn key(&self) -> i64 {
        self.nik
    }
}

pub fn seed_rental() -> Vec<PendudukRental> {
    [
        (101, "Ale", "Bandung"),
        (102, "Leo", "Gianyar"),
        (103, "Lea", "Yogyakarta"),
        (104, "Satoru", "Surabaya"),
        (105, "Suguru", "Jakarta Selatan"),
    ]
    .into_iter()
    .map(|(nik, nama, kota)| PendudukRental {
        nik,
        nama: nama.to_string(),
        kota: kota.to_string(),
    })
    .collect()
}

pub fn seed_hotel() -> Vec<PendudukHotel> {
    [
        (101, "Ale", "Bandung"),
        (102, "Leo", "Gianyar"),
        (103, "Lea", "Yogyakarta"),
        (104, "Satoru", "Surabaya"),
        (105, "Suguru", "Jakarta Selatan"),
    ]
    .into_iter()
    .map(|(nik, nama, kota)| PendudukHotel {
        nik,
        nama: nama.to_string(),
        kota: kota.to_string(),
    })
    .collect()
}

pub fn seed_asuransi() -> Vec<PendudukAsuransi> {
    [
        (116, "Ali", "Banten", "Tangerang Selatan", "Ciputat Timur", "Bintaro Sektor 3A"),
        (117, "Sandra", "Jawa Barat", "Bandung", "Sumur Bandung", "Karanganyar"),
        (118, "Joseph", "Jawa Tengah", "Magelang", "Magelang Utara", "Wates"),
        (119, "Lisa", "DI Yogyakarta", "Yogyakarta", "Kota Gede", "Purbayan"),
        (120, "Bagus", "DKI Jakarta", "Jakarta Barat", "Taman Sari", "Maphar"),
    ]
    .into_iter()
    .map(
        |(nik, nama, provinsi, kota, kecamatan, desa)| PendudukAsuransi {
            nik,
            nama: nama.to_string(),
            provinsi: provinsi.to_string(),
            kota: kota.to_string(),
            kecamatan: kecamatan.to_string(),
            desa: desa.to_string(),
        },
    )
    .collect()
}

pub fn seed_bank() -> Vec<PendudukBank> {
    [
        (106, "Ammar"),
        (107, "Alif"),
        (108, "Malvin"),
        (109, "Agung"),
        (110, "Fadlan"),
    ]
    .into_iter()
    .map(|(nik, nama)| PendudukBank {
        nik,
        nama: nama.to_string(),
    })
    .collect()
}
