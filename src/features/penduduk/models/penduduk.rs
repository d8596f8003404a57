use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::Keyed;

/// Resident record in the main civil register.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Penduduk {
    pub nik: i64,
    pub nama: String,
    pub provinsi: String,
    pub kota: String,
    pub kecamatan: String,
    pub desa: String,
}

impl Keyed for Penduduk {
    type Key = i64;

    fn key(&self) -> i64 {
        self.nik
    }
}

fn row(nik: i64, nama: &str, provinsi: &str, kota: &str, kecamatan: &str, desa: &str) -> Penduduk {
    Penduduk {
        nik,
        nama: nama.to_string(),
        provinsi: provinsi.to_string(),
        kota: kota.to_string(),
        kecamatan: kecamatan.to_string(),
        desa: desa.to_string(),
    }
}

/// Demonstration rows the civil register boots with.
pub fn seed_penduduk() -> Vec<Penduduk> {
    vec![
        row(101, "Ale", "Jawa Barat", "Bandung", "Dayeuhkolot", "Bojongsoang"),
        row(102, "Leo", "Bali", "Gianyar", "Gianyar", "Siangan"),
        row(103, "Lea", "Jawa Tengah", "Yogyakarta", "Gedongtengen", "Sosromeduran"),
        row(104, "Satoru", "Jawa Timur", "Surabaya", "Tenggilis Mejoyo", "Kendangsari"),
        row(105, "Suguru", "DKI Jakarta", "Jakarta Selatan", "Kebayoran Baru", "Senayan"),
        row(106, "Ammar", "Banten", "Tangeran Selatan", "Serpong", "Rawa Buntu"),
        row(107, "Alif", "Sumatera Barat", "Padang", "Kuranji", "Ampang"),
        row(108, "Malvin", "Jawa Barat", "Bogor", "Bogor Selatan", "Cikaret"),
        row(109, "Agung", "Jawa Timur", "Jember", "Pakusari", "Kertosari"),
        row(110, "Fadlan", "Banten", "Serang", "Taktakan", "Kalang Anyar"),
        row(111, "Chadkowi", "Kota Bandung", "Bandung", "Buah Batu", "Margasari"),
        row(112, "Prabroro", "DKI Jakarta", "Jakarta Timur", "Jatinegara", "Cipinang"),
        row(113, "Anisa", "DIY", "Sleman", "Sleman", "Triharjo"),
        row(114, "Janggar", "Bali", "Badung", "Kuta", "Seminyak"),
        row(115, "Mahfud DM", "Jawa Timur", "Surabaya", "Gayungan", "Gayungan"),
        row(116, "Ali", "Banten", "Tangerang Selatan", "Ciputat Timur", "Bintaro Sektor 3A"),
        row(117, "Sandra", "Jawa Barat", "Bandung", "Sumur Bandung", "Karanganyar"),
        row(118, "Joseph", "Jawa Tengah", "Magelang", "Magelang Utara", "Wates"),
        row(119, "Lisa", "DI Yogyakarta", "Yogyakarta", "Kota Gede", "Purbayan"),
        row(120, "Bagus", "DKI Jakarta", "Jakarta Barat", "Taman Sari", "Maphar"),
    ]
}
