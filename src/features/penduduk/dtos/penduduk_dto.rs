use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::penduduk::models::{
    Penduduk, PendudukAsuransi, PendudukBank, PendudukHotel, PendudukRental,
};

/// Request DTO for creating or replacing a resident record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PendudukDto {
    #[validate(range(min = 1, message = "nik must be positive"))]
    pub nik: i64,
    #[validate(length(min = 1, max = 255, message = "nama is required"))]
    pub nama: String,
    #[validate(length(min = 1, max = 255, message = "provinsi is required"))]
    pub provinsi: String,
    #[validate(length(min = 1, max = 255, message = "kota is required"))]
    pub kota: String,
    #[validate(length(min = 1, max = 255, message = "kecamatan is required"))]
    pub kecamatan: String,
    #[validate(length(min = 1, max = 255, message = "desa is required"))]
    pub desa: String,
}

impl From<PendudukDto> for Penduduk {
    fn from(dto: PendudukDto) -> Self {
        Self {
            nik: dto.nik,
            nama: dto.nama,
            provinsi: dto.provinsi,
            kota: dto.kota,
            kecamatan: dto.kecamatan,
            desa: dto.desa,
        }
    }
}

/// Request DTO for the car-rental sub-registry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PendudukRentalDto {
    #[validate(range(min = 1, message = "nik must be positive"))]
    pub nik: i64,
    #[validate(length(min = 1, max = 255, message = "nama is required"))]
    pub nama: String,
    #[validate(length(min = 1, max = 255, message = "kota is required"))]
    pub kota: String,
}

impl From<PendudukRentalDto> for PendudukRental {
    fn from(dto: PendudukRentalDto) -> Self {
        Self {
            nik: dto.nik,
            nama: dto.nama,
            kota: dto.kota,
        }
    }
}

/// Request DTO for the hotel sub-registry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PendudukHotelDto {
    #[validate(range(min = 1, message = "nik must be positive"))]
    pub nik: i64,
    #[validate(length(min = 1, max = 255, message = "nama is required"))]
    pub nama: String,
    #[validate(length(min = 1, max = 255, message = "kota is required"))]
    pub kota: String,
}

impl From<PendudukHotelDto> for PendudukHotel {
    fn from(dto: PendudukHotelDto) -> Self {
        Self {
            nik: dto.nik,
            nama: dto.nama,
            kota: dto.kota,
        }
    }
}

/// Request DTO for the insurance sub-registry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PendudukAsuransiDto {
    #[validate(range(min = 1, message = "nik must be positive"))]
    pub nik: i64,
    #[validate(length(min = 1, max = 255, message = "nama is required"))]
    pub nama: String,
    #[validate(length(min = 1, max = 255, message = "provinsi is required"))]
    pub provinsi: String,
    #[validate(length(min = 1, max = 255, message = "kota is required"))]
    pub kota: String,
    #[validate(length(min = 1, max = 255, message = "kecamatan is required"))]
    pub kecamatan: String,
    #[validate(length(min = 1, max = 255, message = "desa is required"))]
    pub desa: String,
}

impl From<PendudukAsuransiDto> for PendudukAsuransi {
    fn from(dto: PendudukAsuransiDto) -> Self {
        Self {
            nik: dto.nik,
            nama: dto.nama,
            provinsi: dto.provinsi,
            kota: dto.kota,
            kecamatan: dto.kecamatan,
            desa: dto.desa,
        }
    }
}

/// Request DTO for the bank sub-registry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PendudukBankDto {
    #[validate(range(min = 1, message = "nik must be positive"))]
    pub nik: i64,
    #[validate(length(min = 1, max = 255, message = "nama is required"))]
    pub nama: String,
}

impl From<PendudukBankDto> for PendudukBank {
    fn from(dto: PendudukBankDto) -> Self {
        Self {
            nik: dto.nik,
            nama: dto.nama,
        }
    }
}
