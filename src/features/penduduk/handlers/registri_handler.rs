//! Handlers for the per-partner resident sub-registries. Same envelope and
//! error discipline as the main register; rental and hotel expose full CRUD,
//! insurance and bank are append/read only.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::penduduk::dtos::{
    PendudukAsuransiDto, PendudukBankDto, PendudukHotelDto, PendudukRentalDto,
};
use crate::features::penduduk::models::{
    PendudukAsuransi, PendudukBank, PendudukHotel, PendudukRental,
};
use crate::features::penduduk::services::RegistriService;
use crate::shared::types::ApiResponse;

// Car-rental register

/// Add a resident to the car-rental register
#[utoipa::path(
    post,
    path = "/pendudukrental",
    request_body = PendudukRentalDto,
    responses(
        (status = 200, description = "Record created", body = ApiResponse<PendudukRental>),
        (status = 409, description = "NIK already registered")
    ),
    tag = "pendudukrental"
)]
pub async fn tambah_pendudukrental(
    State(service): State<Arc<RegistriService>>,
    AppJson(dto): AppJson<PendudukRentalDto>,
) -> Result<Json<ApiResponse<PendudukRental>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = service.rental_create(dto)?;
    Ok(Json(ApiResponse::success(
        Some(record),
        Some("Data Penduduk berhasil ditambahkan".to_string()),
    )))
}

/// List the car-rental register
#[utoipa::path(
    get,
    path = "/pendudukrental",
    responses(
        (status = 200, description = "All records", body = ApiResponse<Vec<PendudukRental>>),
    ),
    tag = "pendudukrental"
)]
pub async fn get_pendudukrental(
    State(service): State<Arc<RegistriService>>,
) -> Result<Json<ApiResponse<Vec<PendudukRental>>>> {
    Ok(Json(ApiResponse::success(Some(service.rental_list()), None)))
}

/// Get a car-rental record by NIK
#[utoipa::path(
    get,
    path = "/pendudukrental/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Record found", body = ApiResponse<PendudukRental>),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukrental"
)]
pub async fn get_pendudukrental_by_nik(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<PendudukRental>>> {
    Ok(Json(ApiResponse::success(Some(service.rental_get(nik)?), None)))
}

/// Replace a car-rental record by NIK
#[utoipa::path(
    put,
    path = "/pendudukrental/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    request_body = PendudukRentalDto,
    responses(
        (status = 200, description = "Record updated", body = ApiResponse<PendudukRental>),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukrental"
)]
pub async fn update_pendudukrental_by_nik(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
    AppJson(dto): AppJson<PendudukRentalDto>,
) -> Result<Json<ApiResponse<PendudukRental>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = service.rental_update(nik, dto)?;
    Ok(Json(ApiResponse::success(
        Some(record),
        Some("Data Penduduk berhasil diperbarui".to_string()),
    )))
}

/// Delete a car-rental record by NIK
#[utoipa::path(
    delete,
    path = "/pendudukrental/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukrental"
)]
pub async fn delete_pendudukrental(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.rental_delete(nik)?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data Penduduk berhasil dihapus".to_string()),
    )))
}

// Hotel register

/// Add a resident to the hotel register
#[utoipa::path(
    post,
    path = "/pendudukhotel",
    request_body = PendudukHotelDto,
    responses(
        (status = 200, description = "Record created", body = ApiResponse<PendudukHotel>),
        (status = 409, description = "NIK already registered")
    ),
    tag = "pendudukhotel"
)]
pub async fn tambah_pendudukhotel(
    State(service): State<Arc<RegistriService>>,
    AppJson(dto): AppJson<PendudukHotelDto>,
) -> Result<Json<ApiResponse<PendudukHotel>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = service.hotel_create(dto)?;
    Ok(Json(ApiResponse::success(
        Some(record),
        Some("Data Penduduk berhasil ditambahkan".to_string()),
    )))
}

/// List the hotel register
#[utoipa::path(
    get,
    path = "/pendudukhotel",
    responses(
        (status = 200, description = "All records", body = ApiResponse<Vec<PendudukHotel>>),
    ),
    tag = "pendudukhotel"
)]
pub async fn get_pendudukhotel(
    State(service): State<Arc<RegistriService>>,
) -> Result<Json<ApiResponse<Vec<PendudukHotel>>>> {
    Ok(Json(ApiResponse::success(Some(service.hotel_list()), None)))
}

/// Get a hotel record by NIK
#[utoipa::path(
    get,
    path = "/pendudukhotel/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Record found", body = ApiResponse<PendudukHotel>),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukhotel"
)]
pub async fn get_pendudukhotel_by_nik(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<PendudukHotel>>> {
    Ok(Json(ApiResponse::success(Some(service.hotel_get(nik)?), None)))
}

/// Replace a hotel record by NIK
#[utoipa::path(
    put,
    path = "/pendudukhotel/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    request_body = PendudukHotelDto,
    responses(
        (status = 200, description = "Record updated", body = ApiResponse<PendudukHotel>),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukhotel"
)]
pub async fn update_pendudukhotel_by_nik(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
    AppJson(dto): AppJson<PendudukHotelDto>,
) -> Result<Json<ApiResponse<PendudukHotel>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = service.hotel_update(nik, dto)?;
    Ok(Json(ApiResponse::success(
        Some(record),
        Some("Data Penduduk berhasil diperbarui".to_string()),
    )))
}

/// Delete a hotel record by NIK
#[utoipa::path(
    delete,
    path = "/pendudukhotel/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukhotel"
)]
pub async fn delete_pendudukhotel(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.hotel_delete(nik)?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data Penduduk berhasil dihapus".to_string()),
    )))
}

// Insurance register (append/read only)

/// Add a resident to the insurance register
#[utoipa::path(
    post,
    path = "/pendudukasuransi",
    request_body = PendudukAsuransiDto,
    responses(
        (status = 200, description = "Record created", body = ApiResponse<PendudukAsuransi>),
        (status = 409, description = "NIK already registered")
    ),
    tag = "pendudukasuransi"
)]
pub async fn post_pendudukasuransi(
    State(service): State<Arc<RegistriService>>,
    AppJson(dto): AppJson<PendudukAsuransiDto>,
) -> Result<Json<ApiResponse<PendudukAsuransi>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = service.asuransi_create(dto)?;
    Ok(Json(ApiResponse::success(Some(record), None)))
}

/// List the insurance register
#[utoipa::path(
    get,
    path = "/pendudukasuransi",
    responses(
        (status = 200, description = "All records", body = ApiResponse<Vec<PendudukAsuransi>>),
    ),
    tag = "pendudukasuransi"
)]
pub async fn get_pendudukasuransi(
    State(service): State<Arc<RegistriService>>,
) -> Result<Json<ApiResponse<Vec<PendudukAsuransi>>>> {
    Ok(Json(ApiResponse::success(Some(service.asuransi_list()), None)))
}

/// Get an insurance record by NIK
#[utoipa::path(
    get,
    path = "/pendudukasuransi/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Record found", body = ApiResponse<PendudukAsuransi>),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukasuransi"
)]
pub async fn get_pendudukasuransi_by_nik(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<PendudukAsuransi>>> {
    Ok(Json(ApiResponse::success(
        Some(service.asuransi_get(nik)?),
        None,
    )))
}

// Bank register (append/read only)

/// Add a resident to the bank register
#[utoipa::path(
    post,
    path = "/pendudukbank",
    request_body = PendudukBankDto,
    responses(
        (status = 200, description = "Record created", body = ApiResponse<PendudukBank>),
        (status = 409, description = "NIK already registered")
    ),
    tag = "pendudukbank"
)]
pub async fn post_pendudukbank(
    State(service): State<Arc<RegistriService>>,
    AppJson(dto): AppJson<PendudukBankDto>,
) -> Result<Json<ApiResponse<PendudukBank>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = service.bank_create(dto)?;
    Ok(Json(ApiResponse::success(Some(record), None)))
}

/// List the bank register
#[utoipa::path(
    get,
    path = "/pendudukbank",
    responses(
        (status = 200, description = "All records", body = ApiResponse<Vec<PendudukBank>>),
    ),
    tag = "pendudukbank"
)]
pub async fn get_pendudukbank(
    State(service): State<Arc<RegistriService>>,
) -> Result<Json<ApiResponse<Vec<PendudukBank>>>> {
    Ok(Json(ApiResponse::success(Some(service.bank_list()), None)))
}

/// Get a bank record by NIK
#[utoipa::path(
    get,
    path = "/pendudukbank/{nik}",
    params(("nik" = i64, Path, description = "Resident NIK")),
    responses(
        (status = 200, description = "Record found", body = ApiResponse<PendudukBank>),
        (status = 404, description = "Record not found")
    ),
    tag = "pendudukbank"
)]
pub async fn get_pendudukbank_by_nik(
    State(service): State<Arc<RegistriService>>,
    Path(nik): Path<i64>,
) -> Result<Json<ApiResponse<PendudukBank>>> {
    Ok(Json(ApiResponse::success(Some(service.bank_get(nik)?), None)))
}
