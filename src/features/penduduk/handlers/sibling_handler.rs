//! Proxy handlers over the partner groups' own registries. Every request is
//! a fresh bounded fetch; a down or malformed sibling answers 502.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::penduduk::clients::SiblingClient;
use crate::features::penduduk::models::{Asuransi, Bank, Guide, Hotel, Rental};
use crate::shared::types::ApiResponse;

/// Residents as seen by the insurance group
#[utoipa::path(
    get,
    path = "/penduduk/asuransi",
    responses(
        (status = 200, description = "Insurance group records", body = ApiResponse<Vec<Asuransi>>),
        (status = 502, description = "Insurance service unavailable")
    ),
    tag = "sibling"
)]
pub async fn get_asuransi(
    State(client): State<Arc<SiblingClient>>,
) -> Result<Json<ApiResponse<Vec<Asuransi>>>> {
    let data = client.fetch_asuransi().await?;
    Ok(Json(ApiResponse::success(Some(data), None)))
}

/// Residents as seen by the bank group
#[utoipa::path(
    get,
    path = "/penduduk/bank",
    responses(
        (status = 200, description = "Bank group records", body = ApiResponse<Vec<Bank>>),
        (status = 502, description = "Bank service unavailable")
    ),
    tag = "sibling"
)]
pub async fn get_bank(
    State(client): State<Arc<SiblingClient>>,
) -> Result<Json<ApiResponse<Vec<Bank>>>> {
    let data = client.fetch_bank().await?;
    Ok(Json(ApiResponse::success(Some(data), None)))
}

/// Residents as seen by the hotel group
#[utoipa::path(
    get,
    path = "/penduduk/hotel",
    responses(
        (status = 200, description = "Hotel group records", body = ApiResponse<Vec<Hotel>>),
        (status = 502, description = "Hotel service unavailable")
    ),
    tag = "sibling"
)]
pub async fn get_hotel(
    State(client): State<Arc<SiblingClient>>,
) -> Result<Json<ApiResponse<Vec<Hotel>>>> {
    let data = client.fetch_hotel().await?;
    Ok(Json(ApiResponse::success(Some(data), None)))
}

/// Customers of the car-rental group
#[utoipa::path(
    get,
    path = "/pelanggan",
    responses(
        (status = 200, description = "Car-rental customers", body = ApiResponse<Vec<Rental>>),
        (status = 502, description = "Car-rental service unavailable")
    ),
    tag = "sibling"
)]
pub async fn get_pelanggan(
    State(client): State<Arc<SiblingClient>>,
) -> Result<Json<ApiResponse<Vec<Rental>>>> {
    let data = client.fetch_rental().await?;
    Ok(Json(ApiResponse::success(Some(data), None)))
}

/// Guides of the tour-guide group
#[utoipa::path(
    get,
    path = "/tourguide",
    responses(
        (status = 200, description = "Tour guides", body = ApiResponse<Vec<Guide>>),
        (status = 502, description = "Tour-guide service unavailable")
    ),
    tag = "sibling"
)]
pub async fn get_tourguide(
    State(client): State<Arc<SiblingClient>>,
) -> Result<Json<ApiResponse<Vec<Guide>>>> {
    let data = client.fetch_tourguide().await?;
    Ok(Json(ApiResponse::success(Some(data), None)))
}
