use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::setoran::handlers;
use crate::features::setoran::services::SetoranService;

/// Create routes for the tax deposit feature
pub fn routes(service: Arc<SetoranService>) -> Router {
    Router::new()
        .route(
            "/setoranpajak",
            get(handlers::get_setoran).post(handlers::add_setoran),
        )
        .route(
            "/setoranpajak/{status_setoran}",
            get(handlers::get_setoran_by_status),
        )
        .with_state(service)
}
