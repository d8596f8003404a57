use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::penduduk::clients::SiblingClient;
use crate::features::penduduk::handlers;
use crate::features::penduduk::services::{PendudukService, RegistriService};

/// Create routes for the resident feature.
///
/// Static segments (`/penduduk/asuransi` etc.) win over the `{nik}` capture,
/// so the sibling proxies can share the `/penduduk` prefix.
pub fn routes(
    penduduk: Arc<PendudukService>,
    registri: Arc<RegistriService>,
    sibling: Arc<SiblingClient>,
) -> Router {
    let main = Router::new()
        .route(
            "/penduduk",
            get(handlers::get_penduduk).post(handlers::post_penduduk),
        )
        .route(
            "/penduduk/{nik}",
            get(handlers::get_penduduk_by_nik)
                .put(handlers::update_penduduk_by_nik)
                .delete(handlers::delete_penduduk_by_nik),
        )
        .with_state(penduduk);

    let registries = Router::new()
        .route(
            "/pendudukrental",
            get(handlers::get_pendudukrental).post(handlers::tambah_pendudukrental),
        )
        .route(
            "/pendudukrental/{nik}",
            get(handlers::get_pendudukrental_by_nik)
                .put(handlers::update_pendudukrental_by_nik)
                .delete(handlers::delete_pendudukrental),
        )
        .route(
            "/pendudukhotel",
            get(handlers::get_pendudukhotel).post(handlers::tambah_pendudukhotel),
        )
        .route(
            "/pendudukhotel/{nik}",
            get(handlers::get_pendudukhotel_by_nik)
                .put(handlers::update_pendudukhotel_by_nik)
                .delete(handlers::delete_pendudukhotel),
        )
        .route(
            "/pendudukasuransi",
            get(handlers::get_pendudukasuransi).post(handlers::post_pendudukasuransi),
        )
        .route(
            "/pendudukasuransi/{nik}",
            get(handlers::get_pendudukasuransi_by_nik),
        )
        .route(
            "/pendudukbank",
            get(handlers::get_pendudukbank).post(handlers::post_pendudukbank),
        )
        .route("/pendudukbank/{nik}", get(handlers::get_pendudukbank_by_nik))
        .with_state(registri);

    let siblings = Router::new()
        .route("/penduduk/asuransi", get(handlers::get_asuransi))
        .route("/penduduk/bank", get(handlers::get_bank))
        .route("/penduduk/hotel", get(handlers::get_hotel))
        .route("/pelanggan", get(handlers::get_pelanggan))
        .route("/tourguide", get(handlers::get_tourguide))
        .with_state(sibling);

    main.merge(registries).merge(siblings)
}
