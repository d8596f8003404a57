mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::pajak::models::seed_pajak;
use crate::features::pajak::{routes as pajak_routes, PajakService};
use crate::features::pajakwisata::{routes as pajakwisata_routes, MergeService};
use crate::features::penduduk::models::{
    seed_asuransi, seed_bank, seed_hotel, seed_penduduk, seed_rental,
};
use crate::features::penduduk::{
    routes as penduduk_routes, PendudukService, RegistriService, SiblingClient,
};
use crate::features::setoran::models::seed_setoran;
use crate::features::setoran::{routes as setoran_routes, SetoranService};
use crate::features::wisata::{routes as wisata_routes, WisataClient, WisataService};
use crate::shared::remote::RemoteClient;
use crate::shared::store::MemStore;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");
    tracing::info!("Merge policy: {}", config.merge.policy);

    // Seeded in-memory stores; the tax register is shared between the tax
    // CRUD feature and the merge engine
    let pajak_store = Arc::new(MemStore::new(seed_pajak()));
    let penduduk_store = Arc::new(MemStore::new(seed_penduduk()));
    let rental_store = Arc::new(MemStore::new(seed_rental()));
    let hotel_store = Arc::new(MemStore::new(seed_hotel()));
    let asuransi_store = Arc::new(MemStore::new(seed_asuransi()));
    let bank_store = Arc::new(MemStore::new(seed_bank()));
    let setoran_store = Arc::new(MemStore::new(seed_setoran()));

    // Outbound HTTP clients for the sibling services
    let remote_client = RemoteClient::new(config.remote.fetch_timeout)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
    let wisata_client = Arc::new(WisataClient::new(
        remote_client.clone(),
        config.remote.wisata_url.clone(),
    ));
    let sibling_client = Arc::new(SiblingClient::new(remote_client, &config.remote));
    tracing::info!("Remote clients initialized");

    // Services
    let pajak_service = Arc::new(PajakService::new(Arc::clone(&pajak_store)));
    let wisata_service = Arc::new(WisataService::new(Arc::clone(&wisata_client)));
    let penduduk_service = Arc::new(PendudukService::new(penduduk_store));
    let registri_service = Arc::new(RegistriService::new(
        rental_store,
        hotel_store,
        asuransi_store,
        bank_store,
    ));
    let setoran_service = Arc::new(SetoranService::new(setoran_store));
    let merge_service = Arc::new(MergeService::new(
        pajak_store,
        wisata_client,
        config.merge.policy,
    ));
    tracing::info!("Services initialized");

    // Apply swagger info from config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Welcome and health endpoints (no state)
    async fn welcome() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Kamu telah berhasil masuk ke API Government"
        }))
    }
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let base_routes = Router::new()
        .route("/", axum::routing::get(welcome))
        .route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(base_routes)
        .merge(pajak_routes::routes(pajak_service))
        .merge(wisata_routes::routes(wisata_service))
        .merge(penduduk_routes::routes(
            penduduk_service,
            registri_service,
            sibling_client,
        ))
        .merge(setoran_routes::routes(setoran_service))
        .merge(pajakwisata_routes::routes(merge_service))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
