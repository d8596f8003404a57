use std::env;
use std::time::Duration;

use crate::features::pajakwisata::MergePolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub remote: RemoteConfig,
    pub merge: MergeConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Base URLs of the sibling services this API aggregates from.
///
/// Each group hosts its own registry; all of them expose a JSON list at the
/// configured endpoint. One timeout bounds every outbound fetch.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub wisata_url: String,
    pub asuransi_url: String,
    pub bank_url: String,
    pub hotel_url: String,
    pub rental_url: String,
    pub tourguide_url: String,
    pub fetch_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub policy: MergePolicy,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            remote: RemoteConfig::from_env()?,
            merge: MergeConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(AppConfig {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RemoteConfig {
    const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let wisata_url = env::var("WISATA_BASE_URL")
            .unwrap_or_else(|_| "https://pajakobjekwisata.onrender.com/wisata".to_string());
        let asuransi_url = env::var("ASURANSI_BASE_URL")
            .unwrap_or_else(|_| "https://eai-fastapi.onrender.com/penduduk".to_string());
        let bank_url = env::var("BANK_BASE_URL")
            .unwrap_or_else(|_| "https://jumantaradev.my.id/".to_string());
        let hotel_url = env::var("HOTEL_BASE_URL")
            .unwrap_or_else(|_| "https://hotelbaru.onrender.com".to_string());
        let rental_url = env::var("RENTAL_BASE_URL")
            .unwrap_or_else(|_| "https://rental-mobil-api.onrender.com/pelanggan".to_string());
        let tourguide_url = env::var("TOURGUIDE_BASE_URL")
            .unwrap_or_else(|_| "https://tour-guide-ks4n.onrender.com/tourguide".to_string());

        let fetch_timeout_secs = env::var("REMOTE_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_FETCH_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| format!("Invalid REMOTE_FETCH_TIMEOUT_SECS: {}", e))?;

        Ok(RemoteConfig {
            wisata_url,
            asuransi_url,
            bank_url,
            hotel_url,
            rental_url,
            tourguide_url,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        })
    }
}

impl MergeConfig {
    pub fn from_env() -> Result<Self, String> {
        // Key-match is the corrected default; positional pairing stays
        // available as an explicit compatibility mode.
        let policy = env::var("MERGE_POLICY")
            .unwrap_or_else(|_| "key_match".to_string())
            .parse::<MergePolicy>()
            .map_err(|e| format!("Invalid MERGE_POLICY: {}", e))?;

        Ok(MergeConfig { policy })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(SwaggerConfig {
            title: env::var("SWAGGER_TITLE")
                .unwrap_or_else(|_| "Government API Documentation".to_string()),
            version: env::var("SWAGGER_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "API untuk mengelola data pemerintahan".to_string()),
        })
    }
}
