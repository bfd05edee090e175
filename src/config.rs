use std::env;
use std::path::PathBuf;

/// Where site content is persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL, one table per resource
    Postgres { database_url: String },
    /// One JSON array per resource under a data directory
    File { data_dir: PathBuf },
}

/// Where uploaded files end up
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadBackend {
    Local { upload_dir: PathBuf },
    Blob { api_url: String, token: String },
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub storage: StorageBackend,

    pub uploads: UploadBackend,

    /// Maximum PostgreSQL pool size
    /// Default: 5
    pub max_db_connections: u32,

    /// Maximum JSON payload size (in bytes)
    /// Default: 10MB (10 * 1024 * 1024)
    pub max_payload_size: usize,

    pub admin_username: String,
    pub admin_password: String,

    /// Mark the admin session cookie `Secure`
    pub cookie_secure: bool,

    pub host: String,
    pub port: u16,

    /// Directory for rolling log files
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required environment variables:
    /// - DATABASE_URL: when STORAGE_BACKEND is `postgres` (the default)
    /// - BLOB_API_URL, BLOB_READ_WRITE_TOKEN: when UPLOAD_BACKEND is `blob`
    ///
    /// Optional environment variables:
    /// - STORAGE_BACKEND: `postgres` or `file` (default: postgres)
    /// - DATA_DIR: JSON data directory for the file backend (default: data)
    /// - UPLOAD_BACKEND: `local` or `blob` (default: local)
    /// - UPLOAD_DIR: local upload root (default: public/uploads)
    /// - MAX_DB_CONNECTIONS (default: 5)
    /// - MAX_PAYLOAD_SIZE: in bytes (default: 10485760 = 10MB)
    /// - ADMIN_USERNAME / ADMIN_PASSWORD (default: admin / admin123)
    /// - COOKIE_SECURE: `true` to send the session cookie over HTTPS only
    /// - HOST / PORT (default: 127.0.0.1 / 8080)
    /// - LOG_DIR (default: logs)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let storage = match env_or("STORAGE_BACKEND", "postgres").as_str() {
            "postgres" => StorageBackend::Postgres {
                database_url: env::var("DATABASE_URL").map_err(|_| {
                    "DATABASE_URL must be set in .env file or environment".to_string()
                })?,
            },
            "file" => StorageBackend::File {
                data_dir: env_or("DATA_DIR", "data").into(),
            },
            other => return Err(format!("Unknown STORAGE_BACKEND '{}'", other)),
        };

        let uploads = match env_or("UPLOAD_BACKEND", "local").as_str() {
            "local" => UploadBackend::Local {
                upload_dir: env_or("UPLOAD_DIR", "public/uploads").into(),
            },
            "blob" => UploadBackend::Blob {
                api_url: env::var("BLOB_API_URL")
                    .map_err(|_| "BLOB_API_URL must be set for the blob upload backend".to_string())?,
                token: env::var("BLOB_READ_WRITE_TOKEN").map_err(|_| {
                    "BLOB_READ_WRITE_TOKEN must be set for the blob upload backend".to_string()
                })?,
            },
            other => return Err(format!("Unknown UPLOAD_BACKEND '{}'", other)),
        };

        Ok(Config {
            storage,
            uploads,
            max_db_connections: parse_or("MAX_DB_CONNECTIONS", 5),
            max_payload_size: parse_or("MAX_PAYLOAD_SIZE", 10 * 1024 * 1024),
            admin_username: env_or("ADMIN_USERNAME", "admin"),
            admin_password: env_or("ADMIN_PASSWORD", "admin123"),
            cookie_secure: parse_or("COOKIE_SECURE", false),
            host: env_or("HOST", "127.0.0.1"),
            port: parse_or("PORT", 8080),
            log_dir: env_or("LOG_DIR", "logs"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
