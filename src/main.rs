use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod config;
mod db;
mod seed;
mod shutdown;
mod storage;

use crate::api::{auth::AdminSettings, state::AppState, validation};
use crate::cli::{Cli, Command};
use crate::config::{Config, StorageBackend, UploadBackend};
use crate::db::{ContentStore, FileStore, PgStore};
use crate::shutdown::ShutdownCoordinator;
use crate::storage::{BlobUploadStore, LocalUploadStore, UploadStore};

/// URL path the local upload directory is served under by the site
const PUBLIC_UPLOAD_PREFIX: &str = "/uploads";

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

/// Console output plus daily rotating files per level:
/// logs/info.log.2024-12-22, logs/error.log.2024-12-22, ...
fn init_tracing(log_dir: &str) -> io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(log_dir, "error.log");
    let debug_file = tracing_appender::rolling::daily(log_dir, "debug.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let debug_layer = tracing_subscriber::fmt::layer()
        .with_writer(debug_file)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .with(debug_layer)
        .init();

    Ok(())
}

/// Connect the configured content store; PostgreSQL is migrated on the way up
async fn open_store(config: &Config) -> io::Result<Arc<dyn ContentStore>> {
    match &config.storage {
        StorageBackend::Postgres { database_url } => {
            let pool = db::connection::get_connection(database_url, config.max_db_connections)
                .await
                .map_err(|e| startup_error("Failed to connect to database", e))?;
            info!("Database connection pool established");

            db::migrations::run_migrations(&pool)
                .await
                .map_err(|e| startup_error("Failed to run database migrations", e))?;

            Ok(Arc::new(PgStore::new(pool)))
        }
        StorageBackend::File { data_dir } => {
            let store = FileStore::open(data_dir.clone())
                .await
                .map_err(|e| startup_error("Failed to open data directory", e))?;
            info!("Using JSON file storage at {}", store.dir().display());
            Ok(Arc::new(store))
        }
    }
}

fn open_uploads(config: &Config) -> Arc<dyn UploadStore> {
    match &config.uploads {
        UploadBackend::Local { upload_dir } => {
            info!("Uploads stored on disk under {}", upload_dir.display());
            Arc::new(LocalUploadStore::new(upload_dir.clone(), PUBLIC_UPLOAD_PREFIX))
        }
        UploadBackend::Blob { api_url, token } => {
            info!("Uploads sent to blob store at {}", api_url);
            Arc::new(BlobUploadStore::new(api_url, token))
        }
    }
}

async fn serve(config: Config, store: Arc<dyn ContentStore>) -> io::Result<()> {
    let state = AppState::new(
        store.clone(),
        open_uploads(&config),
        AdminSettings {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
            cookie_secure: config.cookie_secure,
        },
    );
    let max_payload_size = config.max_payload_size;

    info!("Configuration loaded successfully:");
    info!("  - Storage backend: {}", store.backend_tag());
    info!("  - Max payload size: {} bytes", max_payload_size);
    info!("  - Secure session cookie: {}", config.cookie_secure);

    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .app_data(validation::json_config(max_payload_size))
            .app_data(validation::query_config())
            .configure(|cfg| state.register(cfg))
            .configure(api::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, store)
        .wait_for_shutdown()
        .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().map_err(|e| startup_error("Failed to load configuration", e))?;
    init_tracing(&config.log_dir)?;

    info!("Starting site-cms ({:?})", cli.command());
    let store = open_store(&config).await?;

    match cli.command() {
        Command::Serve => serve(config, store).await,
        Command::Migrate => {
            // Migrations ran while opening the store
            if !matches!(config.storage, StorageBackend::Postgres { .. }) {
                info!("File storage needs no migrations");
            }
            store.close().await;
            Ok(())
        }
        Command::Seed => {
            let outcome = seed::seed_sample_data(store.as_ref()).await;
            store.close().await;
            match outcome {
                Ok(outcome) => {
                    info!("{}", outcome.message);
                    Ok(())
                }
                Err(e) => {
                    error!("Seeding failed: {}", e);
                    Err(startup_error("Failed to seed sample data", e))
                }
            }
        }
    }
}
