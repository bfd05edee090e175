pub mod application_repository;
pub mod connection;
pub mod file_store;
pub mod job_repository;
pub mod media_repository;
pub mod message_repository;
pub mod migrations;
pub mod models;
pub mod pg_store;
pub mod post_repository;
pub mod store;

pub use file_store::FileStore;
pub use pg_store::PgStore;
pub use store::{ContentStore, StoreError};
