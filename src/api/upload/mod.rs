pub mod handlers;
pub mod policy;
