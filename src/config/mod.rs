/// Administrator bootstrap settings from environment variables
pub mod admin;

/// Reference data seed loading from config.toml
pub mod catalog;

/// Database configuration and connection management
pub mod database;
