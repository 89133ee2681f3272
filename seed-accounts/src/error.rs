//! Error types for the seeder.

use thiserror::Error;

/// Top-level error for seeding (config, payload generation, registration, serialization, output).
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No name at index {index} (name list has {len} entries)")]
    NameIndexOutOfRange { index: usize, len: usize },

    #[error("Registration {index} failed: {message}")]
    Registration { index: usize, message: String },

    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for seeding operations; uses [`SeedError`].
pub type Result<T> = std::result::Result<T, SeedError>;
