//! # seed-accounts
//!
//! Registers synthetic accounts (Korean/English names, short bios) against the
//! accounts API for manual testing and demo seeding. One request per index
//! `0..count`, sent in order through a single HTTP client; each reply body is
//! printed as-is.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod logger;
pub mod names;
pub mod seeder;

pub use cli::{Cli, Commands};
pub use config::{ConfigOverrides, SeedConfig};
pub use error::{Result, SeedError};
pub use generate::{
    build_request, build_requests, email_for, introduce_for, name_for, write_name_listing, BioMode,
};
pub use logger::init_tracing;
pub use names::{FIXED_INTRODUCE, INTRODUCE_TEMPLATES, NAMES};
pub use seeder::{SeedReport, Seeder};
