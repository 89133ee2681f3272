//! CLI parser.

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::generate::BioMode;

#[derive(Parser, Debug)]
#[command(name = "seed-accounts")]
#[command(about = "Register dummy accounts against the accounts API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register `count` accounts and print each server reply (config from env; flags override).
    Run {
        /// Registration endpoint (overrides SEED_ACCOUNTS_URL).
        #[arg(short, long)]
        url: Option<String>,
        /// Number of accounts (overrides SEED_ACCOUNTS_COUNT).
        #[arg(short, long)]
        count: Option<usize>,
        /// Password for every account (overrides SEED_ACCOUNTS_PASSWORD).
        #[arg(short, long)]
        password: Option<String>,
        /// "fixed" greeting or "random" template bios (overrides SEED_BIO_MODE).
        #[arg(short, long)]
        bio: Option<BioMode>,
        /// Stop at the first rejected or failed registration (overrides SEED_FAIL_FAST).
        #[arg(long, overrides_with = "no_fail_fast")]
        fail_fast: bool,
        /// Keep going after rejected or failed registrations, even if SEED_FAIL_FAST=1.
        #[arg(long, overrides_with = "fail_fast")]
        no_fail_fast: bool,
        /// Print the payloads instead of sending them.
        #[arg(long)]
        dry_run: bool,
        /// RNG seed for reproducible bios.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List index, email and name for every seedable account (no network).
    Names,
}

impl Commands {
    /// CLI overrides for [`crate::SeedConfig::load`]; empty for commands that take none.
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Commands::Run {
                url,
                count,
                password,
                bio,
                fail_fast,
                no_fail_fast,
                dry_run,
                ..
            } => ConfigOverrides {
                url: url.clone(),
                count: *count,
                password: password.clone(),
                bio_mode: *bio,
                fail_fast: match (*fail_fast, *no_fail_fast) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                dry_run: *dry_run,
            },
            Commands::Names => ConfigOverrides::default(),
        }
    }
}
