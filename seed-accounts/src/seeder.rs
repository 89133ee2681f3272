//! Seeding loop: build one request per index, register it, print the reply.
//!
//! Iterations run strictly in order; each registration is awaited before the next
//! payload is built. By default a rejected or failed registration is logged and the
//! loop moves on. `fail_fast` turns the first one into an error.

use std::io::Write;
use std::sync::Arc;

use accounts_client::AccountRegistrar;
use rand::Rng;
use tracing::{info, warn};

use crate::config::SeedConfig;
use crate::error::{Result, SeedError};
use crate::generate::build_request;

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Registrations attempted (payloads printed, in dry-run).
    pub attempted: usize,
    /// 2xx replies.
    pub succeeded: usize,
    /// Non-2xx replies.
    pub rejected: usize,
    /// Transport errors (no reply).
    pub failed: usize,
}

pub struct Seeder {
    registrar: Arc<dyn AccountRegistrar>,
    config: SeedConfig,
}

impl Seeder {
    pub fn new(registrar: Arc<dyn AccountRegistrar>, config: SeedConfig) -> Self {
        Self { registrar, config }
    }

    /// Runs `config.count` iterations, writing one line per reply (or per payload in dry-run) to `out`.
    ///
    /// # Errors
    ///
    /// - [`SeedError::NameIndexOutOfRange`] if `count` exceeds the name list
    /// - [`SeedError::Registration`] on the first rejected/failed call when `fail_fast` is set
    /// - [`SeedError::Payload`] if a dry-run payload cannot be serialized
    /// - [`SeedError::Io`] if writing to `out` fails
    pub async fn run<G, W>(&self, rng: &mut G, out: &mut W) -> Result<SeedReport>
    where
        G: Rng + ?Sized,
        W: Write + ?Sized,
    {
        let config = &self.config;
        info!(
            count = config.count,
            bio_mode = %config.bio_mode,
            fail_fast = config.fail_fast,
            dry_run = config.dry_run,
            "seeding accounts"
        );

        let mut report = SeedReport::default();
        for index in 0..config.count {
            let request = build_request(index, &config.password, config.bio_mode, rng)?;
            report.attempted += 1;

            if config.dry_run {
                serde_json::to_writer(&mut *out, &request)?;
                writeln!(out)?;
                continue;
            }

            match self.registrar.register(&request).await {
                Ok(response) => {
                    writeln!(out, "{}", response.body)?;
                    if response.is_success() {
                        report.succeeded += 1;
                        info!(index, email = %request.email, status = response.status, "registered");
                    } else {
                        report.rejected += 1;
                        warn!(index, email = %request.email, status = response.status, "registration rejected");
                        if config.fail_fast {
                            out.flush()?;
                            return Err(SeedError::Registration {
                                index,
                                message: format!("HTTP {}: {}", response.status, response.body),
                            });
                        }
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(index, email = %request.email, error = %e, "registration request failed");
                    if config.fail_fast {
                        out.flush()?;
                        return Err(SeedError::Registration {
                            index,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }
        out.flush()?;

        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            rejected = report.rejected,
            failed = report.failed,
            "seeding finished"
        );
        Ok(report)
    }
}
