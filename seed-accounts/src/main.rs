//! Binary: load env, parse CLI, register accounts (or list names), print replies to stdout.

use std::io;
use std::sync::Arc;

use accounts_client::AccountsClient;
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_accounts::{init_tracing, write_name_listing, Cli, Commands, SeedConfig, Seeder};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { seed, .. } => {
            let config = SeedConfig::load(cli.command.overrides())
                .context("Load seeder config from env (SEED_ACCOUNTS_*, SEED_BIO_MODE)")?;
            config.validate()?;
            init_tracing(config.log_file.as_deref())?;
            handle_run(config, *seed).await
        }
        Commands::Names => handle_names(),
    }
}

async fn handle_run(config: SeedConfig, seed: Option<u64>) -> Result<()> {
    let client = AccountsClient::new(&config.endpoint, config.request_timeout())
        .context("Create accounts HTTP client")?;
    let seeder = Seeder::new(Arc::new(client), config);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    seeder.run(&mut rng, &mut out).await?;
    Ok(())
}

fn handle_names() -> Result<()> {
    let stdout = io::stdout();
    write_name_listing(&mut stdout.lock())?;
    Ok(())
}
