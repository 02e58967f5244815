mod cli;

use alnum::{ResultSet, generate, generate_async};
use clap::Parser;
use cli::config::{CliArgs, RunConfig, Runtime};
use cli::output::{emit, render};
use cli::telemetry::init_telemetry;

// Using mimalloc for better allocation behaviour when many worker threads
// start at once, especially in musl environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    init_telemetry()?;

    let config = RunConfig::try_from(args)?;
    log_startup_info(&config);

    let set = run(&config).await?;

    let document = match render(&set, config.format) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Failed to serialize result set: {e}");
            return Err(e.into());
        }
    };
    emit(std::io::stdout().lock(), &document)?;

    tracing::info!(records = set.len(), "Run complete");
    Ok(())
}

async fn run(config: &RunConfig) -> anyhow::Result<ResultSet> {
    let set = match config.runtime {
        Runtime::Threads => {
            // Worker threads block until joined; keep them off the async
            // executor.
            let generator = config.generator.clone();
            tokio::task::spawn_blocking(move || generate(&generator)).await??
        }
        Runtime::Tokio => generate_async(&config.generator).await?,
    };
    Ok(set)
}

fn log_startup_info(config: &RunConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting run with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Starting run with {} workers on {:?} ({} sampling)",
            config.generator.workers,
            config.runtime,
            config.generator.policy
        );
    }
}
