use anyhow::{Context, Result};
use fnbench::{config::Settings, BenchmarkRunner, LineReporter, WallClock};
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    init_logging();

    // The argument count doubles as the seed: only identical command lines
    // are guaranteed to draw identical populations.
    let seed = std::env::args_os().len() as u64;
    let settings = Settings::from_env(seed).context("invalid benchmark configuration")?;
    debug!(?settings, "starting");

    BenchmarkRunner::new(settings).run(&mut WallClock, &mut LineReporter::stdout());

    Ok(())
}

// Logs go to stderr; stdout only carries the measurements.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
