mod demos;
mod release_guard;

use crate::demos::{DEFAULT_ITERATIONS, Demo, Settings};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log filter when neither `--log-filter` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Walk through Rust's ownership primitives and time allocation churn.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Demos to run, in order. Runs every demo when omitted.
    #[arg(value_enum)]
    demos: Vec<Demo>,

    /// Number of allocations performed by the alloc-churn demo.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Log filter (e.g. "debug" or "ownership_tour=trace"). Overrides RUST_LOG.
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    fn selected_demos(&self) -> Vec<Demo> {
        if self.demos.is_empty() {
            Demo::ALL.to_vec()
        } else {
            self.demos.clone()
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            iterations: self.iterations,
        }
    }
}

fn init_logging(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log filter {directives:?}"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .init();
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let settings = cli.settings();
    for demo in cli.selected_demos() {
        let report = demo
            .run(&settings)
            .with_context(|| format!("Demo {} failed", demo.name()))?;
        write!(out, "{report}").context("Failed to write report")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref())?;

    tracing::info!(
        demos = ?cli.selected_demos(),
        iterations = cli.iterations,
        "Starting ownership tour"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let res = run(&cli, &mut out);

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Tour aborted");
    }
    res
}
