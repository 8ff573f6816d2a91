use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use crate::{collection::OUTPUT, fetch::Source};

mod collection;
mod error;
mod feature;
mod fetch;
mod office;

/// Convert the AFP France office list into a GeoJSON FeatureCollection.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Office list endpoint.
    #[arg(long, default_value = fetch::ENDPOINT)]
    endpoint: String,

    /// Read a saved copy of the office list instead of fetching it.
    #[arg(long, conflicts_with = "endpoint")]
    input: Option<PathBuf>,

    #[arg(long, default_value = OUTPUT)]
    output: PathBuf,

    /// Overall request timeout in seconds. Waits indefinitely when unset.
    #[arg(long)]
    timeout: Option<u64>,

    /// Indent the output.
    #[arg(long)]
    pretty: bool,

    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn source(&self) -> Source {
        match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Http(self.endpoint.clone()),
        }
    }

    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    let agent = fetch::agent(cli.timeout.map(Duration::from_secs));
    let offices = cli
        .source()
        .load(&agent)
        .context("Failed to load office list")?;
    log::info!("Received {} offices", offices.len());

    let count = collection::write_collection(&offices, &cli.output, cli.pretty)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("Wrote {count} features to {}", cli.output.display());

    Ok(())
}
