/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! `fixrepo` command line converter.

use anyhow::Context;
use clap::{ArgAction, Parser};
use fixrepo::{ConverterConfig, convert};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Convert a FIX Repository 2010 Edition export to dictionary XML.
#[derive(Debug, Parser)]
#[command(name = "fixrepo", disable_version_flag = true)]
struct Cli {
    /// Path to the FIX Repository root directory.
    #[arg(long, env = "FIXREPO_REPO_DIR")]
    repo_dir: PathBuf,

    /// Version to convert (e.g., FIXT.1.1, FIX.5.0SP2).
    #[arg(long, env = "FIXREPO_VERSION")]
    version: String,

    /// Output XML file path.
    #[arg(long, env = "FIXREPO_OUTPUT")]
    output: PathBuf,

    /// Version consulted for definitions the converted version lacks.
    #[arg(long, env = "FIXREPO_FALLBACK_VERSION")]
    fallback_version: Option<String>,

    /// Reject version strings that cannot be parsed.
    #[arg(long)]
    strict_version: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> ConverterConfig {
        let mut config = ConverterConfig::new(self.repo_dir, self.version, self.output)
            .with_strict_version(self.strict_version);
        if let Some(fallback) = self.fallback_version {
            config = config.with_fallback_version(fallback);
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.into_config();

    println!(
        "Loading {} from {}...",
        config.version,
        config.repo_dir.display()
    );
    if let Some(fallback) = config.fallback_version() {
        println!("Loading fallback {fallback}...");
    }
    println!("Generating XML...");

    let report = convert(&config).with_context(|| {
        format!(
            "failed to convert {} from {}",
            config.version,
            config.repo_dir.display()
        )
    })?;

    println!("Written to {}", report.output.display());
    println!("  {report}");
    Ok(())
}
