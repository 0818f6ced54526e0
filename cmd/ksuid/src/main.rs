//! KSUID CLI - generate and inspect K-Sortable Unique Identifiers.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ksuid::{Generator, Ksuid};
use tracing::debug;

/// KSUID command line tool.
///
/// Generates new identifiers and decodes existing ones back into their
/// timestamp and payload components.
#[derive(Parser)]
#[command(name = "ksuid")]
#[command(about = "Generate and inspect KSUIDs")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate new KSUIDs
    New {
        /// How many to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Print the 20-byte binary form as hex instead of base62
        #[arg(long)]
        raw: bool,
    },
    /// Decode KSUIDs and print their components
    Inspect {
        /// KSUIDs in 27-character base62 form
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::New { count, raw } => generate(*count, *raw),
        Commands::Inspect { ids } => inspect(ids),
    }
}

fn generate(count: u32, raw: bool) -> anyhow::Result<()> {
    let mut generator = Generator::new().context("open entropy source")?;
    for _ in 0..count {
        let id = generator.generate().context("generate ksuid")?;
        debug!("generated {} at {}", id, id.datetime());
        if raw {
            println!("{}", hex::encode(id.as_bytes()));
        } else {
            println!("{id}");
        }
    }
    Ok(())
}

fn inspect(ids: &[String]) -> anyhow::Result<()> {
    for text in ids {
        let id = Ksuid::parse(text).with_context(|| format!("parse {text:?}"))?;
        println!("{id}");
        println!("  raw:       {}", hex::encode(id.as_bytes()));
        println!("  timestamp: {} ({})", id.unix_timestamp(), id.datetime());
        println!("  payload:   {}", hex::encode(id.payload()));
    }
    Ok(())
}
