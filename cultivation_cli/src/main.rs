//! cultivation - evaluate character stats from the command line
//!
//! - `cultivation parse <DESCRIPTION>` - parse an effect description
//! - `cultivation evaluate <FILE>` - full stat recalculation for a character state
//! - `cultivation display <FILE>` - normalize and decorate an effect set

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cultivation_core::{EffectCatalog, StageTable, StatPipeline};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cultivation")]
#[command(about = "Cultivation character stat evaluator", version)]
struct Cli {
    /// Effect catalog TOML (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Cultivation stage table TOML (defaults to the built-in table)
    #[arg(long, global = true)]
    stages: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an ACTION[key=value;...] effect description
    Parse {
        description: String,
    },

    /// Recalculate stats for a character state file (TOML or JSON)
    Evaluate {
        file: PathBuf,
    },

    /// Normalize and decorate the `effects` of a file (TOML or JSON)
    Display {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = build_pipeline(cli.catalog.as_ref(), cli.stages.as_ref())?;

    let output = match cli.command {
        Commands::Parse { description } => commands::parse_description(&description)?,
        Commands::Evaluate { file } => commands::evaluate_file(&pipeline, &file)?,
        Commands::Display { file } => commands::display_file(&pipeline, &file)?,
    };

    println!("{}", output);
    Ok(())
}

fn build_pipeline(catalog: Option<&PathBuf>, stages: Option<&PathBuf>) -> Result<StatPipeline> {
    let catalog = match catalog {
        Some(path) => EffectCatalog::load(path)
            .with_context(|| format!("loading effect catalog {}", path.display()))?,
        None => EffectCatalog::default(),
    };
    let stages = match stages {
        Some(path) => StageTable::load(path)
            .with_context(|| format!("loading stage table {}", path.display()))?,
        None => cultivation_core::config::default_stage_table(),
    };
    tracing::debug!(
        effect_types = catalog.effects.len(),
        stages = stages.len(),
        "catalogs loaded"
    );
    Ok(StatPipeline::new(catalog, stages))
}
