use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Belltower deterministic school-schedule engine.
#[derive(Parser)]
#[command(
    name = "belltower",
    version,
    about = "Deterministic school-schedule resolution engine"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a schedule file and report its shape.
    Validate(ValidateArgs),
    /// Resolve the period active at an instant.
    Query(QueryArgs),
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the schedule JSON file.
    #[arg(short, long)]
    pub schedule: PathBuf,
}

/// Arguments for the `query` subcommand.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Path to the schedule JSON file.
    #[arg(short, long)]
    pub schedule: PathBuf,

    /// Instant to query (RFC 3339, "yyyy-mm-ddThh:mm:ss", or "yyyy-mm-dd");
    /// defaults to now.
    #[arg(short, long)]
    pub at: Option<String>,

    /// Timezone the instant is interpreted in; defaults to the schedule's
    /// declared timezone.
    #[arg(short, long)]
    pub zone: Option<String>,
}
