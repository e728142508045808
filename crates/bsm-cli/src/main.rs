//! BSM command-line tool: inspect and validate binary audit trails
//! produced by Solaris, macOS, and FreeBSD auditing.
//!
//! ```text
//! bsm <COMMAND> [OPTIONS]
//!
//! Commands:
//!   inspect    Print every record and token in a trail
//!   validate   Decode a trail and report structural statistics
//!   help       Print help information
//! ```
//!
//! Errors are written to stderr; the process exits 0 on success and 1 on
//! any decode failure, so the tool composes with shell pipelines.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_inspect;
mod cmd_validate;

/// The BSM audit-trail tool.
#[derive(Parser)]
#[command(name = "bsm", version, about = "BSM audit trail inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record and its tokens, one line per token.
    Inspect(InspectArgs),
    /// Decode the whole trail and report record/token statistics.
    Validate(ValidateArgs),
}

/// Arguments for `bsm inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the audit trail.
    pub file: PathBuf,

    /// Also print each token's decoded fields.
    #[arg(long)]
    pub fields: bool,
}

/// Arguments for `bsm validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the audit trail.
    pub file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("bsm: {e:#}");
        process::exit(1);
    }
}
