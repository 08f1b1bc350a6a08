mod check;
mod format;
mod input;
mod normalize;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

pub use check::CheckCommand;
pub use format::FormatCommand;
pub use normalize::NormalizeCommand;

#[derive(Parser)]
#[command(name = "workout-api")]
#[command(about = "CPF validation for athlete records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether each CPF is valid
    Check(CheckCommand),

    /// Strip formatting, printing digits only
    Normalize(NormalizeCommand),

    /// Print valid CPFs as XXX.XXX.XXX-XX
    Format(FormatCommand),
}

/// Outcome of a command run. `success` is false when any input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
}

impl Cli {
    pub fn execute(&self) -> Result<Outcome> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.execute_with(&mut stdout.lock(), &mut stderr.lock())
    }

    pub fn execute_with(&self, out: &mut impl Write, err: &mut impl Write) -> Result<Outcome> {
        match &self.command {
            Commands::Check(cmd) => cmd.execute(out),
            Commands::Normalize(cmd) => cmd.execute(out),
            Commands::Format(cmd) => cmd.execute(out, err),
        }
    }
}
