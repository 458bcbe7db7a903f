mod cmd;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// leafbuild - Checks the toolchain, then installs, configures and builds the project
#[derive(Parser)]
#[command(name = "leafbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the pre-build checks and the full build pipeline (default)
  Build,

  /// Check that the required tools are installed
  Doctor {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },

  /// Show the build stages and commands without running them
  Plan {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  // Initialize logging
  let default_directive = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command.unwrap_or(Commands::Build) {
    Commands::Build => cmd::cmd_build(),
    Commands::Doctor { output } => cmd::cmd_doctor(output),
    Commands::Plan { output } => cmd::cmd_plan(output).map(|()| ExitCode::SUCCESS),
  }
}
