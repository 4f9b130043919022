//! Strew - Workflow Method Installer
//!
//! Usage:
//!   strew              # Install into the current project
//!   strew install      # Same as above
//!   strew --help       # Show usage
//!   strew --version    # Show version

mod interactive;

use std::io;

use anyhow::Result;
use clap::error::{ContextKind, ErrorKind};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strew_core::context::InstallContext;
use strew_core::installer::{InstallOutcome, Installer};

use crate::interactive::{TermPrompter, print_agent_overview, print_banner, print_success};

#[derive(Debug, Parser)]
#[command(name = "strew")]
#[command(about = "Workflow method installer", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version")]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Install the workflow method into the current project (default)
    Install,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strew=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            eprintln!("Unknown command: {}", offending_token(&err));
            eprintln!("Run \"strew --help\" for usage information");
            std::process::exit(1);
        }
    };

    if cli.version {
        // Version string comes from the package manifest at build time.
        println!("strew v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match cli.command {
        Some(Commands::Install) | None => run_install(),
    }
}

/// The argument a parse error is complaining about: the invalid subcommand
/// when there is one, otherwise the unexpected flag or value.
fn offending_token(err: &clap::Error) -> String {
    [ContextKind::InvalidSubcommand, ContextKind::InvalidArg]
        .iter()
        .find_map(|kind| err.get(*kind))
        .map(|value| value.to_string())
        .unwrap_or_default()
}

fn run_install() -> Result<()> {
    let mut stdout = io::stdout();
    print_banner(&mut stdout)?;

    let ctx = InstallContext::with_defaults()?;
    debug!(target_root = %ctx.target_root().display(), "starting install");
    print_agent_overview(&mut stdout)?;

    let mut installer = Installer::new(&ctx, TermPrompter, &mut stdout);
    let report = installer.run()?;

    match report.outcome {
        // Declining the overwrite is not an error: clean exit, zero changes.
        InstallOutcome::Cancelled => Ok(()),
        InstallOutcome::Completed => {
            print_success(&mut stdout, &report)?;
            Ok(())
        }
    }
}
