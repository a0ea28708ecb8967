//! CLI for the wkdgrab WKD key fetcher.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wkdgrab_core::config;

use commands::{run_fetch, run_hash, run_urls, FetchOptions};
use prompt::StdinPrompt;

/// Process exit code when no key could be located.
pub const EXIT_NOT_FOUND: i32 = 1;

/// Top-level CLI for wkdgrab.
#[derive(Debug, Parser)]
#[command(name = "wkdgrab")]
#[command(about = "Fetch OpenPGP public keys via WKD (Web Key Directory)", long_about = None)]
pub struct Cli {
    /// Show per-attempt diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up the key for an address and save it to `<email>.asc`.
    Fetch {
        /// Email address to resolve, e.g. user@example.org.
        email: String,

        /// Directory to save the key into (default: current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Import the retrieved key into gpg without asking.
        #[arg(long)]
        import: bool,

        /// Key manager executable (overrides the configured gpg_path).
        #[arg(long, value_name = "PATH")]
        gpg: Option<String>,
    },

    /// Print the two candidate lookup URLs in preference order.
    Urls {
        /// Email address to build URLs for.
        email: String,
    },

    /// Print the WKD lookup token for a local part (or a full address).
    Hash {
        /// Local part, or an address whose local part is used.
        input: String,
    },
}

impl CliCommand {
    /// Parse args, dispatch, and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                email,
                output_dir,
                import,
                gpg,
            } => {
                let opts = FetchOptions {
                    verbose: cli.verbose,
                    output_dir,
                    autoimport: import || cfg.autoimport,
                    gpg_path: gpg.unwrap_or(cfg.gpg_path),
                    connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
                    timeout: Duration::from_secs(cfg.timeout_secs),
                };
                run_fetch(&email, &opts, &StdinPrompt)
            }
            CliCommand::Urls { email } => {
                run_urls(&email)?;
                Ok(0)
            }
            CliCommand::Hash { input } => {
                run_hash(&input)?;
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests;
