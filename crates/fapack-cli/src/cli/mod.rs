//! CLI for the fapack SVG batch fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fapack_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_resolve};

/// Top-level CLI for the fapack batch SVG fetcher.
#[derive(Debug, Parser)]
#[command(name = "fapack")]
#[command(about = "fapack: batch-download FontAwesome SVG assets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every icon listed in FILE (or stdin) and save the SVGs.
    Fetch {
        /// Input file with one icon identifier per line (e.g. "fab
        /// fa-facebook-square"); `-` or omitted reads stdin.
        file: Option<PathBuf>,

        /// Directory to write SVGs into (default: config, then current dir).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// String prepended to each output filename (default from config, "fa-").
        #[arg(long, value_name = "STR")]
        prepend: Option<String>,

        /// Include the style prefix token (e.g. "fab-") in output filenames.
        #[arg(long)]
        with_style_prefix: bool,
    },

    /// Resolve identifiers to CDN URLs and print them without fetching.
    Resolve {
        /// Icon identifiers, e.g. "fab fa-facebook-square".
        #[arg(required = true)]
        icons: Vec<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                file,
                out,
                prepend,
                with_style_prefix,
            } => {
                run_fetch(&cfg, file.as_deref(), out.as_deref(), prepend, with_style_prefix)
                    .await?;
            }
            CliCommand::Resolve { icons } => run_resolve(&icons)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
