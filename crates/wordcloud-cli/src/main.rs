mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::analyze::AnalyzeArgs;
use commands::serve::ServeArgs;
use std::path::PathBuf;
use wordcloud_core::PipelineConfig;

/// Wordcloud: frequency-ranked word groups for word clouds.
#[derive(Parser, Debug)]
#[command(name = "wordcloud", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Pipeline configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Group and count the words of one or more texts
    Analyze(AnalyzeArgs),
    /// Serve the word-group pipeline over HTTP
    Serve(ServeArgs),
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Configuration from `--config`, or the defaults.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        match &self.config {
            Some(path) => PipelineConfig::load(path).map_err(|e| {
                anyhow::anyhow!("failed to load config {}: {e}", path.display())
            }),
            None => Ok(PipelineConfig::default()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Analyze(args) => commands::analyze::run(&cli, args),
        Command::Serve(args) => commands::serve::run(&cli, args),
    }
}
