use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "contribution-analyzer")]
#[clap(about = "Rates a contributor's share of a repository's commits via an AI agent", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
