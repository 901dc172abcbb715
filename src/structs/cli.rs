use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "via-screen")]
#[clap(about = "VIA screening image classifier", long_about = None)]
pub struct Cli {
    /// Use this configuration file instead of ~/via-screen/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
