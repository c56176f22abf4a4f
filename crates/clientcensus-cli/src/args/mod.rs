mod lookup;

pub use lookup::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clientcensus")]
#[command(
    about = "Count active Mattermost desktop and mobile clients by version",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        default_value = "config.json",
        help = "Path to config file (JSON, or TOML with a .toml extension)"
    )]
    pub config: PathBuf,

    #[command(flatten)]
    pub lookup: LookupArgs,

    #[arg(long, help = "Run with debug logging for additional output")]
    pub debug: bool,
}
