use std::path::PathBuf;

use clap::Parser;

/// Gregorian to Batak cosmogram (porhalaan) converter.
#[derive(Debug, Parser)]
#[command(
    name = "porhalaan",
    version,
    about = "Convert a Gregorian date to the Batak cosmogram calendar"
)]
pub struct Cli {
    /// Date as YYYY-MM-DD. Read from stdin when omitted.
    pub date: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override [search].max_lookback from config.
    #[arg(long)]
    pub max_lookback: Option<u32>,

    /// Also print the sky events of the new-year evening.
    #[arg(long)]
    pub explain: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
