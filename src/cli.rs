//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bromlog")]
#[command(
    author,
    version,
    about = "Decode boot ROM USB download-mode log lines",
    long_about = "Scan boot ROM logs for [DL], BP and T0 records and explain their \
                  hexadecimal fields. Matched records are echoed followed by their \
                  decoded values; all other lines are skipped."
)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log files to decode; reads standard input when none are given or for "-"
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
