//! bromlog - Boot ROM download-mode log decoder
//!
//! Scans log text for the diagnostic records a boot ROM prints during the
//! USB download-mode handshake and explains them:
//!
//! - `[DL]` - USB DL timeout and mode word (marker, timeout, enable bit)
//! - `BP` - boot status flag word and preloader offset
//! - `T0` - BROM execution time and JTAG delay
//!
//! Each matched record is echoed as found, followed by indented
//! explanation lines. Other lines are dropped.

mod cli;
mod driver;
mod error;

use std::io::{self, BufWriter};

use clap::Parser;
use cli::Cli;
use driver::Source;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG overrides the verbosity flag
    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let sources = Source::from_args(&cli.files);
    log::debug!("Decoding {} source(s)", sources.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match driver::run(&sources, &mut out) {
        Ok(()) => Ok(()),
        Err(e) if e.is_broken_pipe() => {
            log::debug!("Output closed, stopping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
