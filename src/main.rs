//! makefilelist: writes the paths of the files in a directory to a text file.
//!
//! Usage:
//!   makefilelist [-dir <path>] [-recursive] [-out <path>] [-ext .a,.b]

mod app;
mod cli;
mod error;
mod filter;
mod fs_walk;
mod output;

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    // RUST_LOG overrides; stdout is reserved for the progress messages
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cfg = match cli::parse_args(env::args()) {
        Ok(cfg) => cfg,
        Err(e) => e.exit(),
    };

    match app::run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
