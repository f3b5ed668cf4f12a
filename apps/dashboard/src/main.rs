//! # Shelfwise Dashboard Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command-line arguments
//! 2. Initialize tracing (logging)
//! 3. Resolve the data directory and open the file store
//! 4. Load the catalog (seed products on first run)
//! 5. Run the requested screen

use std::process::ExitCode;

use clap::Parser;
use shelfwise_dashboard::cli::Cli;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    let cli = Cli::parse();
    shelfwise_dashboard::init_tracing();

    match shelfwise_dashboard::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
