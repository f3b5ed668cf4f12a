//! # Shelfwise Dashboard
//!
//! Wires configuration, logging, the file store and the catalog together,
//! then runs one screen.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         shelfwise (binary)                              │
//! │                                                                         │
//! │   Cli ──► DashboardConfig ──► FileStore ──► Catalog::load               │
//! │                                   │              │                      │
//! │                open failed ──► MemoryPersistence (session only)         │
//! │                                                  │                      │
//! │                  ┌───────────────┬───────────────┼──────────────┐       │
//! │                  ▼               ▼               ▼              ▼       │
//! │              revenue        inventory        register       restock     │
//! │                                                                         │
//! │   Commands take any `Catalog<P: Persistence>` and write to `impl Write`,│
//! │   so tests run them against `MemoryPersistence` and a byte buffer.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, Write};

use shelfwise_core::{Catalog, MemoryPersistence, Persistence};
use shelfwise_store::FileStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::OutputFormat;
use crate::config::DashboardConfig;
pub use crate::error::{AppError, AppResult};

/// Runs the parsed command line against the configured file store.
pub fn run(cli: Cli) -> AppResult<()> {
    let stdout = io::stdout();
    run_with(cli, DashboardConfig::from_env(), &mut stdout.lock())
}

/// Runs `cli` on top of `config`, writing the screen to `out`.
///
/// If the file store cannot be opened the catalog still loads, from the
/// seed products, and changes last only for this run. `reset` is the
/// exception: it reports the store error.
pub fn run_with(cli: Cli, config: DashboardConfig, out: &mut impl Write) -> AppResult<()> {
    let config = config.with_data_dir(cli.data_dir);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let opened = config.store_config().and_then(FileStore::open);

    if let Command::Reset = cli.command {
        let removed = opened?.remove()?;
        info!(removed, "Reset saved products");
        return Ok(());
    }

    let persistence: Box<dyn Persistence> = match opened {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "Product store unavailable, changes will not be saved");
            Box::new(MemoryPersistence::new())
        }
    };

    let mut catalog = Catalog::load(persistence);
    commands::execute(&mut catalog, cli.command, format, out)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelfwise_core=trace` - Trace the catalog only
/// - Default: warnings, plus info from shelfwise crates
///
/// Logs go to stderr so stdout carries only command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,shelfwise_core=info,shelfwise_store=info,shelfwise_dashboard=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
