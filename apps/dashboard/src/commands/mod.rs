//! # Dashboard Commands
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (dispatch, output format)
//! ├── revenue.rs    ◄─── Revenue analysis screen
//! ├── inventory.rs  ◄─── Inventory list, low stock, restock
//! └── register.rs   ◄─── Product registration
//! ```

pub mod inventory;
pub mod register;
pub mod revenue;

use std::io::Write;

use serde::Serialize;
use shelfwise_core::{Catalog, Persistence, ProductId};

use crate::cli::Command;
use crate::error::AppResult;

/// How command output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runs one command against the catalog.
///
/// `Reset` works on the store rather than the catalog and is handled by
/// [`crate::run`]; here it is a no-op.
pub fn execute<P: Persistence>(
    catalog: &mut Catalog<P>,
    command: Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> AppResult<()> {
    match command {
        Command::Revenue => revenue::show(catalog, format, out),
        Command::Inventory(args) => {
            *catalog.controls_mut() = args.to_controls();
            inventory::show(catalog, format, out)
        }
        Command::LowStock => inventory::show_low_stock(catalog, format, out),
        Command::Register(args) => register::register(catalog, args.into(), format, out),
        Command::Restock { id, stock } => {
            inventory::restock(catalog, ProductId::new(id), stock, format, out)
        }
        Command::Reset => Ok(()),
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json(out: &mut impl Write, value: &impl Serialize) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InventoryArgs;
    use shelfwise_core::{MemoryPersistence, SortField};

    #[test]
    fn test_inventory_replaces_controls() {
        let mut catalog = Catalog::load(MemoryPersistence::new());
        catalog.controls_mut().search = "stale".to_string();

        let args = InventoryArgs {
            sort: Some(SortField::Stock),
            desc: true,
            ..InventoryArgs::default()
        };
        let mut out = Vec::new();
        execute(&mut catalog, Command::Inventory(args), OutputFormat::Text, &mut out).unwrap();

        assert_eq!(catalog.controls().search, "");
        assert_eq!(catalog.controls().sort_by, SortField::Stock);
        assert!(!catalog.controls().sort_asc);
        assert!(String::from_utf8(out).unwrap().starts_with("  ID  Name"));
    }

    #[test]
    fn test_restock_dispatch() {
        let mut catalog = Catalog::load(MemoryPersistence::new());
        let mut out = Vec::new();
        execute(
            &mut catalog,
            Command::Restock { id: 2, stock: 0 },
            OutputFormat::Json,
            &mut out,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["stock"], 0);
    }
}
