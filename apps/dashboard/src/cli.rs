//! # Command-Line Interface
//!
//! One subcommand per dashboard screen, plus stock and maintenance actions.
//!
//! ```text
//! shelfwise revenue                        Revenue analysis
//! shelfwise inventory [filters]            Inventory management
//! shelfwise low-stock                      Low-stock list with forecasts
//! shelfwise register --name .. --category  Product registration
//! shelfwise restock --id 3 --stock 40      Stock update
//! shelfwise reset                          Forget saved products
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shelfwise_core::{NewProduct, SortField, ViewControls};

#[derive(Debug, Parser)]
#[command(name = "shelfwise")]
#[command(about = "Inventory and sales dashboard", version)]
pub struct Cli {
    /// Print JSON instead of text tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding saved products (overrides SHELFWISE_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Order and revenue totals, per period and per category
    Revenue,
    /// Filtered, sorted product list with forecasts
    Inventory(InventoryArgs),
    /// Products running low on stock
    LowStock,
    /// Register a new product
    Register(RegisterArgs),
    /// Set the stock of a product
    Restock {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        stock: u32,
    },
    /// Delete saved products so the next run starts from the seed catalog
    Reset,
}

#[derive(Debug, Default, Args)]
pub struct InventoryArgs {
    /// Only this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive text matched against name or category
    #[arg(long)]
    pub search: Option<String>,

    /// name, description, stock or price
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Lowest price to show; ignored unless it reads as a number
    #[arg(long)]
    pub min_price: Option<String>,

    /// Highest price to show; ignored unless it reads as a number
    #[arg(long)]
    pub max_price: Option<String>,

    /// Hide products with no stock
    #[arg(long)]
    pub in_stock: bool,
}

impl InventoryArgs {
    /// View controls for these flags.
    pub fn to_controls(&self) -> ViewControls {
        ViewControls {
            selected_category: self.category.clone().unwrap_or_default(),
            search: self.search.clone().unwrap_or_default(),
            sort_by: self.sort.unwrap_or_default(),
            sort_asc: !self.desc,
            filter_min_price: self.min_price.clone().unwrap_or_default(),
            filter_max_price: self.max_price.clone().unwrap_or_default(),
            filter_in_stock: self.in_stock,
            ..ViewControls::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub price: f64,

    #[arg(long, default_value_t = 0)]
    pub stock: u32,

    #[arg(long, default_value = "")]
    pub image: String,

    /// Units sold per period, oldest first (e.g. 1,0,2)
    #[arg(long, value_delimiter = ',')]
    pub sales: Option<Vec<u32>>,
}

impl From<RegisterArgs> for NewProduct {
    fn from(args: RegisterArgs) -> Self {
        NewProduct {
            name: args.name,
            description: args.category,
            price: args.price,
            stock: args.stock,
            image: args.image,
            sales: args.sales,
        }
    }
}
