//! # Revenue Analysis
//!
//! Totals for the whole catalog, units per sales period, and a per-category
//! breakdown.

use std::io::Write;

use serde::Serialize;
use shelfwise_core::{Catalog, CategorySummary, Persistence};

use super::{write_json, OutputFormat};
use crate::error::AppResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub total_orders: u64,
    pub total_revenue: f64,
    /// Units sold per period, oldest first.
    pub sales_by_period: Vec<u64>,
    pub categories: Vec<CategorySummary>,
}

impl RevenueReport {
    pub fn from_catalog<P: Persistence>(catalog: &Catalog<P>) -> Self {
        RevenueReport {
            total_orders: catalog.total_orders(),
            total_revenue: catalog.total_revenue(),
            sales_by_period: catalog.sales_by_period(),
            categories: catalog.revenue_by_category(),
        }
    }
}

/// Prints the revenue analysis screen.
pub fn show<P: Persistence>(
    catalog: &Catalog<P>,
    format: OutputFormat,
    out: &mut impl Write,
) -> AppResult<()> {
    let report = RevenueReport::from_catalog(catalog);
    match format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Text => write_text(&report, out),
    }
}

fn write_text(report: &RevenueReport, out: &mut impl Write) -> AppResult<()> {
    writeln!(out, "Total orders:  {}", report.total_orders)?;
    writeln!(out, "Total revenue: {:.2}", report.total_revenue)?;

    writeln!(out)?;
    writeln!(out, "Units sold per period (oldest first)")?;
    for (period, units) in report.sales_by_period.iter().enumerate() {
        writeln!(out, "  {:>3}  {:>6}", period + 1, units)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<20} {:>8} {:>8} {:>12}",
        "Category", "Products", "Units", "Revenue"
    )?;
    for summary in &report.categories {
        writeln!(
            out,
            "{:<20} {:>8} {:>8} {:>12.2}",
            summary.category, summary.products, summary.units, summary.revenue
        )?;
    }
    Ok(())
}
