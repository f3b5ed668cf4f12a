//! # Depletion Forecast
//!
//! Estimates how many days of stock remain from average sales velocity.
//!
//! ## Calculation
//! ```text
//! avg_sales  = sum(sales) / len(sales)
//! days_left  = floor(stock / avg_sales)
//! forecast   = days_left < 7 ? "Forecast: {days_left} days left" : none
//! ```
//!
//! No forecast is produced without sales data, for an empty window, or when
//! nothing sold (average of zero). Exactly seven days left is not a forecast:
//! stock 3 against `[1, 1, 1, 0, 0, 0, 0]` gives `floor(3 / (3/7)) = 7`.

use std::fmt;

use serde::Serialize;

use crate::types::Product;
use crate::FORECAST_HORIZON_DAYS;

/// A stock depletion warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepletionForecast {
    /// Whole days of stock left at the average sales rate.
    pub days_left: u64,
}

impl fmt::Display for DepletionForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Forecast: {} days left", self.days_left)
    }
}

/// Forecasts depletion for a product, if it runs out within the horizon.
pub fn forecast(product: &Product) -> Option<DepletionForecast> {
    let sales = product.sales.as_deref().filter(|s| !s.is_empty())?;

    let total: u64 = sales.iter().map(|&n| u64::from(n)).sum();
    let avg_sales = total as f64 / sales.len() as f64;
    if avg_sales <= 0.0 {
        return None;
    }

    let days_left = (f64::from(product.stock) / avg_sales).floor() as u64;
    (days_left < FORECAST_HORIZON_DAYS).then_some(DepletionForecast { days_left })
}

/// The forecast as display text, or an empty string when there is none.
pub fn forecast_message(product: &Product) -> String {
    forecast(product)
        .map(|f| f.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn product(stock: u32, sales: Option<Vec<u32>>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Laptop".to_string(),
            description: "Electronics".to_string(),
            price: 1200.0,
            stock,
            image: String::new(),
            sales,
        }
    }

    #[test]
    fn test_seven_days_is_not_a_forecast() {
        let p = product(3, Some(vec![1, 1, 1, 0, 0, 0, 0]));
        assert_eq!(forecast(&p), None);
        assert_eq!(forecast_message(&p), "");
    }

    #[test]
    fn test_forecast_under_horizon() {
        let p = product(2, Some(vec![1, 0, 0, 0, 0, 0, 0]));
        // avg 1/7, 2 / (1/7) = 14 days
        assert_eq!(forecast(&p), None);

        let p = product(7, Some(vec![1, 1, 1, 1, 1, 1, 1]));
        assert_eq!(forecast_message(&p), "");

        let p = product(6, Some(vec![1, 1, 1, 1, 1, 1, 1]));
        assert_eq!(forecast(&p), Some(DepletionForecast { days_left: 6 }));
        assert_eq!(forecast_message(&p), "Forecast: 6 days left");
    }

    #[test]
    fn test_out_of_stock_forecasts_zero_days() {
        let p = product(0, Some(vec![2, 2]));
        assert_eq!(forecast_message(&p), "Forecast: 0 days left");
    }

    #[test]
    fn test_no_sales_data_means_no_forecast() {
        assert_eq!(forecast(&product(1, None)), None);
        assert_eq!(forecast(&product(1, Some(vec![]))), None);
        assert_eq!(forecast(&product(1, Some(vec![0, 0, 0]))), None);
    }
}
