//! Sales report values. Computed per request, never stored.

use serde::Serialize;

/// Product with the highest summed quantity in the reporting window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSellingProduct {
    pub nama: String,
    pub qty_terjual: i64,
}

/// Revenue, transaction count and best seller for a day or a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub total_revenue: i64,
    pub total_transaksi: i64,
    pub produk_terlaris: Option<BestSellingProduct>,
}

impl DailyReport {
    /// Report for a window with no transactions
    pub fn empty() -> Self {
        Self {
            total_revenue: 0,
            total_transaksi: 0,
            produk_terlaris: None,
        }
    }
}
