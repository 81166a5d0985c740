use serde::{Deserialize, Serialize};
use time::Date;

use crate::transaction::iso_date;

/// The headline numbers shown on the dashboard, as returned by
/// `GET /api/reports/summary`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    /// The sum of the current balance of every active account.
    pub total_balance: f64,
    /// Income in the current calendar month.
    pub monthly_income: f64,
    /// Expenses in the current calendar month.
    pub monthly_expenses: f64,
    /// `monthly_income - monthly_expenses`.
    pub monthly_net: f64,
}

/// The total spent in one category, as returned by
/// `GET /api/reports/expenses-by-category`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryExpense {
    /// The category name.
    pub category: String,
    /// The total spent.
    pub amount: f64,
    /// The category colour as a hex string.
    pub color: String,
}

/// An optional inclusive date range for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportRange {
    #[serde(
        default,
        with = "iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Date>,
    #[serde(
        default,
        with = "iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Date>,
}

/// The share of `amount` in `total` as a percentage, zero when there is no total.
pub fn percentage_of(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}
