//! Reports: the monthly summary and expenses grouped by category.

mod core;
mod reports_page;

pub use core::{CategoryExpense, ReportRange, Summary, percentage_of};
pub use reports_page::{ReportRangeForm, get_reports_page};
pub(crate) use reports_page::reports_view;
