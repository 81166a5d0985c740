//! The dashboard: monthly summary cards, expenses by category and the most
//! recent transactions.

mod cards;
mod charts;
mod handlers;

pub(crate) use handlers::dashboard_view;
pub use handlers::get_dashboard_page;
