//! Transactions: the filtered, paginated list, the transaction row shared
//! with the dashboard and the form for creating a transaction.

mod core;
mod create_endpoint;
mod filters;
mod form;
mod transactions_page;
mod view;

pub(crate) use core::iso_date;
pub use core::{NewTransaction, Transaction, TransactionPage, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use filters::{TransactionFilterForm, TransactionFilters, parse_date, parse_transaction_type};
pub(crate) use form::{TRANSACTION_MODAL_ID, account_select, category_select, transaction_modal};
pub use form::get_category_options;
pub use transactions_page::{get_transactions_list, get_transactions_page};
pub(crate) use transactions_page::transactions_view;
pub(crate) use view::{MetaLine, transaction_item};
