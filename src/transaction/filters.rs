//! The filters applied to the transaction list.

use std::str::FromStr;

use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    account::AccountId,
    api::TransactionQuery,
    category::{CategoryId, CategoryType},
    transaction::TransactionType,
};

/// The active filters for the transaction list. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilters {
    pub account_id: Option<AccountId>,
    pub category_id: Option<CategoryId>,
    pub transaction_type: Option<TransactionType>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl TransactionFilters {
    /// The query for `page` of the transactions matching these filters.
    pub fn to_query(&self, page: u64, per_page: u64) -> TransactionQuery {
        TransactionQuery {
            page: Some(page),
            per_page,
            account_id: self.account_id,
            category_id: self.category_id,
            transaction_type: self.transaction_type,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Whether any filter is set.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// The filter selects as submitted by the browser.
///
/// The "all" option of each select submits an empty string, so every field
/// is read as text and blank or malformed values are treated as unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionFilterForm {
    pub account_id: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<TransactionFilterForm> for TransactionFilters {
    fn from(form: TransactionFilterForm) -> Self {
        Self {
            account_id: parse_optional(&form.account_id),
            category_id: parse_optional(&form.category_id),
            transaction_type: parse_transaction_type(&form.transaction_type),
            start_date: parse_date(&form.start_date),
            end_date: parse_date(&form.end_date),
        }
    }
}

fn parse_optional<T: FromStr>(value: &str) -> Option<T> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    value.parse().ok()
}

/// Parse the `transaction_type` value used in forms and query strings.
pub fn parse_transaction_type(value: &str) -> Option<TransactionType> {
    match value.trim() {
        "income" => Some(CategoryType::Income),
        "expense" => Some(CategoryType::Expense),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` date from a date input.
pub fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}
