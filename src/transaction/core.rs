use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    account::AccountId,
    category::{CategoryId, CategoryType},
};

/// The ID the finance API assigns to a transaction.
pub type TransactionId = i64;

/// Transactions share the income/expense split with categories.
pub type TransactionType = CategoryType;

time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");

/// Money coming into or going out of an account.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// The id for the transaction.
    pub id: TransactionId,
    /// A short text describing the transaction.
    pub description: String,
    /// The amount of money, always positive. The direction comes from
    /// `transaction_type`.
    pub amount: f64,
    /// Whether the money came in or went out.
    pub transaction_type: TransactionType,
    /// The day the transaction happened.
    #[serde(with = "iso_date")]
    pub transaction_date: Date,
    /// The account the transaction belongs to.
    pub account_id: AccountId,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
    /// The account name, denormalized by the API.
    #[serde(default)]
    pub account_name: Option<String>,
    /// The category name, denormalized by the API.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Free text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// The fields for creating a transaction, as submitted by the transaction
/// form and sent to the finance API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewTransaction {
    /// A short text describing the transaction.
    pub description: String,
    /// The amount of money, always positive.
    pub amount: f64,
    /// Whether the money came in or went out.
    pub transaction_type: TransactionType,
    /// The day the transaction happened.
    #[serde(with = "iso_date")]
    pub transaction_date: Date,
    /// The account the transaction belongs to.
    pub account_id: AccountId,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
    /// Free text notes, omitted when the field is left blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Drop blank notes so the API stores `null` instead of an empty string.
    pub fn normalized(mut self) -> Self {
        if self
            .notes
            .as_deref()
            .is_some_and(|notes| notes.trim().is_empty())
        {
            self.notes = None;
        }

        self
    }
}

/// One page of transactions as returned by `GET /api/transactions`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionPage {
    /// The transactions on this page, newest first.
    pub transactions: Vec<Transaction>,
    /// The total number of pages for the current filters.
    pub pages: u64,
}
