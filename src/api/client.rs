//! The contract between the front-end and the finance REST API.

use std::future::Future;

use serde::Serialize;
use time::Date;

use crate::{
    Error,
    account::{Account, AccountId, NewAccount},
    category::{Category, CategoryId, CategoryType, NewCategory},
    reports::{CategoryExpense, ReportRange, Summary},
    transaction::{NewTransaction, Transaction, TransactionPage, TransactionType, iso_date},
};

/// The path of the accounts collection.
pub const ACCOUNTS_PATH: &str = "/api/accounts";
/// The path of the categories collection.
pub const CATEGORIES_PATH: &str = "/api/categories";
/// The path of the transactions collection.
pub const TRANSACTIONS_PATH: &str = "/api/transactions";
/// The path of the monthly summary report.
pub const SUMMARY_PATH: &str = "/api/reports/summary";
/// The path of the expenses by category report.
pub const EXPENSES_BY_CATEGORY_PATH: &str = "/api/reports/expenses-by-category";

/// The calls the front-end makes to the finance API.
///
/// Every method issues exactly one HTTP request and is not retried.
/// Read methods do not inspect the response status, a body that does not
/// decode is reported as [Error::InvalidResponse]. Create methods map any
/// non-2xx status to [Error::UnexpectedStatus].
pub trait FinanceApi: Send + Sync + 'static {
    /// `GET /api/accounts`
    fn accounts(&self) -> impl Future<Output = Result<Vec<Account>, Error>> + Send;

    /// `GET /api/categories[?type=]`
    fn categories(
        &self,
        category_type: Option<CategoryType>,
    ) -> impl Future<Output = Result<Vec<Category>, Error>> + Send;

    /// `GET /api/transactions?...`
    fn transactions(
        &self,
        query: &TransactionQuery,
    ) -> impl Future<Output = Result<TransactionPage, Error>> + Send;

    /// `GET /api/reports/summary`
    fn summary(&self) -> impl Future<Output = Result<Summary, Error>> + Send;

    /// `GET /api/reports/expenses-by-category[?start_date=&end_date=]`
    fn expenses_by_category(
        &self,
        range: &ReportRange,
    ) -> impl Future<Output = Result<Vec<CategoryExpense>, Error>> + Send;

    /// `POST /api/accounts`
    fn create_account(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = Result<Account, Error>> + Send;

    /// `POST /api/categories`
    fn create_category(
        &self,
        category: &NewCategory,
    ) -> impl Future<Output = Result<Category, Error>> + Send;

    /// `POST /api/transactions`
    fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> impl Future<Output = Result<Transaction, Error>> + Send;
}

/// The query string for listing transactions.
///
/// Unset filters are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    pub per_page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl TransactionQuery {
    /// The query for the latest `count` transactions, ignoring any filters.
    pub fn recent(count: u64) -> Self {
        Self {
            per_page: count,
            ..Default::default()
        }
    }
}
