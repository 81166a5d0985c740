//! The URIs served by the front-end.
//!
//! The finance API paths consumed by [crate::api] live in that module, these
//! are the pages and htmx targets this server exposes to the browser.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the summary cards, expenses chart and recent transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing transactions with filters and pagination.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The htmx target that re-renders the transaction list for a page or filter change.
pub const TRANSACTIONS_LIST: &str = "/transactions/list";
/// The htmx target that renders the category options for a transaction type.
pub const TRANSACTION_CATEGORY_OPTIONS: &str = "/transactions/category-options";
/// The page listing accounts.
pub const ACCOUNTS_VIEW: &str = "/accounts";
/// The page listing categories for the active tab.
pub const CATEGORIES_VIEW: &str = "/categories";
/// The htmx target that re-renders the category grid for a tab.
pub const CATEGORIES_LIST: &str = "/categories/list";
/// The page with expenses grouped by category.
pub const REPORTS_VIEW: &str = "/reports";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route the transaction modal submits to.
pub const TRANSACTION_FORM: &str = "/forms/transactions";
/// The route the account modal submits to.
pub const ACCOUNT_FORM: &str = "/forms/accounts";
/// The route the category modal submits to.
pub const CATEGORY_FORM: &str = "/forms/categories";
