//! The in-memory snapshot of the most recently fetched data.
//!
//! Lists in [ViewState] are only ever replaced wholesale by the next server
//! response, nothing here is patched locally.

use crate::{
    account::Account,
    api::TransactionQuery,
    category::{Category, CategoryType},
    endpoints,
    reports::{CategoryExpense, ReportRange, Summary},
    transaction::{Transaction, TransactionFilters, TransactionPage},
};

/// One of the top-level views of the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Transactions,
    Accounts,
    Categories,
    Reports,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Transactions,
        Section::Accounts,
        Section::Categories,
        Section::Reports,
    ];

    /// The page title.
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Transactions => "Transações",
            Section::Accounts => "Contas",
            Section::Categories => "Categorias",
            Section::Reports => "Relatórios",
        }
    }

    /// The page that displays the section.
    pub fn endpoint(self) -> &'static str {
        match self {
            Section::Dashboard => endpoints::DASHBOARD_VIEW,
            Section::Transactions => endpoints::TRANSACTIONS_VIEW,
            Section::Accounts => endpoints::ACCOUNTS_VIEW,
            Section::Categories => endpoints::CATEGORIES_VIEW,
            Section::Reports => endpoints::REPORTS_VIEW,
        }
    }

    /// The section displayed at `path`, if any.
    pub fn from_path(path: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.endpoint() == path)
    }
}

/// Which page of transactions is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// The page currently requested, starting at 1.
    pub current_page: u64,
    /// The page count reported by the last applied response.
    pub total_pages: u64,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageCursor {
    /// Whether `page` is a page that exists.
    pub fn contains(&self, page: u64) -> bool {
        page >= 1 && page <= self.total_pages
    }
}

/// A counter attached to each transaction list fetch.
///
/// Only a response carrying the latest issued generation may update the view-state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Issue the generation for a new request.
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `generation` is the most recently issued one.
    pub fn is_latest(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// The result of applying a transaction list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the transaction list.
    Applied,
    /// A newer request was issued while this one was in flight, the response was dropped.
    Stale,
}

/// The categories displayed on the categories page for one tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryListing {
    /// The active tab.
    pub category_type: CategoryType,
    /// The categories of that type from the last fetch.
    pub categories: Vec<Category>,
}

/// The widgets on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    /// `None` until the first successful summary fetch.
    pub summary: Option<Summary>,
    /// The data for the expenses chart.
    pub expenses: Vec<CategoryExpense>,
    /// The latest transactions, ignoring filters.
    pub recent_transactions: Vec<Transaction>,
}

/// The data on the reports page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSnapshot {
    /// The date range the expenses were fetched for.
    pub range: ReportRange,
    /// Expenses grouped by category.
    pub expenses: Vec<CategoryExpense>,
}

/// Everything the renderers need, as last fetched from the finance API.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// The section the user last activated.
    pub section: Section,
    /// Every active account.
    pub accounts: Vec<Account>,
    /// Every active category, used for selects and transaction icons.
    pub categories: Vec<Category>,
    /// The categories for the active tab on the categories page.
    pub category_listing: CategoryListing,
    /// The current page of transactions.
    pub transactions: Vec<Transaction>,
    /// The pagination cursor for `transactions`.
    pub cursor: PageCursor,
    /// The filters applied to `transactions`.
    pub filters: TransactionFilters,
    /// The dashboard widgets.
    pub dashboard: DashboardSnapshot,
    /// The reports page data.
    pub report: ReportSnapshot,
    pub(crate) transactions_generation: RequestGeneration,
}

impl ViewState {
    /// Move to `page` if it exists.
    ///
    /// Returns `false` and leaves the cursor untouched for pages outside
    /// `1..=total_pages`.
    pub fn go_to_page(&mut self, page: u64) -> bool {
        if !self.cursor.contains(page) {
            return false;
        }

        self.cursor.current_page = page;
        true
    }

    /// Replace the filters and go back to the first page.
    pub fn set_filters(&mut self, filters: TransactionFilters) {
        self.filters = filters;
        self.cursor.current_page = 1;
    }

    /// Issue a new transaction list request for the current page and filters.
    ///
    /// Returns the generation to hand back to [ViewState::apply_transaction_page].
    pub fn begin_transactions_fetch(&mut self, per_page: u64) -> (u64, TransactionQuery) {
        let generation = self.transactions_generation.issue();
        let query = self.filters.to_query(self.cursor.current_page, per_page);

        (generation, query)
    }

    /// Replace the transaction list with `page` if no newer request has been issued.
    pub fn apply_transaction_page(&mut self, generation: u64, page: TransactionPage) -> LoadOutcome {
        if !self.transactions_generation.is_latest(generation) {
            return LoadOutcome::Stale;
        }

        self.transactions = page.transactions;
        self.cursor.total_pages = page.pages;

        LoadOutcome::Applied
    }
}
