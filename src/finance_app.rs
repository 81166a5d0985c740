//! Fetches data from the finance API into the view-state.
//!
//! Every operation follows the same shape: read what it needs from the
//! view-state, release the lock, await the finance API, then lock again to
//! store the response. The lock is never held across an `.await`.

use std::sync::{Mutex, MutexGuard};

use crate::{
    Error,
    account::{Account, NewAccount},
    api::{FinanceApi, TransactionQuery},
    category::{Category, CategoryType, NewCategory, categories_of_type},
    pagination::PaginationConfig,
    reports::ReportRange,
    transaction::{NewTransaction, Transaction, TransactionFilters, TransactionType},
    view_state::{CategoryListing, LoadOutcome, Section, ViewState},
};

/// The result of asking for another page of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// The page does not exist, nothing was fetched.
    Ignored,
    /// The page was fetched.
    Loaded(LoadOutcome),
}

/// The front-end controller: owns the finance API client and the view-state.
#[derive(Debug)]
pub struct FinanceApp<A> {
    api: A,
    state: Mutex<ViewState>,
    pagination: PaginationConfig,
}

impl<A: FinanceApi> FinanceApp<A> {
    /// Create an app with an empty view-state.
    pub fn new(api: A, pagination: PaginationConfig) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::default()),
            pagination,
        }
    }

    /// A copy of the current view-state for rendering.
    pub fn snapshot(&self) -> Result<ViewState, Error> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ViewState>, Error> {
        self.state.lock().map_err(|_| Error::StateLockError)
    }

    fn update<T>(&self, f: impl FnOnce(&mut ViewState) -> T) -> Result<T, Error> {
        let mut state = self.lock()?;

        Ok(f(&mut state))
    }

    /// Make `section` the active section and load the data it displays.
    ///
    /// The categories section opens on the expense tab and the reports
    /// section reuses the last selected date range.
    pub async fn show_section(&self, section: Section) -> Result<(), Error> {
        self.update(|state| state.section = section)?;
        tracing::debug!("Showing section {section:?}");

        match section {
            Section::Dashboard => self.refresh_dashboard().await,
            Section::Transactions => self.load_transactions().await.map(|_| ()),
            Section::Accounts => self.load_accounts().await,
            Section::Categories => self.load_category_tab(CategoryType::Expense).await,
            Section::Reports => {
                let range = self.update(|state| state.report.range)?;
                self.load_report(range).await
            }
        }
    }

    /// Mark `section` as active without fetching anything.
    pub fn set_section(&self, section: Section) -> Result<(), Error> {
        self.update(|state| state.section = section)
    }

    /// Fetch accounts, all categories and the first page of transactions concurrently.
    ///
    /// Every successful response is stored even if another one fails, the
    /// first error is returned.
    pub async fn load_initial_data(&self) -> Result<(), Error> {
        let (accounts, categories, transactions) = tokio::join!(
            self.load_accounts(),
            self.load_categories(),
            self.load_transactions()
        );

        accounts?;
        categories?;
        transactions?;

        Ok(())
    }

    /// Replace the account list.
    pub async fn load_accounts(&self) -> Result<(), Error> {
        let accounts = self.api.accounts().await?;

        self.update(|state| state.accounts = accounts)
    }

    /// Replace the list of all categories used by selects and transaction icons.
    pub async fn load_categories(&self) -> Result<(), Error> {
        let categories = self.api.categories(None).await?;

        self.update(|state| state.categories = categories)
    }

    /// Show the categories of `category_type` on the categories page.
    pub async fn load_category_tab(&self, category_type: CategoryType) -> Result<(), Error> {
        let categories = self.api.categories(Some(category_type)).await?;

        self.update(|state| {
            state.category_listing = CategoryListing {
                category_type,
                categories,
            }
        })
    }

    /// Fetch the current page of transactions for the current filters.
    ///
    /// A response that arrives after a newer request was issued is dropped.
    pub async fn load_transactions(&self) -> Result<LoadOutcome, Error> {
        let page_size = self.pagination.page_size;
        let (generation, query) = self.update(|state| state.begin_transactions_fetch(page_size))?;

        let page = self.api.transactions(&query).await?;

        let outcome = self.update(|state| state.apply_transaction_page(generation, page))?;
        if outcome == LoadOutcome::Stale {
            tracing::debug!("Dropped stale transaction page from request {generation}");
        }

        Ok(outcome)
    }

    /// Go to `page` of the transaction list.
    ///
    /// Pages outside `1..=total_pages` are ignored without fetching.
    pub async fn change_page(&self, page: u64) -> Result<PageChange, Error> {
        if !self.update(|state| state.go_to_page(page))? {
            tracing::debug!("Ignored request for page {page}");
            return Ok(PageChange::Ignored);
        }

        self.load_transactions().await.map(PageChange::Loaded)
    }

    /// Apply new filters and fetch the first page of matching transactions.
    pub async fn set_filters(&self, filters: TransactionFilters) -> Result<LoadOutcome, Error> {
        self.update(|state| state.set_filters(filters))?;

        self.load_transactions().await
    }

    /// Fetch the summary, the expenses chart data and the recent transactions, in that order.
    ///
    /// A failed expenses fetch empties the chart and a failed recent
    /// transactions fetch is only logged. A failed summary keeps the previous
    /// summary and is returned as the error once the other two have been fetched.
    pub async fn refresh_dashboard(&self) -> Result<(), Error> {
        let summary = self.api.summary().await;
        if let Ok(summary) = &summary {
            self.update(|state| state.dashboard.summary = Some(summary.clone()))?;
        }

        let expenses = self
            .api
            .expenses_by_category(&ReportRange::default())
            .await
            .unwrap_or_else(|error| {
                tracing::error!("Could not load expenses by category: {error}");
                Vec::new()
            });
        self.update(|state| state.dashboard.expenses = expenses)?;

        let recent = TransactionQuery::recent(self.pagination.recent_transactions);
        match self.api.transactions(&recent).await {
            Ok(page) => {
                self.update(|state| state.dashboard.recent_transactions = page.transactions)?
            }
            Err(error) => tracing::error!("Could not load recent transactions: {error}"),
        }

        summary.map(|_| ())
    }

    /// Use `range` the next time the reports section is shown.
    pub fn set_report_range(&self, range: ReportRange) -> Result<(), Error> {
        self.update(|state| state.report.range = range)
    }

    /// Fetch expenses by category for `range`.
    pub async fn load_report(&self, range: ReportRange) -> Result<(), Error> {
        self.update(|state| state.report.range = range)?;

        let expenses = self.api.expenses_by_category(&range).await?;

        self.update(|state| state.report.expenses = expenses)
    }

    /// Create a transaction, then refresh the transaction list, the account
    /// balances and the dashboard once each.
    ///
    /// Only the create request can fail the submission, refresh errors are logged.
    pub async fn submit_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        let transaction = self
            .api
            .create_transaction(&new_transaction.normalized())
            .await?;
        tracing::info!("Created transaction {}", transaction.id);

        if let Err(error) = self.load_transactions().await {
            tracing::error!("Could not reload transactions: {error}");
        }
        if let Err(error) = self.load_accounts().await {
            tracing::error!("Could not reload accounts: {error}");
        }
        if let Err(error) = self.refresh_dashboard().await {
            tracing::error!("Could not refresh the dashboard: {error}");
        }

        Ok(transaction)
    }

    /// Create an account, then refresh the account list.
    pub async fn submit_account(&self, new_account: NewAccount) -> Result<Account, Error> {
        let account = self.api.create_account(&new_account).await?;
        tracing::info!("Created account {}", account.id);

        if let Err(error) = self.load_accounts().await {
            tracing::error!("Could not reload accounts: {error}");
        }

        Ok(account)
    }

    /// Create a category, then refresh all categories and the active category tab.
    pub async fn submit_category(&self, new_category: NewCategory) -> Result<Category, Error> {
        let category = self.api.create_category(&new_category).await?;
        tracing::info!("Created category {}", category.id);

        if let Err(error) = self.load_categories().await {
            tracing::error!("Could not reload categories: {error}");
        }

        let active_tab = self.update(|state| state.category_listing.category_type)?;
        if let Err(error) = self.load_category_tab(active_tab).await {
            tracing::error!("Could not reload the {active_tab} category tab: {error}");
        }

        Ok(category)
    }

    /// The loaded categories a transaction of `transaction_type` may use.
    pub fn categories_for_type(
        &self,
        transaction_type: TransactionType,
    ) -> Result<Vec<Category>, Error> {
        let state = self.lock()?;

        Ok(categories_of_type(&state.categories, transaction_type)
            .cloned()
            .collect())
    }
}
