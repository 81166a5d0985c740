use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use time::macros::date;
use tokio::sync::oneshot;

use crate::{
    Error,
    account::{Account, AccountType, NewAccount},
    api::{FinanceApi, TransactionQuery},
    category::{Category, CategoryType, NewCategory},
    reports::{CategoryExpense, ReportRange, Summary},
    transaction::{NewTransaction, Transaction, TransactionPage},
};

/// A request the front-end made to the finance API.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    Accounts,
    Categories(Option<CategoryType>),
    Transactions(TransactionQuery),
    Summary,
    ExpensesByCategory(ReportRange),
    CreateAccount(NewAccount),
    CreateCategory(NewCategory),
    CreateTransaction(NewTransaction),
}

/// Which requests should fail.
#[derive(Debug, Clone, Default)]
pub(crate) struct Failures {
    pub accounts: bool,
    pub categories: bool,
    pub transactions: bool,
    pub recent_transactions: bool,
    pub summary: bool,
    pub expenses: bool,
    pub create: bool,
}

/// An in-memory finance API that records every call.
#[derive(Debug, Default)]
pub(crate) struct StubFinanceApi {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub summary: Option<Summary>,
    pub expenses: Vec<CategoryExpense>,
    pub failures: Failures,
    pub calls: Arc<Mutex<Vec<ApiCall>>>,
    pub transaction_gates: Mutex<HashMap<u64, oneshot::Receiver<()>>>,
}

fn stub_failure() -> Error {
    Error::RequestFailed("stubbed failure".to_owned())
}

impl StubFinanceApi {
    /// A handle to the call log that outlives the stub being moved into an app.
    pub fn call_log(&self) -> Arc<Mutex<Vec<ApiCall>>> {
        self.calls.clone()
    }

    /// Hold the response for `page` until `gate` is released.
    pub fn gate_transactions(&self, page: u64, gate: oneshot::Receiver<()>) {
        self.transaction_gates.lock().unwrap().insert(page, gate);
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Count the calls in `log` that match `predicate`.
pub(crate) fn count_calls(
    log: &Mutex<Vec<ApiCall>>,
    predicate: impl Fn(&ApiCall) -> bool,
) -> usize {
    log.lock().unwrap().iter().filter(|call| predicate(call)).count()
}

impl FinanceApi for StubFinanceApi {
    async fn accounts(&self) -> Result<Vec<Account>, Error> {
        self.record(ApiCall::Accounts);

        if self.failures.accounts {
            return Err(stub_failure());
        }

        Ok(self.accounts.clone())
    }

    async fn categories(&self, category_type: Option<CategoryType>) -> Result<Vec<Category>, Error> {
        self.record(ApiCall::Categories(category_type));

        if self.failures.categories {
            return Err(stub_failure());
        }

        Ok(self
            .categories
            .iter()
            .filter(|category| category_type.is_none_or(|want| category.category_type == want))
            .cloned()
            .collect())
    }

    async fn transactions(&self, query: &TransactionQuery) -> Result<TransactionPage, Error> {
        self.record(ApiCall::Transactions(query.clone()));

        let page = query.page.unwrap_or(1);
        let gate = self.transaction_gates.lock().unwrap().remove(&page);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let is_recent = query.page.is_none();
        if (is_recent && self.failures.recent_transactions)
            || (!is_recent && self.failures.transactions)
        {
            return Err(stub_failure());
        }

        let per_page = query.per_page.max(1);
        let pages = (self.transactions.len() as u64).div_ceil(per_page).max(1);
        let transactions = self
            .transactions
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(TransactionPage {
            transactions,
            pages,
        })
    }

    async fn summary(&self) -> Result<Summary, Error> {
        self.record(ApiCall::Summary);

        if self.failures.summary {
            return Err(stub_failure());
        }

        self.summary
            .clone()
            .ok_or_else(|| Error::InvalidResponse("no summary".to_owned()))
    }

    async fn expenses_by_category(&self, range: &ReportRange) -> Result<Vec<CategoryExpense>, Error> {
        self.record(ApiCall::ExpensesByCategory(*range));

        if self.failures.expenses {
            return Err(stub_failure());
        }

        Ok(self.expenses.clone())
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account, Error> {
        self.record(ApiCall::CreateAccount(account.clone()));

        if self.failures.create {
            return Err(Error::UnexpectedStatus {
                status: 400,
                url: "http://stub/api/accounts".to_owned(),
            });
        }

        Ok(Account {
            id: 100,
            name: account.name.clone(),
            account_type: account.account_type.clone(),
            current_balance: account.initial_balance,
        })
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, Error> {
        self.record(ApiCall::CreateCategory(category.clone()));

        if self.failures.create {
            return Err(Error::UnexpectedStatus {
                status: 400,
                url: "http://stub/api/categories".to_owned(),
            });
        }

        Ok(Category {
            id: 100,
            name: category.name.clone(),
            category_type: category.category_type,
            color: category.color.clone(),
            icon: category.icon.clone(),
        })
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        self.record(ApiCall::CreateTransaction(transaction.clone()));

        if self.failures.create {
            return Err(Error::UnexpectedStatus {
                status: 400,
                url: "http://stub/api/transactions".to_owned(),
            });
        }

        Ok(Transaction {
            id: 100,
            description: transaction.description.clone(),
            amount: transaction.amount,
            transaction_type: transaction.transaction_type,
            transaction_date: transaction.transaction_date,
            account_id: transaction.account_id,
            category_id: transaction.category_id,
            account_name: None,
            category_name: None,
            notes: transaction.notes.clone(),
        })
    }
}

pub(crate) fn sample_accounts() -> Vec<Account> {
    vec![
        Account {
            id: 1,
            name: "Nubank".to_owned(),
            account_type: AccountType::Checking,
            current_balance: 1234.5,
        },
        Account {
            id: 2,
            name: "Carteira".to_owned(),
            account_type: AccountType::Cash,
            current_balance: -20.0,
        },
    ]
}

pub(crate) fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Salário".to_owned(),
            category_type: CategoryType::Income,
            color: "#28a745".to_owned(),
            icon: "fas fa-money-bill".to_owned(),
        },
        Category {
            id: 2,
            name: "Mercado".to_owned(),
            category_type: CategoryType::Expense,
            color: "#dc3545".to_owned(),
            icon: "fas fa-shopping-cart".to_owned(),
        },
        Category {
            id: 3,
            name: "Transporte".to_owned(),
            category_type: CategoryType::Expense,
            color: "#007bff".to_owned(),
            icon: "fas fa-bus".to_owned(),
        },
    ]
}

/// `count` expense transactions numbered from 1, newest first.
pub(crate) fn sample_transactions(count: usize) -> Vec<Transaction> {
    (1..=count as i64)
        .map(|id| Transaction {
            id,
            description: format!("Compra {id}"),
            amount: 10.0 * id as f64,
            transaction_type: CategoryType::Expense,
            transaction_date: date!(2024 - 03 - 09),
            account_id: 1,
            category_id: 2,
            account_name: Some("Nubank".to_owned()),
            category_name: Some("Mercado".to_owned()),
            notes: None,
        })
        .collect()
}

pub(crate) fn sample_summary() -> Summary {
    Summary {
        total_balance: 1214.5,
        monthly_income: 5000.0,
        monthly_expenses: 3200.25,
        monthly_net: 1799.75,
    }
}

pub(crate) fn sample_expenses() -> Vec<CategoryExpense> {
    vec![
        CategoryExpense {
            category: "Mercado".to_owned(),
            amount: 750.0,
            color: "#dc3545".to_owned(),
        },
        CategoryExpense {
            category: "Transporte".to_owned(),
            amount: 250.0,
            color: "#007bff".to_owned(),
        },
    ]
}

/// A stub API with a little of everything.
pub(crate) fn populated_api() -> StubFinanceApi {
    StubFinanceApi {
        accounts: sample_accounts(),
        categories: sample_categories(),
        transactions: sample_transactions(3),
        summary: Some(sample_summary()),
        expenses: sample_expenses(),
        ..Default::default()
    }
}
