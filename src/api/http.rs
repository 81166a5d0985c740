//! A [FinanceApi] that talks to the finance REST API over HTTP.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error,
    account::{Account, NewAccount},
    api::client::{
        ACCOUNTS_PATH, CATEGORIES_PATH, EXPENSES_BY_CATEGORY_PATH, FinanceApi, SUMMARY_PATH,
        TRANSACTIONS_PATH, TransactionQuery,
    },
    category::{Category, CategoryType, NewCategory},
    reports::{CategoryExpense, ReportRange, Summary},
    transaction::{NewTransaction, Transaction, TransactionPage},
};

/// The HTTP client for the finance API.
#[derive(Debug, Clone)]
pub struct HttpFinanceApi {
    client: Client,
    /// The scheme, host and optional path prefix, without a trailing slash.
    base_url: String,
}

#[derive(Serialize)]
struct CategoryTypeQuery {
    #[serde(rename = "type")]
    category_type: CategoryType,
}

impl HttpFinanceApi {
    /// Create a client for the API served at `base_url`, e.g. `http://127.0.0.1:5000`.
    ///
    /// When `timeout` is `None` requests wait for the server indefinitely.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute HTTP(S)
    /// URL, or [Error::RequestFailed] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let url = Url::parse(base_url).map_err(|_| Error::InvalidApiUrl(base_url.to_owned()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidApiUrl(base_url.to_owned()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str, query: &impl Serialize) -> Result<String, Error> {
        let query = serde_urlencoded::to_string(query)
            .map_err(|error| Error::RequestFailed(format!("invalid query string: {error}")))?;

        if query.is_empty() {
            Ok(format!("{}{path}", self.base_url))
        } else {
            Ok(format!("{}{path}?{query}", self.base_url))
        }
    }

    /// Fetch `path` and decode the body, whatever the response status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.url(path, query)?;
        tracing::debug!("GET {url}");

        let body = self.client.get(&url).send().await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!(
                "could not decode response from {url}: {}",
                String::from_utf8_lossy(&body)
            );
            Error::InvalidResponse(error.to_string())
        })
    }

    /// Post `body` as JSON to `path`, failing on any non-2xx response.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path, &())?;
        tracing::debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|error| Error::InvalidResponse(error.to_string()))
    }
}

impl FinanceApi for HttpFinanceApi {
    async fn accounts(&self) -> Result<Vec<Account>, Error> {
        self.get_json(ACCOUNTS_PATH, &()).await
    }

    async fn categories(&self, category_type: Option<CategoryType>) -> Result<Vec<Category>, Error> {
        let query = category_type.map(|category_type| CategoryTypeQuery { category_type });

        self.get_json(CATEGORIES_PATH, &query).await
    }

    async fn transactions(&self, query: &TransactionQuery) -> Result<TransactionPage, Error> {
        self.get_json(TRANSACTIONS_PATH, query).await
    }

    async fn summary(&self) -> Result<Summary, Error> {
        self.get_json(SUMMARY_PATH, &()).await
    }

    async fn expenses_by_category(&self, range: &ReportRange) -> Result<Vec<CategoryExpense>, Error> {
        self.get_json(EXPENSES_BY_CATEGORY_PATH, range).await
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account, Error> {
        self.post_json(ACCOUNTS_PATH, account).await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, Error> {
        self.post_json(CATEGORIES_PATH, category).await
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        self.post_json(TRANSACTIONS_PATH, transaction).await
    }
}
