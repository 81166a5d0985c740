//! Settings for talking to the finance API.

use std::time::Duration;

use crate::{Error, api::HttpFinanceApi, pagination::PaginationConfig};

/// The default address of the finance API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Where the finance API lives and how to page its data.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// The base URL of the finance API, without the `/api` prefix.
    pub api_url: String,
    /// How long to wait for the finance API. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Page sizes for the transaction lists.
    pub pagination: PaginationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout: None,
            pagination: PaginationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the HTTP client for the configured finance API.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `api_url` is not an absolute HTTP(S) URL.
    pub fn finance_api(&self) -> Result<HttpFinanceApi, Error> {
        HttpFinanceApi::new(&self.api_url, self.request_timeout)
    }
}
