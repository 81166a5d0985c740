//! The fetch client for the finance REST API.
//!
//! [FinanceApi] is the seam the rest of the crate depends on, the HTTP
//! implementation is [HttpFinanceApi].

mod client;
mod http;

pub use client::{FinanceApi, TransactionQuery};
pub use http::HttpFinanceApi;
