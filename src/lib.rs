//! Home Finance is a web front-end for a personal finance REST API.
//!
//! The server keeps a snapshot of the data it last fetched from the finance
//! API and serves it as HTML pages and htmx partials: a dashboard, paginated
//! transactions, accounts, categories and reports, plus the forms for
//! creating each of them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};
use axum_server::Handle;
use tokio::signal;

mod account;
mod alert;
mod api;
mod app_state;
mod category;
mod config;
mod dashboard;
mod endpoints;
mod finance_app;
mod html;
mod internal_server_error;
mod layout;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod reports;
mod routing;
mod transaction;
mod view_state;

#[cfg(test)]
mod test_utils;

pub use api::{FinanceApi, HttpFinanceApi, TransactionQuery};
pub use app_state::AppState;
pub use config::{AppConfig, DEFAULT_API_URL};
pub use finance_app::FinanceApp;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use routing::build_router;

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the finance API could not be sent or its body could
    /// not be read, e.g. the API is down or the request timed out.
    #[error("request to the finance API failed: {0}")]
    RequestFailed(String),

    /// The finance API rejected a create request.
    #[error("the finance API responded to {url} with status {status}")]
    UnexpectedStatus {
        /// The HTTP status code of the response.
        status: u16,
        /// The URL the request was sent to.
        url: String,
    },

    /// The response body was not the JSON the front-end expects.
    ///
    /// Read requests do not check the response status, so an error page
    /// from the API also ends up here.
    #[error("could not decode the finance API response: {0}")]
    InvalidResponse(String),

    /// The configured finance API URL is not an absolute HTTP(S) URL.
    #[error("invalid finance API URL \"{0}\"")]
    InvalidApiUrl(String),

    /// Could not acquire the view-state lock.
    #[error("could not acquire the view-state lock")]
    StateLockError,
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::InvalidResponse(error.to_string())
        } else {
            Error::RequestFailed(error.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StateLockError => InternalServerError::default().into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError {
                    description: "Não foi possível falar com o servidor financeiro.",
                    fix: "Verifique se a API está no ar e tente novamente.",
                }
                .into_response()
            }
        }
    }
}

impl Error {
    /// Log the error and render `message` as an error alert.
    ///
    /// The response status tells htmx to swap the alert into the alert
    /// container instead of the request's usual target. The alert always
    /// replaces the container's children, whatever swap the request asked for.
    fn into_alert_response(self, message: &str) -> Response {
        tracing::error!("{message}: {self}");

        let status = match &self {
            Error::StateLockError | Error::InvalidApiUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::UnexpectedStatus { status, .. } if *status < 500 => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            HxReswap(SwapOption::InnerHtml),
            Alert::error(message, self.details()).into_html(),
        )
            .into_response()
    }

    /// Log the error and turn it into an alert shown on a full page.
    fn into_page_alert(self, message: &'static str) -> Alert<'static> {
        tracing::error!("{message}: {self}");

        Alert::error(message, self.details())
    }

    /// A short explanation for the user.
    fn details(&self) -> &'static str {
        match self {
            Error::RequestFailed(_) => "O servidor financeiro não respondeu.",
            Error::UnexpectedStatus { .. } => "O servidor financeiro recusou os dados enviados.",
            Error::InvalidResponse(_) => "O servidor financeiro enviou uma resposta inválida.",
            Error::InvalidApiUrl(_) | Error::StateLockError => {
                "Ocorreu um erro inesperado, verifique os logs do servidor."
            }
        }
    }
}
