//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{FinanceApi, config::AppConfig, finance_app::FinanceApp};

/// The state of the web server.
#[derive(Debug)]
pub struct AppState<A> {
    /// The controller shared by every request handler.
    pub app: Arc<FinanceApp<A>>,
}

impl<A: FinanceApi> AppState<A> {
    /// Create the server state around `api`.
    pub fn new(api: A, config: &AppConfig) -> Self {
        Self {
            app: Arc::new(FinanceApp::new(api, config.pagination.clone())),
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
        }
    }
}

impl<A> FromRef<AppState<A>> for Arc<FinanceApp<A>> {
    fn from_ref(state: &AppState<A>) -> Self {
        state.app.clone()
    }
}
