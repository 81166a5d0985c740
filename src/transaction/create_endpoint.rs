//! Defines the endpoint for creating a new transaction.

use std::sync::Arc;

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxCurrentUrl;

use crate::{
    FinanceApi, FinanceApp,
    layout::form_success_response,
    transaction::{NewTransaction, category_select},
};

/// A route handler for creating a new transaction.
///
/// On success the transaction list, the account balances and the dashboard
/// have been refreshed before the active section is re-rendered. The form
/// resets to an expense, so its category select is sent back with the
/// expense categories.
pub async fn create_transaction_endpoint<A: FinanceApi>(
    HxCurrentUrl(current_url): HxCurrentUrl,
    State(app): State<Arc<FinanceApp<A>>>,
    Form(form): Form<NewTransaction>,
) -> Response {
    match app.submit_transaction(form).await {
        Ok(_) => form_success_response(
            &app,
            current_url.as_ref(),
            "Transação salva com sucesso!",
            |state| category_select(&state.categories, true),
        ),
        Err(error) => error.into_alert_response("Erro ao salvar transação"),
    }
}
