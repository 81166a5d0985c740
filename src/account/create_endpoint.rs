//! Defines the endpoint for creating a new account.

use std::sync::Arc;

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxCurrentUrl;

use crate::{
    FinanceApi, FinanceApp, account::NewAccount, layout::form_success_response,
    transaction::account_select,
};

/// A route handler for creating a new account.
///
/// On success responds with the re-rendered section, a success alert and the
/// transaction form's account select updated out of band.
pub async fn create_account_endpoint<A: FinanceApi>(
    HxCurrentUrl(current_url): HxCurrentUrl,
    State(app): State<Arc<FinanceApp<A>>>,
    Form(form): Form<NewAccount>,
) -> Response {
    match app.submit_account(form).await {
        Ok(_) => form_success_response(
            &app,
            current_url.as_ref(),
            "Conta salva com sucesso!",
            |state| account_select(&state.accounts, true),
        ),
        Err(error) => error.into_alert_response("Erro ao salvar conta"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Form, extract::State, http::StatusCode};
    use axum_htmx::HxCurrentUrl;

    use crate::{
        FinanceApp,
        account::{AccountType, NewAccount, create_account_endpoint},
        pagination::PaginationConfig,
        test_utils::{
            ApiCall, Failures, StubFinanceApi, assert_status_ok, assert_valid_html, count_calls,
            count_elements, element_text, parse_html_fragment, populated_api,
        },
        view_state::Section,
    };

    fn new_account() -> NewAccount {
        NewAccount {
            name: "Poupança BB".to_owned(),
            account_type: AccountType::Savings,
            initial_balance: 500.0,
        }
    }

    #[tokio::test]
    async fn creates_account_and_reloads_accounts() {
        let api = populated_api();
        let calls = api.call_log();
        let app = Arc::new(FinanceApp::new(api, PaginationConfig::default()));
        app.set_section(Section::Accounts).unwrap();

        let response = create_account_endpoint(
            HxCurrentUrl(None),
            State(app),
            Form(new_account()),
        )
        .await;

        assert_status_ok(&response);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![ApiCall::CreateAccount(new_account()), ApiCall::Accounts]
        );

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(count_elements(&html, "[data-account-card]"), 2);
        assert!(element_text(&html, "#alert-container").contains("Conta salva com sucesso!"));
        assert_eq!(
            count_elements(&html, "select#transaction-account[hx-swap-oob] option"),
            2
        );
    }

    #[tokio::test]
    async fn rejected_account_shows_error_alert() {
        let api = StubFinanceApi {
            failures: Failures {
                create: true,
                ..Default::default()
            },
            ..populated_api()
        };
        let calls = api.call_log();
        let app = Arc::new(FinanceApp::new(api, PaginationConfig::default()));

        let response = create_account_endpoint(
            HxCurrentUrl(None),
            State(app),
            Form(new_account()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(count_calls(&calls, |call| *call == ApiCall::Accounts), 0);

        let html = parse_html_fragment(response).await;
        assert!(element_text(&html, "[role=alert]").contains("Erro ao salvar conta"));
    }
}
