//! Defines the endpoint for creating a new category.

use std::sync::Arc;

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxCurrentUrl;

use crate::{
    FinanceApi, FinanceApp, category::NewCategory, layout::form_success_response,
    transaction::category_select,
};

/// A route handler for creating a new category, responds with the
/// re-rendered section, a success alert and the transaction form's
/// category select with the reloaded categories.
pub async fn create_category_endpoint<A: FinanceApi>(
    HxCurrentUrl(current_url): HxCurrentUrl,
    State(app): State<Arc<FinanceApp<A>>>,
    Form(form): Form<NewCategory>,
) -> Response {
    match app.submit_category(form).await {
        Ok(_) => form_success_response(
            &app,
            current_url.as_ref(),
            "Categoria salva com sucesso!",
            |state| category_select(&state.categories, true),
        ),
        Err(error) => error.into_alert_response("Erro ao salvar categoria"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Form, extract::State, http::StatusCode};
    use axum_htmx::HxCurrentUrl;

    use crate::{
        FinanceApp,
        category::{CategoryType, NewCategory, create_category_endpoint},
        pagination::PaginationConfig,
        test_utils::{
            ApiCall, Failures, StubFinanceApi, assert_status_ok, assert_valid_html,
            count_elements, element_text, parse_html_fragment, populated_api,
        },
        view_state::Section,
    };

    fn new_category() -> NewCategory {
        NewCategory {
            name: "Lazer".to_owned(),
            category_type: CategoryType::Expense,
            color: "#ffc107".to_owned(),
            icon: "fas fa-gamepad".to_owned(),
        }
    }

    #[tokio::test]
    async fn creates_category_and_reloads_categories_then_tab() {
        let api = populated_api();
        let calls = api.call_log();
        let app = Arc::new(FinanceApp::new(api, PaginationConfig::default()));
        app.set_section(Section::Categories).unwrap();

        let response = create_category_endpoint(
            HxCurrentUrl(None),
            State(app),
            Form(new_category()),
        )
        .await;

        assert_status_ok(&response);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                ApiCall::CreateCategory(new_category()),
                ApiCall::Categories(None),
                ApiCall::Categories(Some(CategoryType::Expense)),
            ]
        );

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(count_elements(&html, "[data-category-card]"), 2);
        assert!(element_text(&html, "#alert-container").contains("Categoria salva com sucesso!"));
        assert_eq!(
            count_elements(&html, "select#transaction-category[hx-swap-oob] option"),
            2
        );
    }

    #[tokio::test]
    async fn rejected_category_shows_error_alert() {
        let api = StubFinanceApi {
            failures: Failures {
                create: true,
                ..Default::default()
            },
            ..populated_api()
        };
        let app = Arc::new(FinanceApp::new(api, PaginationConfig::default()));

        let response = create_category_endpoint(
            HxCurrentUrl(None),
            State(app),
            Form(new_category()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert!(element_text(&html, "[role=alert]").contains("Erro ao salvar categoria"));
    }
}
