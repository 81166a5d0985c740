//! The page shell shared by every section.
//!
//! A section page is the navigation bar, a header with the section's action
//! button, the section content and the create modals. Form handlers re-render
//! only the section content, which sits in [SECTION_CONTENT_ID].

use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    FinanceApi, FinanceApp,
    account::{ACCOUNT_MODAL_ID, account_modal, accounts_view},
    alert::Alert,
    category::{CATEGORY_MODAL_ID, category_listing_view, category_modal},
    dashboard::dashboard_view,
    html::{
        ECHARTS_URL, HeadElement, PAGE_CONTAINER_STYLE, base_with_alert, open_modal_button,
        page_header,
    },
    navigation::NavBar,
    reports::reports_view,
    transaction::{TRANSACTION_MODAL_ID, transaction_modal, transactions_view},
    view_state::{Section, ViewState},
};

/// The id of the element holding the active section's content.
pub const SECTION_CONTENT_ID: &str = "section-content";

/// The alert shown when loading `section` fails.
pub(crate) fn load_error_message(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "Erro ao carregar resumo financeiro",
        Section::Transactions => "Erro ao carregar transações",
        Section::Accounts => "Erro ao carregar contas",
        Section::Categories => "Erro ao carregar categorias",
        Section::Reports => "Erro ao carregar relatório",
    }
}

fn header_action(section: Section) -> Option<Markup> {
    match section {
        Section::Dashboard | Section::Transactions => {
            Some(open_modal_button(TRANSACTION_MODAL_ID, "Nova Transação"))
        }
        Section::Accounts => Some(open_modal_button(ACCOUNT_MODAL_ID, "Nova Conta")),
        Section::Categories => Some(open_modal_button(CATEGORY_MODAL_ID, "Nova Categoria")),
        Section::Reports => None,
    }
}

/// The content of `section`, without the page around it.
pub(crate) fn section_content(section: Section, state: &ViewState) -> Markup {
    match section {
        Section::Dashboard => dashboard_view(state),
        Section::Transactions => transactions_view(state),
        Section::Accounts => accounts_view(&state.accounts),
        Section::Categories => category_listing_view(&state.category_listing),
        Section::Reports => reports_view(&state.report),
    }
}

/// The full page for the active section with an optional alert already shown.
pub(crate) fn section_page(state: &ViewState, alert: Option<Alert<'_>>) -> Markup {
    let section = state.section;
    let nav_bar = NavBar::new(section).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            (page_header(section.title(), header_action(section)))

            div id=(SECTION_CONTENT_ID)
            {
                (section_content(section, state))
            }
        }

        (transaction_modal(state))
        (account_modal())
        (category_modal())
    };

    base_with_alert(
        section.title(),
        &[HeadElement::ScriptLink(ECHARTS_URL.to_owned())],
        &content,
        alert,
    )
}

/// Activate `section`, load its data and render its page.
///
/// A failed load still renders the page from the data already in the
/// view-state, with an error alert on top.
pub(crate) async fn get_section_page<A: FinanceApi>(
    app: &FinanceApp<A>,
    section: Section,
) -> Response {
    let alert = match app.show_section(section).await {
        Ok(()) => None,
        Err(error) => Some(error.into_page_alert(load_error_message(section))),
    };

    match app.snapshot() {
        Ok(state) => section_page(&state, alert).into_response(),
        Err(error) => error.into_response(),
    }
}

/// The response to a successful form submission: the re-rendered section
/// content, a success alert and any `extra` out-of-band swaps.
///
/// The content is for the section at `current_url`, the page the form was
/// submitted from, falling back to the active section.
pub(crate) fn form_success_response<A: FinanceApi>(
    app: &FinanceApp<A>,
    current_url: Option<&Uri>,
    message: &str,
    extra: impl FnOnce(&ViewState) -> Markup,
) -> Response {
    let state = match app.snapshot() {
        Ok(state) => state,
        Err(error) => return error.into_response(),
    };

    let section = current_url
        .and_then(|url| Section::from_path(url.path()))
        .unwrap_or(state.section);

    html! {
        (section_content(section, &state))
        (Alert::success(message).into_oob_html())
        (extra(&state))
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::{
        FinanceApp,
        layout::{SECTION_CONTENT_ID, get_section_page},
        pagination::PaginationConfig,
        test_utils::{
            Failures, StubFinanceApi, assert_content_type, assert_status_ok, assert_valid_html,
            count_elements, element_text, parse_html_document, populated_api,
        },
        view_state::Section,
    };

    #[tokio::test]
    async fn renders_every_section_with_shell() {
        let app = Arc::new(FinanceApp::new(populated_api(), PaginationConfig::default()));

        for section in Section::ALL {
            let response = get_section_page(&app, section).await;

            assert_status_ok(&response);
            assert_content_type(&response, "text/html; charset=utf-8");
            let html = parse_html_document(response).await;
            assert_valid_html(&html);
            assert_eq!(element_text(&html, "#page-title"), section.title());
            assert_eq!(count_elements(&html, &format!("#{SECTION_CONTENT_ID}")), 1);
            assert_eq!(count_elements(&html, "dialog"), 3);
            assert_eq!(count_elements(&html, "[role=alert]"), 0);
        }
    }

    #[tokio::test]
    async fn failed_load_renders_page_with_alert() {
        let api = StubFinanceApi {
            failures: Failures {
                accounts: true,
                ..Default::default()
            },
            ..populated_api()
        };
        let app = FinanceApp::new(api, PaginationConfig::default());

        let response = get_section_page(&app, Section::Accounts).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert!(element_text(&html, "[role=alert]").contains("Erro ao carregar contas"));
    }
}
