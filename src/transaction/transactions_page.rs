//! Displays the filtered, paginated transaction list.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    FinanceApi, FinanceApp,
    category::CategoryType,
    endpoints,
    finance_app::PageChange,
    html::{CARD_STYLE, FORM_TEXT_INPUT_STYLE, empty_state},
    layout::{get_section_page, load_error_message},
    pagination::{create_pagination_indicators, pagination_view},
    transaction::{
        TransactionFilterForm,
        view::{MetaLine, transaction_item},
    },
    view_state::{LoadOutcome, Section, ViewState},
};

const TRANSACTIONS_CONTENT_ID: &str = "transactions-content";

/// Renders the transactions page with the current filters and page.
pub async fn get_transactions_page<A: FinanceApi>(
    State(app): State<Arc<FinanceApp<A>>>,
) -> Response {
    get_section_page(&app, Section::Transactions).await
}

/// The page requested by a pagination button.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    /// The page to show, absent when the filters changed.
    pub page: Option<u64>,
}

/// Re-renders the transaction list after a page or filter change.
///
/// A request with `page` moves to that page keeping the filters, any other
/// request replaces the filters and goes back to page one. Responds with no
/// content when the page does not exist or a newer request superseded this one.
pub async fn get_transactions_list<A: FinanceApi>(
    HxRequest(is_htmx): HxRequest,
    State(app): State<Arc<FinanceApp<A>>>,
    Query(page_query): Query<PageQuery>,
    Query(filter_form): Query<TransactionFilterForm>,
) -> Response {
    if !is_htmx {
        return Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response();
    }

    let result = match page_query.page {
        Some(page) => app.change_page(page).await,
        None => app
            .set_filters(filter_form.into())
            .await
            .map(PageChange::Loaded),
    };

    match result {
        Ok(PageChange::Loaded(LoadOutcome::Applied)) => match app.snapshot() {
            Ok(state) => transactions_view(&state).into_response(),
            Err(error) => error.into_response(),
        },
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_alert_response(load_error_message(Section::Transactions)),
    }
}

/// The filters, the current page of transactions and the pagination bar.
pub(crate) fn transactions_view(state: &ViewState) -> Markup {
    let indicators =
        create_pagination_indicators(state.cursor.current_page, state.cursor.total_pages);
    let target = format!("#{TRANSACTIONS_CONTENT_ID}");

    html! {
        div id=(TRANSACTIONS_CONTENT_ID)
        {
            (filters_form(state, &target))

            @if state.filters.is_active() {
                div class="flex justify-end mb-4"
                {
                    button
                        id="clear-filters"
                        type="button"
                        hx-get=(endpoints::TRANSACTIONS_LIST)
                        hx-target=(target)
                        hx-swap="outerHTML"
                        class="text-sm text-blue-600 hover:underline dark:text-blue-500"
                    {
                        i class="fas fa-times me-1" {}
                        "Limpar filtros"
                    }
                }
            }

            div id="transactions-list" class=(CARD_STYLE)
            {
                @if state.transactions.is_empty() {
                    (empty_state("fas fa-exchange-alt", "Nenhuma transação encontrada"))
                } @else {
                    @for transaction in &state.transactions {
                        (transaction_item(transaction, &state.categories, MetaLine::Account))
                    }
                }
            }

            (pagination_view(&indicators, endpoints::TRANSACTIONS_LIST, &target))
        }
    }
}

fn filters_form(state: &ViewState, target: &str) -> Markup {
    let filters = &state.filters;
    let type_choices = [
        ("", "Todos os Tipos", filters.transaction_type.is_none()),
        (
            CategoryType::Income.as_str(),
            "Receitas",
            filters.transaction_type == Some(CategoryType::Income),
        ),
        (
            CategoryType::Expense.as_str(),
            "Despesas",
            filters.transaction_type == Some(CategoryType::Expense),
        ),
    ];

    html! {
        form
            id="transaction-filters"
            hx-get=(endpoints::TRANSACTIONS_LIST)
            hx-trigger="change"
            hx-target=(target)
            hx-swap="outerHTML"
            class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-2 mb-4"
        {
            select name="account_id" aria-label="Conta" class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[filters.account_id.is_none()] { "Todas as Contas" }

                @for account in &state.accounts {
                    option value=(account.id) selected[filters.account_id == Some(account.id)]
                    {
                        (account.name)
                    }
                }
            }

            select name="category_id" aria-label="Categoria" class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[filters.category_id.is_none()] { "Todas as Categorias" }

                @for category in &state.categories {
                    option value=(category.id) selected[filters.category_id == Some(category.id)]
                    {
                        (category.name)
                    }
                }
            }

            select name="type" aria-label="Tipo" class=(FORM_TEXT_INPUT_STYLE)
            {
                @for (value, label, is_selected) in type_choices {
                    option value=(value) selected[is_selected] { (label) }
                }
            }

            input
                type="date"
                name="start_date"
                aria-label="Data inicial"
                value=[filters.start_date]
                class=(FORM_TEXT_INPUT_STYLE);

            input
                type="date"
                name="end_date"
                aria-label="Data final"
                value=[filters.end_date]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
