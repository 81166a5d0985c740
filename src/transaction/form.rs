//! The transaction form and the category options it reloads when the
//! transaction type changes.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    FinanceApi, FinanceApp,
    account::Account,
    category::{Category, CategoryType, categories_of_type},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, modal},
    layout::SECTION_CONTENT_ID,
    transaction::parse_transaction_type,
    view_state::ViewState,
};

/// The id of the dialog holding the transaction form.
pub(crate) const TRANSACTION_MODAL_ID: &str = "transaction-modal";

const ACCOUNT_SELECT_ID: &str = "transaction-account";
const CATEGORY_SELECT_ID: &str = "transaction-category";

/// The account select of the transaction form.
///
/// Set `oob` to send it as an out-of-band swap after the accounts change.
pub(crate) fn account_select(accounts: &[Account], oob: bool) -> Markup {
    html! {
        select
            id=(ACCOUNT_SELECT_ID)
            name="account_id"
            required
            class=(FORM_TEXT_INPUT_STYLE)
            hx-swap-oob=[oob.then_some("true")]
        {
            @for account in accounts {
                option value=(account.id) { (account.name) }
            }
        }
    }
}

/// The options for the category select.
pub(crate) fn category_options<'a>(categories: impl IntoIterator<Item = &'a Category>) -> Markup {
    html! {
        @for category in categories {
            option value=(category.id) { (category.name) }
        }
    }
}

/// The category select of the transaction form, listing expense categories
/// to match the form's default type.
///
/// Set `oob` to send it as an out-of-band swap after the form is reset or
/// the categories change.
pub(crate) fn category_select(categories: &[Category], oob: bool) -> Markup {
    html! {
        select
            id=(CATEGORY_SELECT_ID)
            name="category_id"
            required
            class=(FORM_TEXT_INPUT_STYLE)
            hx-swap-oob=[oob.then_some("true")]
        {
            (category_options(categories_of_type(categories, CategoryType::default())))
        }
    }
}

fn today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());

    now.date().to_string()
}

fn transaction_form(state: &ViewState) -> Markup {
    html! {
        form
            id="transaction-form"
            hx-post=(endpoints::TRANSACTION_FORM)
            hx-target={ "#" (SECTION_CONTENT_ID) }
            hx-swap="innerHTML"
            class="space-y-4"
        {
            div
            {
                label for="transaction-description" class=(FORM_LABEL_STYLE) { "Descrição" }
                input
                    id="transaction-description"
                    name="description"
                    type="text"
                    required
                    placeholder="Ex: Supermercado"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="grid grid-cols-2 gap-4"
            {
                div
                {
                    label for="transaction-amount" class=(FORM_LABEL_STYLE) { "Valor" }
                    input
                        id="transaction-amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="transaction-type" class=(FORM_LABEL_STYLE) { "Tipo" }
                    select
                        id="transaction-type"
                        name="transaction_type"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                        hx-get=(endpoints::TRANSACTION_CATEGORY_OPTIONS)
                        hx-trigger="change"
                        hx-target={ "#" (CATEGORY_SELECT_ID) }
                        hx-swap="innerHTML"
                    {
                        option value=(CategoryType::Expense.as_str()) { "Despesa" }
                        option value=(CategoryType::Income.as_str()) { "Receita" }
                    }
                }
            }

            div
            {
                label for="transaction-date" class=(FORM_LABEL_STYLE) { "Data" }
                input
                    id="transaction-date"
                    name="transaction_date"
                    type="date"
                    value=(today())
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for=(ACCOUNT_SELECT_ID) class=(FORM_LABEL_STYLE) { "Conta" }
                (account_select(&state.accounts, false))
            }

            div
            {
                label for=(CATEGORY_SELECT_ID) class=(FORM_LABEL_STYLE) { "Categoria" }
                (category_select(&state.categories, false))
            }

            div
            {
                label for="transaction-notes" class=(FORM_LABEL_STYLE) { "Observações" }
                textarea
                    id="transaction-notes"
                    name="notes"
                    rows="2"
                    class=(FORM_TEXT_INPUT_STYLE)
                {}
            }

            button type="submit" class={ "w-full " (BUTTON_PRIMARY_STYLE) } { "Salvar" }
        }
    }
}

/// The dialog for creating a transaction.
pub(crate) fn transaction_modal(state: &ViewState) -> Markup {
    modal(TRANSACTION_MODAL_ID, "Nova Transação", &transaction_form(state))
}

/// The query sent by the transaction type select.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryOptionsQuery {
    /// `income` or `expense`, anything else lists expense categories.
    pub transaction_type: String,
}

/// Renders the loaded categories of the requested type as select options.
pub async fn get_category_options<A: FinanceApi>(
    State(app): State<Arc<FinanceApp<A>>>,
    Query(query): Query<CategoryOptionsQuery>,
) -> Response {
    let transaction_type = parse_transaction_type(&query.transaction_type).unwrap_or_default();

    match app.categories_for_type(transaction_type) {
        Ok(categories) => category_options(&categories).into_response(),
        Err(error) => error.into_alert_response("Erro ao carregar categorias"),
    }
}
