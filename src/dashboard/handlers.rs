//! Dashboard route handler and view rendering.

use std::sync::Arc;

use axum::{extract::State, response::Response};
use maud::{Markup, html};

use crate::{
    FinanceApi, FinanceApp,
    dashboard::{cards::summary_cards_view, charts::expenses_chart_view},
    html::{CARD_STYLE, empty_state},
    layout::get_section_page,
    transaction::{MetaLine, transaction_item},
    view_state::{Section, ViewState},
};

/// Display the dashboard, refreshing the summary, the expenses chart and the
/// recent transactions first.
pub async fn get_dashboard_page<A: FinanceApi>(State(app): State<Arc<FinanceApp<A>>>) -> Response {
    get_section_page(&app, Section::Dashboard).await
}

/// The dashboard widgets.
pub(crate) fn dashboard_view(state: &ViewState) -> Markup {
    let dashboard = &state.dashboard;

    html! {
        div id="dashboard"
        {
            (summary_cards_view(dashboard.summary.as_ref()))

            div class="grid grid-cols-1 lg:grid-cols-2 gap-4"
            {
                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-semibold mb-4" { "Despesas por Categoria" }
                    (expenses_chart_view(&dashboard.expenses))
                }

                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-semibold mb-4" { "Transações Recentes" }

                    div id="recent-transactions-list"
                    {
                        @if dashboard.recent_transactions.is_empty() {
                            (empty_state("fas fa-receipt", "Nenhuma transação recente"))
                        } @else {
                            @for transaction in &dashboard.recent_transactions {
                                (transaction_item(transaction, &state.categories, MetaLine::Date))
                            }
                        }
                    }
                }
            }
        }
    }
}
