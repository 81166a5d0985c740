//! The summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{
    html::{CARD_STYLE, EXPENSE_STYLE, INCOME_STYLE, format_currency},
    reports::Summary,
};

struct SummaryCard {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    amount: f64,
    style: &'static str,
}

fn net_style(amount: f64) -> &'static str {
    if amount < 0.0 { EXPENSE_STYLE } else { INCOME_STYLE }
}

/// The four summary cards. Before the first successful fetch every amount
/// reads zero.
pub(super) fn summary_cards_view(summary: Option<&Summary>) -> Markup {
    let amount = |get: fn(&Summary) -> f64| summary.map(get).unwrap_or_default();

    let cards = [
        SummaryCard {
            id: "total-balance",
            title: "Saldo Total",
            icon: "fas fa-wallet",
            amount: amount(|summary| summary.total_balance),
            style: "",
        },
        SummaryCard {
            id: "monthly-income",
            title: "Receitas do Mês",
            icon: "fas fa-arrow-up",
            amount: amount(|summary| summary.monthly_income),
            style: INCOME_STYLE,
        },
        SummaryCard {
            id: "monthly-expenses",
            title: "Despesas do Mês",
            icon: "fas fa-arrow-down",
            amount: amount(|summary| summary.monthly_expenses),
            style: EXPENSE_STYLE,
        },
        SummaryCard {
            id: "monthly-net",
            title: "Saldo do Mês",
            icon: "fas fa-balance-scale",
            amount: amount(|summary| summary.monthly_net),
            style: net_style(amount(|summary| summary.monthly_net)),
        },
    ];

    html! {
        section id="summary-cards" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-4"
        {
            @for card in cards {
                div class=(CARD_STYLE)
                {
                    div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400"
                    {
                        span { (card.title) }
                        i class=(card.icon) {}
                    }

                    p id=(card.id) class={ "mt-2 text-2xl font-bold " (card.style) }
                    {
                        (format_currency(card.amount))
                    }
                }
            }
        }
    }
}
