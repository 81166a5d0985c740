//! Displays accounts and their balances.

use std::sync::Arc;

use axum::{extract::State, response::Response};
use maud::{Markup, html};

use crate::{
    FinanceApi, FinanceApp,
    account::Account,
    html::{CARD_STYLE, EXPENSE_STYLE, INCOME_STYLE, empty_state, format_currency},
    layout::get_section_page,
    view_state::Section,
};

/// Renders the accounts page.
pub async fn get_accounts_page<A: FinanceApi>(State(app): State<Arc<FinanceApp<A>>>) -> Response {
    get_section_page(&app, Section::Accounts).await
}

/// The account cards, or a placeholder when there are none.
pub(crate) fn accounts_view(accounts: &[Account]) -> Markup {
    if accounts.is_empty() {
        return html! {
            div id="accounts-grid"
            {
                (empty_state("fas fa-university", "Nenhuma conta encontrada"))
            }
        };
    }

    html! {
        div id="accounts-grid" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4"
        {
            @for account in accounts {
                (account_card(account))
            }
        }
    }
}

fn account_card(account: &Account) -> Markup {
    let balance_style = if account.current_balance >= 0.0 {
        INCOME_STYLE
    } else {
        EXPENSE_STYLE
    };

    html! {
        div data-account-card class=(CARD_STYLE)
        {
            p class="text-sm text-gray-500 dark:text-gray-400" data-account-type
            {
                (account.account_type.label())
            }

            h3 class="text-lg font-semibold" data-account-name { (account.name) }

            p class={ "mt-2 text-2xl font-bold " (balance_style) } data-account-balance
            {
                (format_currency(account.current_balance))
            }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        account::{AccountType, accounts_view},
        test_utils::{assert_valid_html, count_elements, element_text, sample_accounts},
    };

    #[test]
    fn renders_one_card_per_account() {
        let markup = accounts_view(&sample_accounts()).into_string();
        let html = Html::parse_fragment(&markup);
        assert_valid_html(&html);

        let cards = must_get_cards(&html, 2);

        assert_card(cards[0], "Conta Corrente", "Nubank", "R$ 1.234,50");
        assert_card(cards[1], "Dinheiro", "Carteira", "-R$ 20,00");
    }

    #[test]
    fn negative_balance_is_red() {
        let markup = accounts_view(&sample_accounts()).into_string();
        let html = Html::parse_fragment(&markup);

        let balances: Vec<_> = html
            .select(&Selector::parse("[data-account-balance]").unwrap())
            .map(|balance| balance.value().attr("class").unwrap().to_owned())
            .collect();

        assert!(balances[0].contains("text-green-600"));
        assert!(balances[1].contains("text-red-600"));
    }

    #[test]
    fn unknown_account_type_is_shown_verbatim() {
        let mut accounts = sample_accounts();
        accounts[0].account_type = AccountType::Other("investment".to_owned());

        let markup = accounts_view(&accounts).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(element_text(&html, "[data-account-type]"), "investment");
    }

    #[test]
    fn no_accounts_shows_placeholder() {
        let markup = accounts_view(&[]).into_string();
        let html = Html::parse_fragment(&markup);
        assert_valid_html(&html);

        assert_eq!(count_elements(&html, "[data-account-card]"), 0);
        assert_eq!(element_text(&html, ".empty-state p"), "Nenhuma conta encontrada");
    }

    #[track_caller]
    fn must_get_cards(html: &Html, want_count: usize) -> Vec<ElementRef<'_>> {
        let cards: Vec<_> = html
            .select(&Selector::parse("[data-account-card]").unwrap())
            .collect();

        assert_eq!(
            cards.len(),
            want_count,
            "want {want_count} account cards, got {}",
            cards.len()
        );

        cards
    }

    #[track_caller]
    fn assert_card(card: ElementRef<'_>, want_type: &str, want_name: &str, want_balance: &str) {
        let text_of = |selector: &str| {
            card.select(&Selector::parse(selector).unwrap())
                .next()
                .unwrap_or_else(|| panic!("card has no {selector}"))
                .text()
                .collect::<String>()
                .trim()
                .to_owned()
        };

        assert_eq!(text_of("[data-account-type]"), want_type);
        assert_eq!(text_of("[data-account-name]"), want_name);
        assert_eq!(text_of("[data-account-balance]"), want_balance);
    }
}
