//! The transaction row shared by the transaction list and the dashboard.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    category::{Category, CategoryType, category_color, category_icon},
    html::{EXPENSE_STYLE, INCOME_STYLE, format_currency, format_date},
    transaction::Transaction,
};

/// The max number of graphemes of a description to display before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 48;

/// What the second line of a transaction row shows next to the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetaLine {
    /// `category • account`, with the date under the amount.
    Account,
    /// `category • dd/mm/yyyy`.
    Date,
}

/// The amount with a `+` for income and a `-` for expenses.
pub(crate) fn signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.transaction_type {
        CategoryType::Income => '+',
        CategoryType::Expense => '-',
    };

    format!("{sign}{}", format_currency(transaction.amount.abs()))
}

fn truncate_description(description: &str) -> String {
    let mut graphemes = description.graphemes(true);
    let truncated: String = graphemes
        .by_ref()
        .take(MAX_DESCRIPTION_GRAPHEMES)
        .collect();

    if graphemes.next().is_some() {
        format!("{truncated}…")
    } else {
        truncated
    }
}

/// One transaction with its category icon, description, meta line and amount.
pub(crate) fn transaction_item(
    transaction: &Transaction,
    categories: &[Category],
    meta_line: MetaLine,
) -> Markup {
    let category_name = transaction
        .category_name
        .as_deref()
        .unwrap_or("Sem categoria");
    let meta = match meta_line {
        MetaLine::Account => format!(
            "{category_name} • {}",
            transaction.account_name.as_deref().unwrap_or("Sem conta")
        ),
        MetaLine::Date => format!(
            "{category_name} • {}",
            format_date(transaction.transaction_date)
        ),
    };
    let amount_style = match transaction.transaction_type {
        CategoryType::Income => INCOME_STYLE,
        CategoryType::Expense => EXPENSE_STYLE,
    };

    html! {
        div
            data-transaction-item
            class="flex items-center justify-between gap-4 py-3 border-b border-gray-100 dark:border-gray-700 last:border-0"
        {
            div class="flex items-center gap-3 min-w-0"
            {
                div
                    class="flex items-center justify-center shrink-0 w-10 h-10 rounded-full text-white"
                    style={ "background-color: " (category_color(categories, transaction.category_id)) }
                    data-transaction-icon
                {
                    i class=(category_icon(categories, transaction.category_id)) {}
                }

                div class="min-w-0"
                {
                    h4 class="font-medium truncate" title=(transaction.description)
                    {
                        (truncate_description(&transaction.description))
                    }

                    p class="text-sm text-gray-500 dark:text-gray-400" data-transaction-meta
                    {
                        (meta)
                    }
                }
            }

            div class="text-right shrink-0"
            {
                p
                    class={ "font-semibold " (amount_style) }
                    data-transaction-amount=(transaction.transaction_type.as_str())
                {
                    (signed_amount(transaction))
                }

                @if meta_line == MetaLine::Account {
                    p class="text-xs text-gray-500 dark:text-gray-400"
                    {
                        (format_date(transaction.transaction_date))
                    }
                }
            }
        }
    }
}
