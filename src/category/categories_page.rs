//! Displays the categories of one type at a time, with a tab per type.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    FinanceApi, FinanceApp,
    category::{Category, CategoryType},
    endpoints,
    html::empty_state,
    layout::{get_section_page, load_error_message},
    transaction::parse_transaction_type,
    view_state::{CategoryListing, Section},
};

const CATEGORY_LISTING_ID: &str = "category-listing";

/// The tabs in display order.
const TABS: [CategoryType; 2] = [CategoryType::Expense, CategoryType::Income];

/// Renders the categories page, opened on the expense tab.
pub async fn get_categories_page<A: FinanceApi>(
    State(app): State<Arc<FinanceApp<A>>>,
) -> Response {
    get_section_page(&app, Section::Categories).await
}

/// The query sent by the category tabs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryTabQuery {
    /// `income` or `expense`, anything else opens the expense tab.
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Fetches the categories for a tab and renders the tabs and category grid.
pub async fn get_category_list<A: FinanceApi>(
    State(app): State<Arc<FinanceApp<A>>>,
    Query(query): Query<CategoryTabQuery>,
) -> Response {
    let category_type = parse_transaction_type(&query.category_type).unwrap_or_default();

    if let Err(error) = app.load_category_tab(category_type).await {
        return error.into_alert_response(load_error_message(Section::Categories));
    }

    match app.snapshot() {
        Ok(state) => category_listing_view(&state.category_listing).into_response(),
        Err(error) => error.into_response(),
    }
}

/// The tabs and the categories of the active tab.
pub(crate) fn category_listing_view(listing: &CategoryListing) -> Markup {
    html! {
        div id=(CATEGORY_LISTING_ID)
        {
            div role="tablist" class="flex gap-2 mb-4"
            {
                @for category_type in TABS {
                    (tab(category_type, category_type == listing.category_type))
                }
            }

            (categories_grid(&listing.categories))
        }
    }
}

fn tab(category_type: CategoryType, is_active: bool) -> Markup {
    let style = if is_active {
        "px-4 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium bg-white text-gray-700 \
        border border-gray-200 hover:bg-gray-100 dark:bg-gray-800 \
        dark:text-gray-300 dark:border-gray-700"
    };

    html! {
        button
            type="button"
            role="tab"
            class=(style)
            data-type=(category_type.as_str())
            aria-selected=(is_active)
            hx-get={ (endpoints::CATEGORIES_LIST) "?type=" (category_type.as_str()) }
            hx-target={ "#" (CATEGORY_LISTING_ID) }
            hx-swap="outerHTML"
        {
            (category_type.label())
        }
    }
}

fn categories_grid(categories: &[Category]) -> Markup {
    if categories.is_empty() {
        return html! {
            div id="categories-grid"
            {
                (empty_state("fas fa-tags", "Nenhuma categoria encontrada"))
            }
        };
    }

    html! {
        div id="categories-grid" class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4"
        {
            @for category in categories {
                div
                    data-category-card
                    class="flex flex-col items-center gap-2 p-4 bg-white rounded-lg shadow dark:bg-gray-800"
                {
                    div
                        class="flex items-center justify-center w-12 h-12 rounded-full text-white"
                        style={ "background-color: " (category.color) }
                    {
                        i class=(category.icon) {}
                    }

                    p class="text-sm font-medium" { (category.name) }
                }
            }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use scraper::{Html, Selector};

    use crate::{
        category::{CategoryType, categories_of_type, category_listing_view},
        test_utils::{assert_valid_html, count_elements, element_text, sample_categories},
        view_state::CategoryListing,
    };

    #[test]
    fn active_tab_is_selected() {
        let listing = CategoryListing {
            category_type: CategoryType::Income,
            categories: Vec::new(),
        };

        let markup = category_listing_view(&listing).into_string();
        let html = Html::parse_fragment(&markup);
        assert_valid_html(&html);

        let tabs: Vec<_> = html
            .select(&Selector::parse("[role=tab]").unwrap())
            .map(|tab| {
                (
                    tab.value().attr("data-type").unwrap().to_owned(),
                    tab.value().attr("aria-selected").unwrap().to_owned(),
                    tab.value().attr("hx-get").unwrap().to_owned(),
                )
            })
            .collect();

        assert_eq!(
            tabs,
            vec![
                (
                    "expense".to_owned(),
                    "false".to_owned(),
                    "/categories/list?type=expense".to_owned()
                ),
                (
                    "income".to_owned(),
                    "true".to_owned(),
                    "/categories/list?type=income".to_owned()
                ),
            ]
        );
    }

    #[test]
    fn renders_category_cards_with_colour_and_icon() {
        let categories: Vec<_> = categories_of_type(&sample_categories(), CategoryType::Expense)
            .cloned()
            .collect();
        let listing = CategoryListing {
            category_type: CategoryType::Expense,
            categories,
        };

        let markup = category_listing_view(&listing).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(count_elements(&html, "[data-category-card]"), 2);
        assert_eq!(element_text(&html, "[data-category-card] p"), "Mercado");

        let icon_background = html
            .select(&Selector::parse("[data-category-card] div[style]").unwrap())
            .next()
            .unwrap();
        assert_eq!(
            icon_background.value().attr("style"),
            Some("background-color: #dc3545")
        );
        assert_eq!(
            count_elements(&html, "[data-category-card] i.fa-shopping-cart"),
            1
        );
    }

    #[test]
    fn empty_tab_shows_placeholder() {
        let markup = category_listing_view(&CategoryListing::default()).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(
            element_text(&html, ".empty-state p"),
            "Nenhuma categoria encontrada"
        );
    }
}
