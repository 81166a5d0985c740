//! This modules defines the common functionality for paging data.

use maud::{Markup, html};

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The number of transactions to request per page.
    pub page_size: u64,
    /// The number of transactions shown in the dashboard's recent list.
    pub recent_transactions: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            recent_transactions: 5,
        }
    }
}

/// One control in the pagination bar.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    Page(u64),
    CurrPage(u64),
    Ellipsis,
    /// Links to the next page, `None` on the last page.
    NextButton(Option<u64>),
    /// Links to the previous page, `None` on the first page.
    BackButton(Option<u64>),
}

/// Lay out the pagination bar for `curr_page` out of `page_count`.
///
/// The first and last pages and the pages either side of the current page
/// are shown. A page two away from the current page that is not otherwise
/// shown becomes an ellipsis. There is nothing to show for a single page.
pub fn create_pagination_indicators(curr_page: u64, page_count: u64) -> Vec<PaginationIndicator> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut indicators = vec![PaginationIndicator::BackButton(
        (curr_page > 1).then(|| curr_page - 1),
    )];

    // Only the first, the last and pages near the current one can show up.
    let first_near = curr_page.saturating_sub(2).max(1);
    let last_near = curr_page.saturating_add(2).min(page_count);
    let window = first_near..=last_near;
    let mut pages: Vec<u64> = [1, page_count].into_iter().chain(window).collect();
    pages.sort_unstable();
    pages.dedup();

    for page in pages {
        if page == curr_page {
            indicators.push(PaginationIndicator::CurrPage(page));
        } else if page == 1 || page == page_count || page.abs_diff(curr_page) == 1 {
            indicators.push(PaginationIndicator::Page(page));
        } else if page.abs_diff(curr_page) == 2 {
            indicators.push(PaginationIndicator::Ellipsis);
        }
    }

    indicators.push(PaginationIndicator::NextButton(
        (curr_page < page_count).then(|| curr_page + 1),
    ));

    indicators
}

const PAGE_BUTTON_STYLE: &str = "px-3 py-1 rounded border border-gray-300 \
    dark:border-gray-600 text-sm hover:enabled:bg-gray-100 \
    hover:enabled:dark:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";

const CURRENT_PAGE_STYLE: &str = "px-3 py-1 rounded border text-sm font-bold \
    text-white bg-blue-600 border-blue-600";

/// Render the pagination bar. Each button fetches its page from `endpoint`
/// and swaps the result into `target`.
pub fn pagination_view(indicators: &[PaginationIndicator], endpoint: &str, target: &str) -> Markup {
    if indicators.is_empty() {
        return html! {};
    }

    html! {
        nav class="pagination flex justify-center my-4" aria-label="Paginação"
        {
            ul class="pagination flex items-center gap-1"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::BackButton(page) => {
                                (page_button(*page, endpoint, target, html! { i class="fas fa-chevron-left" {} }, "Página anterior"))
                            }
                            PaginationIndicator::NextButton(page) => {
                                (page_button(*page, endpoint, target, html! { i class="fas fa-chevron-right" {} }, "Próxima página"))
                            }
                            PaginationIndicator::Page(page) => {
                                (page_button(Some(*page), endpoint, target, html! { (page) }, ""))
                            }
                            PaginationIndicator::CurrPage(page) => {
                                button
                                    type="button"
                                    aria-current="page"
                                    class=(CURRENT_PAGE_STYLE)
                                    disabled
                                { (page) }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class="px-2 text-gray-500" { "..." }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn page_button(
    page: Option<u64>,
    endpoint: &str,
    target: &str,
    label: Markup,
    aria_label: &str,
) -> Markup {
    let aria_label = (!aria_label.is_empty()).then_some(aria_label);

    match page {
        Some(page) => html! {
            button
                type="button"
                class=(PAGE_BUTTON_STYLE)
                aria-label=[aria_label]
                hx-get={ (endpoint) "?page=" (page) }
                hx-target=(target)
                hx-swap="outerHTML"
            { (label) }
        },
        None => html! {
            button type="button" class=(PAGE_BUTTON_STYLE) aria-label=[aria_label] disabled
            { (label) }
        },
    }
}
