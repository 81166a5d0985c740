//! Displays expenses by category for a date range.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    FinanceApi, FinanceApp, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, empty_state,
        format_currency,
    },
    layout::get_section_page,
    reports::{CategoryExpense, ReportRange, percentage_of},
    transaction::parse_date,
    view_state::{ReportSnapshot, Section},
};

/// The date range form as submitted by the browser.
///
/// Both fields are absent when the page is opened from the menu and present,
/// possibly blank, when the form was submitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportRangeForm {
    /// The first day of the range as `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// The last day of the range as `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl ReportRangeForm {
    /// The submitted range, or `None` if the form was not submitted.
    fn into_range(self) -> Option<ReportRange> {
        if self.start_date.is_none() && self.end_date.is_none() {
            return None;
        }

        Some(ReportRange {
            start_date: self.start_date.as_deref().and_then(parse_date),
            end_date: self.end_date.as_deref().and_then(parse_date),
        })
    }
}

/// Renders the reports page for the submitted range, or the last range used.
pub async fn get_reports_page<A: FinanceApi>(
    State(app): State<Arc<FinanceApp<A>>>,
    Query(form): Query<ReportRangeForm>,
) -> Response {
    if let Some(range) = form.into_range() {
        if let Err(error) = app.set_report_range(range) {
            return error.into_response();
        }
    }

    get_section_page(&app, Section::Reports).await
}

fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%").replace('.', ",")
}

fn range_form(range: &ReportRange) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::REPORTS_VIEW)
            class="flex flex-wrap items-end gap-4 mb-4"
        {
            div
            {
                label for="report-start-date" class=(FORM_LABEL_STYLE) { "Data inicial" }
                input
                    id="report-start-date"
                    name="start_date"
                    type="date"
                    value=[range.start_date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="report-end-date" class=(FORM_LABEL_STYLE) { "Data final" }
                input
                    id="report-end-date"
                    name="end_date"
                    type="date"
                    value=[range.end_date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filtrar" }
        }
    }
}

fn expenses_table(expenses: &[CategoryExpense]) -> Markup {
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();

    html! {
        table class="w-full text-sm text-left"
        {
            thead class="text-xs uppercase text-gray-500 dark:text-gray-400"
            {
                tr
                {
                    th scope="col" class="py-2" { "Categoria" }
                    th scope="col" class="py-2 text-right" { "Valor" }
                    th scope="col" class="py-2 text-right" { "%" }
                }
            }

            tbody
            {
                @for expense in expenses {
                    tr data-expense-row class="border-t border-gray-100 dark:border-gray-700"
                    {
                        td class="py-2"
                        {
                            span
                                class="inline-block w-3 h-3 me-2 rounded-full"
                                style={ "background-color: " (expense.color) }
                            {}
                            (expense.category)
                        }
                        td class="py-2 text-right" { (format_currency(expense.amount)) }
                        td class="py-2 text-right"
                        {
                            (format_percentage(percentage_of(expense.amount, total)))
                        }
                    }
                }
            }

            tfoot
            {
                tr class="border-t border-gray-200 dark:border-gray-600 font-semibold"
                {
                    th scope="row" class="py-2" { "Total" }
                    td id="report-total" class="py-2 text-right" { (format_currency(total)) }
                    td class="py-2 text-right" { (format_percentage(100.0)) }
                }
            }
        }
    }
}

/// The range form and the expenses table.
pub(crate) fn reports_view(report: &ReportSnapshot) -> Markup {
    html! {
        div id="reports"
        {
            (range_form(&report.range))

            section class=(CARD_STYLE)
            {
                h2 class="text-lg font-semibold mb-4" { "Despesas por Categoria" }

                @if report.expenses.is_empty() {
                    (empty_state("fas fa-chart-bar", "Nenhuma despesa no período"))
                } @else {
                    (expenses_table(&report.expenses))
                }
            }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        reports::{ReportRange, reports_view},
        test_utils::{assert_valid_html, element_text, sample_expenses},
        view_state::ReportSnapshot,
    };

    #[test]
    fn lists_expenses_with_share_of_total() {
        let report = ReportSnapshot {
            range: ReportRange::default(),
            expenses: sample_expenses(),
        };

        let markup = reports_view(&report).into_string();
        let html = Html::parse_fragment(&markup);
        assert_valid_html(&html);

        let rows: Vec<Vec<String>> = html
            .select(&Selector::parse("[data-expense-row]").unwrap())
            .map(|row| {
                row.select(&Selector::parse("td").unwrap())
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["Mercado", "R$ 750,00", "75,0%"],
                vec!["Transporte", "R$ 250,00", "25,0%"],
            ]
        );
        assert_eq!(element_text(&html, "#report-total"), "R$ 1.000,00");
    }

    #[test]
    fn range_form_keeps_selected_dates() {
        let report = ReportSnapshot {
            range: ReportRange {
                start_date: Some(date!(2024 - 01 - 01)),
                end_date: None,
            },
            expenses: Vec::new(),
        };

        let markup = reports_view(&report).into_string();
        let html = Html::parse_fragment(&markup);

        let start = html
            .select(&Selector::parse("input[name=start_date]").unwrap())
            .next()
            .unwrap();
        let end = html
            .select(&Selector::parse("input[name=end_date]").unwrap())
            .next()
            .unwrap();
        assert_eq!(start.value().attr("value"), Some("2024-01-01"));
        assert_eq!(end.value().attr("value"), None);
        assert_eq!(
            element_text(&html, ".empty-state p"),
            "Nenhuma despesa no período"
        );
    }
}
