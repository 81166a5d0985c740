//! The expenses by category chart.
//!
//! The chart is an ECharts pie whose options are generated with charming and
//! initialised by an inline script, so it is rebuilt whenever the dashboard
//! content is swapped in.

use charming::{
    Chart,
    component::Legend,
    element::{Color, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::reports::CategoryExpense;

/// The id of the chart container.
pub(super) const EXPENSES_CHART_ID: &str = "expenses-chart";

pub(super) fn expenses_chart(expenses: &[CategoryExpense]) -> Chart {
    let colors: Vec<Color> = expenses
        .iter()
        .map(|expense| Color::from(expense.color.as_str()))
        .collect();
    let data: Vec<(f64, &str)> = expenses
        .iter()
        .map(|expense| (expense.amount, expense.category.as_str()))
        .collect();

    Chart::new()
        .color(colors)
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Despesas")
                .radius(vec!["45%", "70%"])
                .data(data),
        )
}

/// Chart options as a JavaScript literal that is safe inside a `<script>`.
///
/// Category names are user input, a `<` in them could close the script tag.
fn script_safe_options(chart: &Chart) -> String {
    chart.to_string().replace('<', "\\u003c")
}

/// The script that replaces any chart already attached to the container.
///
/// The resize listener is registered once per page and resizes whichever
/// chart is attached at the time.
fn chart_script(options: &str) -> PreEscaped<String> {
    PreEscaped(format!(
        r#"(function() {{
            const chartDom = document.getElementById("{EXPENSES_CHART_ID}");
            if (!chartDom || typeof echarts === "undefined") {{
                return;
            }}

            const existing = echarts.getInstanceByDom(chartDom);
            if (existing) {{
                existing.dispose();
            }}

            const chart = echarts.init(chartDom);
            chart.setOption({options});

            if (!window.resizeExpensesChart) {{
                window.resizeExpensesChart = () => {{
                    const dom = document.getElementById("{EXPENSES_CHART_ID}");
                    const current = dom && echarts.getInstanceByDom(dom);
                    if (current) {{
                        current.resize();
                    }}
                }};
                window.addEventListener('resize', window.resizeExpensesChart);
            }}
        }})();"#
    ))
}

/// The chart container and its initialisation script, or a hidden container
/// when there is nothing to plot.
pub(super) fn expenses_chart_view(expenses: &[CategoryExpense]) -> Markup {
    if expenses.is_empty() {
        return html! {
            div id=(EXPENSES_CHART_ID) class="min-h-[300px]" hidden {}
        };
    }

    let options = script_safe_options(&expenses_chart(expenses));

    html! {
        div id=(EXPENSES_CHART_ID) class="min-h-[300px]" {}
        script { (chart_script(&options)) }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        reports::CategoryExpense,
        test_utils::{count_elements, sample_expenses},
    };

    use super::{EXPENSES_CHART_ID, expenses_chart, expenses_chart_view};

    #[test]
    fn chart_uses_category_names_and_colours() {
        let options = expenses_chart(&sample_expenses()).to_string();

        assert!(options.contains("\"Mercado\""));
        assert!(options.contains("\"Transporte\""));
        assert!(options.contains("#dc3545"));
        assert!(options.contains("#007bff"));
        assert!(options.contains("\"pie\""));
    }

    #[test]
    fn script_disposes_previous_chart() {
        let markup = expenses_chart_view(&sample_expenses()).into_string();
        let html = Html::parse_fragment(&markup);

        let script = html
            .select(&Selector::parse("script").unwrap())
            .next()
            .expect("No chart script found")
            .inner_html();

        let dispose = script.find("existing.dispose()").unwrap();
        let init = script.find("echarts.init(chartDom)").unwrap();
        assert!(dispose < init, "the old chart must be disposed before init");
    }

    #[test]
    fn no_expenses_hides_chart() {
        let markup = expenses_chart_view(&[]).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(
            count_elements(&html, &format!("#{EXPENSES_CHART_ID}[hidden]")),
            1
        );
        assert_eq!(count_elements(&html, "script"), 0);
    }

    #[test]
    fn category_name_cannot_close_script() {
        let expenses = vec![CategoryExpense {
            category: "</script><img id=injected src=x>".to_owned(),
            amount: 10.0,
            color: "#dc3545".to_owned(),
        }];

        let markup = expenses_chart_view(&expenses).into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(count_elements(&html, "img#injected"), 0);
        assert_eq!(count_elements(&html, "script"), 1);
        let script = html
            .select(&Selector::parse("script").unwrap())
            .next()
            .unwrap()
            .inner_html();
        assert!(script.contains("\\u003c/script>\\u003cimg id=injected"));
    }

    #[test]
    fn resize_listener_is_registered_once() {
        let markup = expenses_chart_view(&sample_expenses()).into_string();

        let guard = markup.find("if (!window.resizeExpensesChart)").unwrap();
        let listener = markup.find("addEventListener('resize'").unwrap();
        assert!(guard < listener);
        assert_eq!(markup.matches("addEventListener").count(), 1);
    }
}
