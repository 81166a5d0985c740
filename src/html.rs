use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, macros::format_description};

use crate::alert::{Alert, alert_container};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Card styles
pub const CARD_STYLE: &str = "p-4 bg-white rounded-lg shadow dark:bg-gray-800 \
    border border-gray-200 dark:border-gray-700";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto lg:py-5 max-w-6xl text-gray-900 dark:text-white";

// Amount colours
pub const INCOME_STYLE: &str = "text-green-600 dark:text-green-400";
pub const EXPENSE_STYLE: &str = "text-red-600 dark:text-red-400";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

/// The ECharts build used by the dashboard and reports charts.
pub const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    base_with_alert(title, head_elements, content, None)
}

/// The page layout with `alert` already shown in the alert container.
pub fn base_with_alert(
    title: &str,
    head_elements: &[HeadElement],
    content: &Markup,
    alert: Option<Alert<'_>>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finanças Pessoais" }
                script src="https://cdn.tailwindcss.com" {}
                link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    dialog::backdrop {
                        background: rgb(0 0 0 / 0.5);
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                hx-target-error="#alert-container"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-20 lg:pb-0"
            {
                (content)

                (alert_container(alert))
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Voltar ao início"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// A heading with the page title and an optional action button.
pub fn page_header(title: &str, action: Option<Markup>) -> Markup {
    html! {
        header class="flex justify-between flex-wrap items-end mb-4"
        {
            h1 id="page-title" class="text-xl font-bold" { (title) }

            @if let Some(action) = action {
                (action)
            }
        }
    }
}

/// A button that opens the dialog `dialog_id`.
pub fn open_modal_button(dialog_id: &str, label: &str) -> Markup {
    html! {
        button
            type="button"
            class=(BUTTON_PRIMARY_STYLE)
            onclick={ "document.getElementById('" (dialog_id) "').showModal()" }
        {
            i class="fas fa-plus me-2" {}
            (label)
        }
    }
}

/// A modal dialog holding `form`.
///
/// The form is expected to be an htmx form, a successful request resets it
/// and closes the dialog, a failed one leaves both as they are.
pub fn modal(dialog_id: &str, title: &str, form: &Markup) -> Markup {
    html! {
        dialog
            id=(dialog_id)
            class="w-full max-w-md p-6 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white"
            hx-on--after-request="if (event.detail.successful && event.target.tagName === 'FORM') { event.target.reset(); this.close(); }"
        {
            div class="flex justify-between items-center mb-4"
            {
                h2 class="text-lg font-semibold" { (title) }

                button
                    type="button"
                    aria-label="Fechar"
                    onclick="this.closest('dialog').close()"
                {
                    i class="fas fa-times" {}
                }
            }

            (form)
        }
    }
}

/// A message shown in place of an empty list.
pub fn empty_state(icon: &str, message: &str) -> Markup {
    html! {
        div class="empty-state flex flex-col items-center gap-2 py-8 text-gray-500 dark:text-gray-400"
        {
            i class={ (icon) " text-3xl" } {}
            p { (message) }
        }
    }
}

/// Format `number` as Brazilian reais, e.g. `R$ 1.234,50` or `-R$ 20,00`.
pub fn format_currency(number: f64) -> String {
    static FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let formatter = FMT.get_or_init(|| {
        Formatter::currency("R$ ")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
    });

    let total_cents = (number.abs() * 100.0).round() as u64;
    let (whole, cents) = (total_cents / 100, total_cents % 100);

    // numfmt groups with commas and hardcodes zero as "0", so the integer
    // part is formatted on its own and the Brazilian separators swapped in.
    let whole = match formatter {
        Some(formatter) if whole > 0 => formatter.fmt_string(whole as f64).replace(',', "."),
        _ => format!("R$ {whole}"),
    };

    let sign = if number < 0.0 && total_cents > 0 {
        "-"
    } else {
        ""
    };

    format!("{sign}{whole},{cents:02}")
}

/// Format `date` as `dd/mm/yyyy`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| date.to_string())
}
