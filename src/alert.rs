//! Alert system for displaying success and error messages to users.
//!
//! Error alerts are returned as the body of a failed htmx request and swapped
//! into `#alert-container` through the response-targets extension. Success
//! alerts ride along with a successful response as an out-of-band swap.

use maud::{Markup, html};

/// The id of the element alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

const ALERT_CONTAINER_STYLE: &str = "fixed bottom-4 left-1/2 -translate-x-1/2 \
    w-full max-w-md px-4 z-50";

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A dismissible message box.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub kind: AlertKind,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str) -> Self {
        Self {
            kind: AlertKind::Success,
            message,
            details: "",
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Error,
            message,
            details,
        }
    }

    /// Render the alert box on its own.
    pub fn into_html(self) -> Markup {
        let (style, icon) = match self.kind {
            AlertKind::Success => (
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "fas fa-check-circle",
            ),
            AlertKind::Error => (
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                "fas fa-exclamation-circle",
            ),
        };

        html! {
            div
                role="alert"
                data-alert
                class={ "flex items-start gap-3 p-4 mb-4 text-sm border rounded-lg shadow " (style) }
            {
                i class=(icon) {}

                div class="flex-1"
                {
                    span class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="mt-1" { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Fechar"
                    class="ms-auto"
                    onclick="this.closest('[data-alert]').remove()"
                {
                    i class="fas fa-times" {}
                }
            }
        }
    }

    /// Render the alert inside a replacement alert container for an
    /// out-of-band swap.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="true" class=(ALERT_CONTAINER_STYLE)
            {
                (self.into_html())
            }
        }
    }
}

/// The alert container, rendered once per page with an optional initial alert.
pub fn alert_container(alert: Option<Alert<'_>>) -> Markup {
    html! {
        div id=(ALERT_CONTAINER_ID) class=(ALERT_CONTAINER_STYLE)
        {
            @if let Some(alert) = alert {
                (alert.into_html())
            }
        }
    }
}
