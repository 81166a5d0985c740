use maud::{Markup, html};

use crate::{
    account::AccountType,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, modal},
    layout::SECTION_CONTENT_ID,
};

/// The id of the dialog holding the account form.
pub(crate) const ACCOUNT_MODAL_ID: &str = "account-modal";

fn account_form() -> Markup {
    html! {
        form
            id="account-form"
            hx-post=(endpoints::ACCOUNT_FORM)
            hx-target={ "#" (SECTION_CONTENT_ID) }
            hx-swap="innerHTML"
            class="space-y-4"
        {
            div
            {
                label for="account-name" class=(FORM_LABEL_STYLE) { "Nome" }
                input
                    id="account-name"
                    name="name"
                    type="text"
                    required
                    placeholder="Ex: Nubank"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="account-type" class=(FORM_LABEL_STYLE) { "Tipo" }
                select id="account-type" name="account_type" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for account_type in AccountType::CHOICES {
                        option value=(account_type.as_str()) { (account_type.label()) }
                    }
                }
            }

            div
            {
                label for="account-balance" class=(FORM_LABEL_STYLE) { "Saldo Inicial" }
                input
                    id="account-balance"
                    name="initial_balance"
                    type="number"
                    step="0.01"
                    value="0"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class={ "w-full " (BUTTON_PRIMARY_STYLE) } { "Salvar" }
        }
    }
}

/// The dialog for creating an account.
pub(crate) fn account_modal() -> Markup {
    modal(ACCOUNT_MODAL_ID, "Nova Conta", &account_form())
}
