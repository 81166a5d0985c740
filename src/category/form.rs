use maud::{Markup, html};

use crate::{
    category::CategoryType,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, modal},
    layout::SECTION_CONTENT_ID,
};

/// The id of the dialog holding the category form.
pub(crate) const CATEGORY_MODAL_ID: &str = "category-modal";

const DEFAULT_COLOR: &str = "#007bff";
const DEFAULT_ICON: &str = "fas fa-tag";

fn category_form() -> Markup {
    html! {
        form
            id="category-form"
            hx-post=(endpoints::CATEGORY_FORM)
            hx-target={ "#" (SECTION_CONTENT_ID) }
            hx-swap="innerHTML"
            class="space-y-4"
        {
            div
            {
                label for="category-name" class=(FORM_LABEL_STYLE) { "Nome" }
                input
                    id="category-name"
                    name="name"
                    type="text"
                    required
                    placeholder="Ex: Mercado"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category-type" class=(FORM_LABEL_STYLE) { "Tipo" }
                select id="category-type" name="category_type" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category_type in [CategoryType::Expense, CategoryType::Income] {
                        option value=(category_type.as_str()) { (category_type.label()) }
                    }
                }
            }

            div class="grid grid-cols-2 gap-4"
            {
                div
                {
                    label for="category-color" class=(FORM_LABEL_STYLE) { "Cor" }
                    input
                        id="category-color"
                        name="color"
                        type="color"
                        value=(DEFAULT_COLOR)
                        required
                        class="w-full h-10 rounded";
                }

                div
                {
                    label for="category-icon" class=(FORM_LABEL_STYLE) { "Ícone" }
                    input
                        id="category-icon"
                        name="icon"
                        type="text"
                        value=(DEFAULT_ICON)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class={ "w-full " (BUTTON_PRIMARY_STYLE) } { "Salvar" }
        }
    }
}

/// The dialog for creating a category.
pub(crate) fn category_modal() -> Markup {
    modal(CATEGORY_MODAL_ID, "Nova Categoria", &category_form())
}
