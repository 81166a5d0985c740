use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The ID the finance API assigns to a category.
pub type CategoryId = i64;

/// The colour used for a transaction whose category is not loaded.
pub const FALLBACK_CATEGORY_COLOR: &str = "#6c757d";
/// The icon used for a transaction whose category is not loaded.
pub const FALLBACK_CATEGORY_ICON: &str = "fas fa-tag";

/// A label for grouping transactions, e.g. "Mercado" or "Salário".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    /// The id for the category.
    pub id: CategoryId,
    /// The display name.
    pub name: String,
    /// Whether the category groups income or expenses.
    pub category_type: CategoryType,
    /// A hex colour string such as `#007bff`.
    pub color: String,
    /// A Font Awesome class list such as `fas fa-tag`.
    pub icon: String,
}

/// The fields for creating a category, as submitted by the category form and
/// sent to the finance API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewCategory {
    /// The display name.
    pub name: String,
    /// Whether the category groups income or expenses.
    pub category_type: CategoryType,
    /// A hex colour string, the colour picker always sends one.
    pub color: String,
    /// A Font Awesome class list.
    pub icon: String,
}

/// Whether a category (or transaction) brings money in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    Income,
    #[default]
    Expense,
}

impl CategoryType {
    /// The value used by the finance API.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryType::Income => "income",
            CategoryType::Expense => "expense",
        }
    }

    /// The label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            CategoryType::Income => "Receitas",
            CategoryType::Expense => "Despesas",
        }
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get the colour of the category with `category_id`, or a neutral grey.
pub fn category_color(categories: &[Category], category_id: CategoryId) -> &str {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.color.as_str())
        .unwrap_or(FALLBACK_CATEGORY_COLOR)
}

/// Get the icon of the category with `category_id`, or a generic tag icon.
pub fn category_icon(categories: &[Category], category_id: CategoryId) -> &str {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.icon.as_str())
        .unwrap_or(FALLBACK_CATEGORY_ICON)
}

/// The categories of `category_type`, in the order the API returned them.
pub fn categories_of_type(
    categories: &[Category],
    category_type: CategoryType,
) -> impl Iterator<Item = &Category> {
    categories
        .iter()
        .filter(move |category| category.category_type == category_type)
}
