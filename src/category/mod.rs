//! Categories: the income/expense tabs and the form for creating a category.

mod categories_page;
mod core;
mod create_endpoint;
mod form;

pub use categories_page::{get_categories_page, get_category_list};
pub(crate) use categories_page::category_listing_view;
pub use core::{
    Category, CategoryId, CategoryType, FALLBACK_CATEGORY_COLOR, NewCategory,
    categories_of_type, category_color, category_icon,
};
pub use create_endpoint::create_category_endpoint;
pub(crate) use form::{CATEGORY_MODAL_ID, category_modal};
