//! Accounts: the account cards and the form for creating an account.

mod accounts_page;
mod core;
mod create_endpoint;
mod form;

pub use accounts_page::get_accounts_page;
pub(crate) use accounts_page::accounts_view;
pub use core::{Account, AccountId, AccountType, NewAccount};
pub use create_endpoint::create_account_endpoint;
pub(crate) use form::{ACCOUNT_MODAL_ID, account_modal};
