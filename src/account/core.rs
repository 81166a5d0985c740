use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The ID the finance API assigns to an account.
pub type AccountId = i64;

/// A bank account, credit card or cash pocket tracked by the finance API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// What kind of account this is.
    pub account_type: AccountType,
    /// The balance after applying every transaction to the initial balance.
    pub current_balance: f64,
}

/// The kind of account.
///
/// Values the front-end does not know about are kept verbatim so they can
/// still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    Checking,
    Savings,
    CreditCard,
    Cash,
    Other(String),
}

impl AccountType {
    /// The account types offered in the account form, in display order.
    pub const CHOICES: [AccountType; 4] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::CreditCard,
        AccountType::Cash,
    ];

    /// The value used by the finance API.
    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::CreditCard => "credit_card",
            AccountType::Cash => "cash",
            AccountType::Other(other) => other,
        }
    }

    /// The label shown to the user, unknown types fall back to the raw value.
    pub fn label(&self) -> &str {
        match self {
            AccountType::Checking => "Conta Corrente",
            AccountType::Savings => "Poupança",
            AccountType::CreditCard => "Cartão de Crédito",
            AccountType::Cash => "Dinheiro",
            AccountType::Other(other) => other,
        }
    }
}

impl From<String> for AccountType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "checking" => AccountType::Checking,
            "savings" => AccountType::Savings,
            "credit_card" => AccountType::CreditCard,
            "cash" => AccountType::Cash,
            _ => AccountType::Other(value),
        }
    }
}

impl From<AccountType> for String {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

/// The fields for creating an account, as submitted by the account form and
/// sent to the finance API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewAccount {
    /// The display name of the account.
    pub name: String,
    /// What kind of account this is.
    pub account_type: AccountType,
    /// The balance when the account starts being tracked.
    #[serde(default)]
    pub initial_balance: f64,
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
