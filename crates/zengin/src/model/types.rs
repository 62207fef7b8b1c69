//! Sender, transfer and account type.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ZenginError;

/// Deposit account type (預金種目).
///
/// Closed set: only these codes may reach the record formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Ordinary deposit (普通), wire code `1`.
    #[serde(alias = "1")]
    Ordinary,
    /// Current deposit (当座), wire code `2`.
    #[serde(alias = "2")]
    Current,
}

impl AccountType {
    /// Returns the single-digit wire code.
    ///
    /// # Example
    /// ```
    /// use zengin::model::AccountType;
    /// assert_eq!(AccountType::Current.code(), "2");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ordinary => "1",
            Self::Current => "2",
        }
    }

    /// Returns the lowercase name used in batch files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ZenginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordinary" | "1" => Ok(Self::Ordinary),
            "current" | "2" => Ok(Self::Current),
            _ => Err(ZenginError::UnknownAccountType(s.to_string())),
        }
    }
}

/// The remitting party (依頼人). Fills the header record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Client code assigned by the bank (numeric, up to 10).
    pub client_code: String,
    /// Client name (kana, up to 40 after normalization).
    pub client_name: String,
    /// Bank code (numeric, up to 4).
    pub bank_code: String,
    /// Bank name (kana, up to 15).
    pub bank_name: String,
    /// Branch code (numeric, up to 3).
    pub branch_code: String,
    /// Branch name (kana, up to 15).
    pub branch_name: String,
    /// Type of the debited account.
    pub account_type: AccountType,
    /// Debited account number (numeric, up to 7).
    pub account_number: String,
}

/// One beneficiary payment. Each transfer becomes one data record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Beneficiary bank code (numeric, up to 4).
    pub bank_code: String,
    /// Beneficiary bank name (kana, up to 15).
    pub bank_name: String,
    /// Beneficiary branch code (numeric, up to 3).
    pub branch_code: String,
    /// Beneficiary branch name (kana, up to 15).
    pub branch_name: String,
    /// Type of the credited account.
    pub account_type: AccountType,
    /// Credited account number (numeric, up to 7).
    pub account_number: String,
    /// Account holder name (kana, up to 30 after normalization).
    pub account_owner_name: String,
    /// Amount in yen. Must render in at most 10 digits.
    pub amount: u64,
}
