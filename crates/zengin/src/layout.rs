//! Field layout of the four Zengin record kinds.
//!
//! Widths add up to [`RECORD_WIDTH`](crate::record::RECORD_WIDTH) for every kind;
//! `record::tests` checks the sums.

use crate::field::FieldSpec;

/// Header record (record type `1`).
pub mod header {
    use super::FieldSpec;

    /// Type code `21` (総合振込) followed by code class `0` (JIS).
    pub const CATEGORY: &str = "210";
    pub const CLIENT_CODE: FieldSpec = FieldSpec::numeric("client_code", 10, ' ');
    pub const CLIENT_NAME: FieldSpec = FieldSpec::kana("client_name", 40);
    /// Transfer date, MMDD.
    pub const DATE: FieldSpec = FieldSpec::exact_numeric("date", 4);
    pub const BANK_CODE: FieldSpec = FieldSpec::numeric("bank_code", 4, ' ');
    pub const BANK_NAME: FieldSpec = FieldSpec::kana("bank_name", 15);
    pub const BRANCH_CODE: FieldSpec = FieldSpec::numeric("branch_code", 3, ' ');
    pub const BRANCH_NAME: FieldSpec = FieldSpec::kana("branch_name", 15);
    pub const ACCOUNT_TYPE: FieldSpec = FieldSpec::numeric("account_type", 1, ' ');
    pub const ACCOUNT_NUMBER: FieldSpec = FieldSpec::numeric("account_number", 7, ' ');
    pub const FILLER: usize = 17;
}

/// Data record (record type `2`), one per transfer.
pub mod data {
    use super::FieldSpec;

    pub const BANK_CODE: FieldSpec = FieldSpec::numeric("bank_code", 4, ' ');
    pub const BANK_NAME: FieldSpec = FieldSpec::kana("bank_name", 15);
    pub const BRANCH_CODE: FieldSpec = FieldSpec::numeric("branch_code", 3, ' ');
    pub const BRANCH_NAME: FieldSpec = FieldSpec::kana("branch_name", 15);
    /// Clearing house number, unused for transfers.
    pub const CLEARING_HOUSE: usize = 4;
    pub const ACCOUNT_TYPE: FieldSpec = FieldSpec::numeric("account_type", 1, ' ');
    pub const ACCOUNT_NUMBER: FieldSpec = FieldSpec::numeric("account_number", 7, ' ');
    pub const ACCOUNT_OWNER_NAME: FieldSpec = FieldSpec::kana("account_owner_name", 30);
    pub const AMOUNT: FieldSpec = FieldSpec::numeric("amount", 10, '0');
    /// New-code `1`: first transfer to this beneficiary in the batch cycle.
    pub const NEW_CODE: &str = "1";
    pub const FILLER: usize = 29;
}

/// Trailer record (record type `8`).
pub mod trailer {
    use super::FieldSpec;

    pub const COUNT: FieldSpec = FieldSpec::numeric("transfer_count", 6, '0');
    pub const TOTAL_AMOUNT: FieldSpec = FieldSpec::numeric("total_amount", 12, '0');
    pub const FILLER: usize = 101;
}

/// End record (record type `9`).
pub mod end {
    pub const FILLER: usize = 119;
}
