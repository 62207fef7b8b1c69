//! Error types for building Zengin transfer files.

use thiserror::Error;

use crate::{normalize::CharsetViolation, record::RecordKind};

/// Main error of the Zengin builder.
///
/// Every field-level failure carries the field name and the value *after*
/// normalization, so the caller can see exactly what the encoder saw.
#[derive(Debug, Error)]
pub enum ZenginError {
    // === Field errors ===
    /// The normalized value contains a character outside the field's repertoire.
    #[error("{field}[{value}] includes invalid character. available characters are {allowed}")]
    InvalidCharacter {
        /// Field name.
        field: String,
        /// Offending value after normalization.
        value: String,
        /// Permitted character class.
        allowed: &'static str,
    },

    /// The normalized value does not fit into the field.
    #[error("{field}[{value}] is too long. max length is {max_width}")]
    FieldTooLong {
        /// Field name.
        field: String,
        /// Offending value after normalization.
        value: String,
        /// Width of the fixed slot.
        max_width: usize,
    },

    /// A field that requires an exact length got something else.
    #[error("{field}[{value}] length must be {expected}")]
    InvalidLength {
        /// Field name.
        field: String,
        /// Offending value after normalization.
        value: String,
        /// Required length.
        expected: usize,
    },

    /// Account type outside the closed set.
    #[error("unknown account type '{0}': expected ordinary (1) or current (2)")]
    UnknownAccountType(String),

    // === Document errors ===
    /// A record came out with the wrong number of character positions.
    #[error("{kind:?} record must be {expected} characters wide, got {actual}")]
    RecordWidth {
        /// Record kind being built.
        kind: RecordKind,
        /// Required width.
        expected: usize,
        /// Actual width.
        actual: usize,
    },

    /// The running total of transfer amounts no longer fits into `u64`.
    #[error("total amount overflows after transfer #{index}")]
    TotalOverflow {
        /// 1-based index of the transfer that overflowed the total.
        index: usize,
    },

    // === Transcoding ===
    /// A character survived normalization that Shift_JIS cannot represent.
    #[error("character {character:?} cannot be encoded as Shift_JIS")]
    Unmappable {
        /// First unmappable character.
        character: char,
    },

    // === Batch input ===
    /// Malformed JSON batch, or a read failure while streaming it.
    #[error("invalid batch: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZenginError {
    /// Returns the name of the field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidCharacter { field, .. }
            | Self::FieldTooLong { field, .. }
            | Self::InvalidLength { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl CharsetViolation {
    /// Attaches the field name, turning the violation into a [`ZenginError`].
    #[must_use]
    pub fn in_field(self, field: &str) -> ZenginError {
        ZenginError::InvalidCharacter {
            field: field.to_string(),
            value: self.value,
            allowed: self.allowed,
        }
    }
}

/// Convenience alias for `Result` with [`ZenginError`].
pub type ZenginResult<T> = Result<T, ZenginError>;
