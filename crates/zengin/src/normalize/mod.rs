//! Character normalization for Zengin fields.
//!
//! Zengin files are Shift_JIS encoded and only carry ASCII digits, half-width
//! katakana and a handful of symbols. This module reconciles arbitrary Unicode
//! input with that repertoire:
//!
//! - [`normalize_number`] — digits only, full-width digits folded to ASCII
//! - [`normalize_kana`] — half-width katakana, voiced kana expanded to base + mark
//!
//! Both are pure and idempotent. Length must always be measured on their
//! output, never on the raw input: folding shrinks nothing but voiced kana
//! expand to two characters.

mod kana;
mod number;
mod width;

pub use kana::{KANA_PATTERN, normalize_kana, substitute};
pub use number::{NUMBER_PATTERN, normalize_number};
pub use width::fold_width;

/// A normalized value contains characters outside the permitted repertoire.
///
/// Carries no field name: the field layer attaches one through
/// [`CharsetViolation::in_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetViolation {
    /// The value after normalization.
    pub value: String,
    /// Human-readable permitted pattern.
    pub allowed: &'static str,
}
