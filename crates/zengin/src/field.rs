//! Fixed-width field encoding.
//!
//! A [`FieldSpec`] describes one slot of a record: its name, width, character
//! set and alignment. [`FieldSpec::encode`] runs the full
//! normalize → measure → pad sequence; the order matters because
//! normalization changes length.

use crate::{
    error::{ZenginError, ZenginResult},
    normalize::{normalize_kana, normalize_number},
};

/// Character set accepted by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ASCII digits (see [`normalize_number`]).
    Numeric,
    /// Half-width katakana and symbols (see [`normalize_kana`]).
    Kana,
}

/// How a value is placed inside its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Value first, trailing spaces.
    Left,
    /// Leading `pad` characters, value last.
    Right {
        /// Padding character (`' '` or `'0'`).
        pad: char,
    },
}

/// Whether the value may be shorter than the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// Anything up to the slot width.
    UpTo,
    /// Exactly the slot width.
    Exact,
}

/// Declaration of a single fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used in error messages.
    pub name: &'static str,
    /// Number of character positions.
    pub width: usize,
    /// Accepted characters.
    pub charset: Charset,
    /// Alignment and padding.
    pub align: Align,
    /// Length policy.
    pub length: Length,
}

impl FieldSpec {
    /// Right-aligned numeric field padded with `pad`.
    #[must_use]
    pub const fn numeric(name: &'static str, width: usize, pad: char) -> Self {
        Self {
            name,
            width,
            charset: Charset::Numeric,
            align: Align::Right { pad },
            length: Length::UpTo,
        }
    }

    /// Numeric field that must be exactly `width` digits long.
    #[must_use]
    pub const fn exact_numeric(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            charset: Charset::Numeric,
            align: Align::Right { pad: ' ' },
            length: Length::Exact,
        }
    }

    /// Left-aligned kana field padded with spaces.
    #[must_use]
    pub const fn kana(name: &'static str, width: usize) -> Self {
        Self { name, width, charset: Charset::Kana, align: Align::Left, length: Length::UpTo }
    }

    /// Normalizes a raw value according to the field's character set.
    pub fn normalize(&self, raw: &str) -> ZenginResult<String> {
        let normalized = match self.charset {
            Charset::Numeric => normalize_number(raw),
            Charset::Kana => normalize_kana(raw),
        };
        normalized.map_err(|violation| violation.in_field(self.name))
    }

    /// Places an already normalized value into the slot.
    ///
    /// Overflow is always an error; values are never truncated.
    pub fn pad(&self, normalized: &str) -> ZenginResult<String> {
        let len = normalized.chars().count();

        if self.length == Length::Exact && len != self.width {
            return Err(ZenginError::InvalidLength {
                field: self.name.to_string(),
                value: normalized.to_string(),
                expected: self.width,
            });
        }
        if len > self.width {
            return Err(ZenginError::FieldTooLong {
                field: self.name.to_string(),
                value: normalized.to_string(),
                max_width: self.width,
            });
        }

        let fill = self.width - len;
        let mut out = String::with_capacity(normalized.len() + fill);
        match self.align {
            Align::Left => {
                out.push_str(normalized);
                out.extend(std::iter::repeat_n(' ', fill));
            }
            Align::Right { pad } => {
                out.extend(std::iter::repeat_n(pad, fill));
                out.push_str(normalized);
            }
        }
        Ok(out)
    }

    /// Normalizes, measures and pads a raw value.
    pub fn encode(&self, raw: &str) -> ZenginResult<String> {
        let normalized = self.normalize(raw)?;
        self.pad(&normalized)
    }
}
