//! Fixed-width records.
//!
//! [`RecordBuilder`] concatenates literals, fillers and encoded fields and
//! refuses to produce a line that is not exactly [`RECORD_WIDTH`] characters.
//! The `header`, `data`, `trailer` and `end` functions apply the layouts from
//! [`crate::layout`].

use std::fmt;

use crate::{
    error::{ZenginError, ZenginResult},
    field::FieldSpec,
    model::{Sender, Transfer},
};

/// Width of every Zengin record, in character positions.
pub const RECORD_WIDTH: usize = 120;

/// The four record kinds of a Zengin file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// One per file, describes the sender.
    Header,
    /// One per transfer.
    Data,
    /// Transfer count and total amount.
    Trailer,
    /// Closes the file.
    End,
}

impl RecordKind {
    /// Leading record-type digit.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Header => "1",
            Self::Data => "2",
            Self::Trailer => "8",
            Self::End => "9",
        }
    }
}

/// A complete record line, guaranteed to be [`RECORD_WIDTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    line: String,
}

impl Record {
    /// Record kind.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The line, without terminator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Consumes the record and returns the line.
    #[must_use]
    pub fn into_line(self) -> String {
        self.line
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl AsRef<str> for Record {
    fn as_ref(&self) -> &str {
        &self.line
    }
}

/// Assembles one record from its parts, left to right.
///
/// The record-type marker is written by [`RecordBuilder::new`]. Any field
/// failure consumes the builder, so a partial record can never escape.
///
/// # Example
///
/// ```
/// use zengin::field::FieldSpec;
/// use zengin::record::{RecordBuilder, RecordKind};
///
/// let record = RecordBuilder::new(RecordKind::Trailer)
///     .field(&FieldSpec::numeric("transfer_count", 6, '0'), "1")?
///     .field(&FieldSpec::numeric("total_amount", 12, '0'), "100")?
///     .filler(101)
///     .finish()?;
/// assert!(record.as_str().starts_with("8000001000000000100"));
/// # Ok::<(), zengin::ZenginError>(())
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    kind: RecordKind,
    line: String,
}

impl RecordBuilder {
    /// Starts a record with its type marker.
    #[must_use]
    pub fn new(kind: RecordKind) -> Self {
        let mut line = String::with_capacity(RECORD_WIDTH * 3);
        line.push_str(kind.marker());
        Self { kind, line }
    }

    /// Appends constant text.
    #[must_use]
    pub fn literal(mut self, text: &str) -> Self {
        self.line.push_str(text);
        self
    }

    /// Appends `width` spaces.
    #[must_use]
    pub fn filler(mut self, width: usize) -> Self {
        self.line.extend(std::iter::repeat_n(' ', width));
        self
    }

    /// Normalizes, checks and appends one field.
    pub fn field(mut self, spec: &FieldSpec, raw: &str) -> ZenginResult<Self> {
        let encoded = spec.encode(raw)?;
        self.line.push_str(&encoded);
        Ok(self)
    }

    /// Finishes the record, checking the width of the line actually built.
    pub fn finish(self) -> ZenginResult<Record> {
        let actual = self.line.chars().count();
        if actual != RECORD_WIDTH {
            return Err(ZenginError::RecordWidth {
                kind: self.kind,
                expected: RECORD_WIDTH,
                actual,
            });
        }
        Ok(Record { kind: self.kind, line: self.line })
    }
}

/// Builds the header record from the sender and the MMDD transfer date.
pub fn header(sender: &Sender, date: &str) -> ZenginResult<Record> {
    use crate::layout::header::*;

    RecordBuilder::new(RecordKind::Header)
        .literal(CATEGORY)
        .field(&CLIENT_CODE, &sender.client_code)?
        .field(&CLIENT_NAME, &sender.client_name)?
        .field(&DATE, date)?
        .field(&BANK_CODE, &sender.bank_code)?
        .field(&BANK_NAME, &sender.bank_name)?
        .field(&BRANCH_CODE, &sender.branch_code)?
        .field(&BRANCH_NAME, &sender.branch_name)?
        .field(&ACCOUNT_TYPE, sender.account_type.code())?
        .field(&ACCOUNT_NUMBER, &sender.account_number)?
        .filler(FILLER)
        .finish()
}

/// Builds the data record for one transfer.
pub fn data(transfer: &Transfer) -> ZenginResult<Record> {
    use crate::layout::data::*;

    RecordBuilder::new(RecordKind::Data)
        .field(&BANK_CODE, &transfer.bank_code)?
        .field(&BANK_NAME, &transfer.bank_name)?
        .field(&BRANCH_CODE, &transfer.branch_code)?
        .field(&BRANCH_NAME, &transfer.branch_name)?
        .filler(CLEARING_HOUSE)
        .field(&ACCOUNT_TYPE, transfer.account_type.code())?
        .field(&ACCOUNT_NUMBER, &transfer.account_number)?
        .field(&ACCOUNT_OWNER_NAME, &transfer.account_owner_name)?
        .field(&AMOUNT, &transfer.amount.to_string())?
        .literal(NEW_CODE)
        .filler(FILLER)
        .finish()
}

/// Builds the trailer record.
pub fn trailer(count: usize, total_amount: u64) -> ZenginResult<Record> {
    use crate::layout::trailer::*;

    RecordBuilder::new(RecordKind::Trailer)
        .field(&COUNT, &count.to_string())?
        .field(&TOTAL_AMOUNT, &total_amount.to_string())?
        .filler(FILLER)
        .finish()
}

/// Builds the end record.
pub fn end() -> ZenginResult<Record> {
    RecordBuilder::new(RecordKind::End).filler(crate::layout::end::FILLER).finish()
}
