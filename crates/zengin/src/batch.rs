//! JSON batch input.
//!
//! A batch bundles everything a document build needs:
//!
//! ```json
//! {
//!   "date": "0701",
//!   "sender": { "client_code": "1234567890", "client_name": "ｼﾞﾂｹﾝ(ｶ", ... },
//!   "transfers": [ { "bank_code": "0001", ..., "amount": 100 } ]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{
    document::Document,
    error::ZenginResult,
    model::{Sender, Transfer},
};

/// One transfer batch: the sender, the MMDD transfer date and the transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Transfer date, MMDD.
    pub date: String,
    /// Remitting party.
    pub sender: Sender,
    /// Transfers in file order.
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

impl Batch {
    /// Parses a batch from JSON text.
    pub fn from_json(json: &str) -> ZenginResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a batch from any JSON source.
    pub fn from_reader<R: Read>(reader: R) -> ZenginResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Assembles the document.
    pub fn assemble(&self) -> ZenginResult<Document> {
        Document::assemble(&self.sender, &self.date, &self.transfers)
    }

    /// Builds the record lines, before transcoding.
    pub fn build_lines(&self) -> ZenginResult<Vec<String>> {
        self.assemble().map(Document::into_lines)
    }

    /// Builds the Shift_JIS file.
    pub fn build(&self) -> ZenginResult<Vec<u8>> {
        self.assemble()?.to_bytes()
    }
}
