//! Zengin (全銀) domestic transfer file builder.
//!
//! Turns a sender and an ordered list of transfers into the 120-character
//! fixed-width records of a Zengin 総合振込 file, encoded as Shift_JIS.
//!
//! - [`normalize`] — digits and half-width katakana normalization
//! - [`field`] — fixed-width slots with alignment and padding
//! - [`record`] — header / data / trailer / end records
//! - [`document`] — full document assembly and the [`build`] entry points
//! - [`transcode`] — CR LF joining and Shift_JIS encoding
//! - [`batch`] — JSON batch input
//!
//! # Quick start
//!
//! ```
//! use zengin::model::{AccountType, Sender, Transfer};
//!
//! let sender = Sender {
//!     client_code: "1234567890".to_string(),
//!     client_name: "ジッケン（カ".to_string(),
//!     bank_code: "0001".to_string(),
//!     bank_name: "ミズホ".to_string(),
//!     branch_code: "211".to_string(),
//!     branch_name: "アオヤマ".to_string(),
//!     account_type: AccountType::Ordinary,
//!     account_number: "0000001".to_string(),
//! };
//! let transfers = vec![Transfer {
//!     bank_code: "0001".to_string(),
//!     bank_name: "ミズホ".to_string(),
//!     branch_code: "211".to_string(),
//!     branch_name: "アオヤマ".to_string(),
//!     account_type: AccountType::Ordinary,
//!     account_number: "0000001".to_string(),
//!     account_owner_name: "テストコウザ".to_string(),
//!     amount: 100,
//! }];
//!
//! let lines = zengin::build_lines(&sender, "0701", &transfers)?;
//! assert_eq!(lines.len(), 4);
//! assert!(lines.iter().all(|l| l.chars().count() == 120));
//!
//! let bytes = zengin::build(&sender, "0701", &transfers)?;
//! assert_eq!(bytes.len(), 120 * 4 + 2 * 3);
//! # Ok::<(), zengin::ZenginError>(())
//! ```

pub mod batch;
pub mod document;
pub mod error;
pub mod field;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod record;
pub mod transcode;

pub use document::{Document, build, build_lines};
pub use error::{ZenginError, ZenginResult};

/// Common imports for working with the builder.
pub mod prelude {
    pub use crate::{
        batch::Batch,
        document::{Document, build, build_lines},
        error::{ZenginError, ZenginResult},
        model::{AccountType, Sender, Transfer},
        record::{RECORD_WIDTH, Record, RecordKind},
    };
}
