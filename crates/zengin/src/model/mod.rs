//! Input data model: the remitting party and the individual transfers.
//!
//! Values are plain data. Nothing is normalized or validated on
//! construction; every field is checked when its record is built.

mod types;

pub use types::{AccountType, Sender, Transfer};
