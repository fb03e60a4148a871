//! Format Module
//!
//! Line-oriented text format used to persist a RecordStore.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ (ignored preamble text)                 │
//! ├─────────────────────────────────────────┤
//! │ ###INDEX: 1                             │
//! │ body line 1                             │
//! │ body line 2                             │
//! │ <blank line>                            │
//! ├─────────────────────────────────────────┤
//! │ ###INDEX: 2                             │
//! │ body                                    │
//! │ <blank line>                            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! - A body runs from the line after its header up to the next marker or EOF
//!   and is trimmed when read back.
//! - Keys in a file need not be sorted or dense; density is restored after
//!   load (see `RecordTable::reindex_if_needed`).

mod codec;

pub use codec::{decode, encode, write_blocks};

/// Literal that starts every block header
pub const MARKER: &str = "###INDEX:";

/// One marker-delimited record as it appears in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Key as written in the header (not necessarily dense)
    pub key: usize,

    /// Trimmed body text
    pub body: String,
}

impl Block {
    pub fn new(key: usize, body: impl Into<String>) -> Self {
        Self {
            key,
            body: body.into(),
        }
    }
}
