//! Table Module
//!
//! In-memory record collection with dense positional keys.
//!
//! ## Responsibilities
//! - Hold every record resident, keyed `1..=N`
//! - Restore density once after load (reindex)
//! - Positional insert, update, remove and move
//!
//! ## Data Structure Choice
//! A BTreeMap keeps keys ordered, so the values iterate in display order.
//! Structural edits materialize the bodies as a Vec, edit it, and re-derive
//! keys by enumeration. Every structural edit is O(N).

mod records;

pub use records::RecordTable;
