//! # TextDB
//!
//! A file-backed store of text records with:
//! - Dense 1-based positional keys (`1..=N`, no gaps)
//! - Positional insert, update, delete and move
//! - Dirty tracking with explicit, full-overwrite saves
//! - A tolerant line-oriented text format
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Editor / CLI  (src/bin, command)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RecordStore                              │
//! │              (path, dirty flag, mutators)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RecordTable │          │   Format    │
//!   │ (BTreeMap)  │          │  (codec)    │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod format;
pub mod table;
pub mod store;
pub mod command;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TextDbError, Result};
pub use config::Config;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TextDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
