//! Store Module
//!
//! The record store that ties the table to its backing file.
//!
//! ## Responsibilities
//! - Load and parse the backing file, degrading to empty on read failure
//! - Enforce key density once after load
//! - Positional CRUD and move, purely in memory
//! - Track unsaved changes and write them back on `save`
//!
//! ## State
//! The store is either clean or dirty. Any successful mutation (and a
//! reindex during load) makes it dirty; only a successful save makes it
//! clean again. Failed operations leave the flag as it was.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::format;
use crate::table::RecordTable;

/// File-backed store of text records keyed `1..=N`
///
/// ## Concurrency Model
/// Single-threaded. Mutators take `&mut self`; callers must not open the
/// same path from two stores at once. No file handle is kept between calls.
#[derive(Debug)]
pub struct RecordStore {
    /// Backing file (mutable through `set_path` / `save_as`)
    path: PathBuf,

    /// Resident records
    table: RecordTable,

    /// In-memory state differs from what was last saved
    dirty: bool,
}

impl RecordStore {
    /// Open a store with the given config
    ///
    /// With `create_new` the store starts empty and the filesystem is not
    /// touched. Otherwise the file is read; a missing or unreadable file
    /// yields an empty store.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::open_path(config.path, config.create_new))
    }

    /// Open with a path (convenience method)
    pub fn open_path(path: impl Into<PathBuf>, create_new: bool) -> Self {
        let path = path.into();

        if create_new {
            info!(path = %path.display(), "Creating new empty database");
            return Self {
                path,
                table: RecordTable::new(),
                dirty: false,
            };
        }

        let mut table = Self::read_table(&path);
        let dirty = table.reindex_if_needed();
        if dirty {
            info!(path = %path.display(), "Reindexed database because keys were not contiguous");
        }
        info!(path = %path.display(), records = table.len(), "Database loaded");

        Self { path, table, dirty }
    }

    /// Create an empty store bound to `path` without reading it
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self::open_path(path, true)
    }

    /// Write every record to the backing file, replacing its contents
    ///
    /// On failure the in-memory records and the dirty flag are unchanged.
    /// The write is not atomic: a crash mid-write can leave a truncated file.
    pub fn save(&mut self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        format::write_blocks(&mut writer, self.table.iter())?;
        writer.flush()?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;

        self.dirty = false;
        debug!(path = %self.path.display(), records = self.table.len(), "Database saved");
        Ok(())
    }

    /// Rebind to `path` and save there
    ///
    /// The new path is kept even if the save fails.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.set_path(path);
        self.save()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Body for `key`, or None when absent
    pub fn get(&self, key: usize) -> Option<&str> {
        self.table.get(key)
    }

    /// Number of records (N)
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// True when there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.table.iter()
    }

    /// Records whose body contains `term` (case-insensitive) or whose key
    /// starts with `term`
    ///
    /// An empty term matches every record.
    pub fn search(&self, term: &str) -> Vec<(usize, &str)> {
        if term.is_empty() {
            return self.iter().collect();
        }
        let needle = term.to_lowercase();
        self.iter()
            .filter(|(key, body)| {
                body.to_lowercase().contains(&needle) || key.to_string().starts_with(term)
            })
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `body` after the last record and return its key
    ///
    /// The position N+1 is always in range, so only a body containing the
    /// record marker is rejected.
    pub fn append(&mut self, body: impl Into<String>) -> Result<usize> {
        let key = self.len() + 1;
        self.insert_at(key, body)?;
        Ok(key)
    }

    /// Insert `body` at `key` (`1..=N+1`), shifting later records down
    pub fn insert_at(&mut self, key: usize, body: impl Into<String>) -> Result<()> {
        self.table.insert_at(key, body.into())?;
        self.dirty = true;
        Ok(())
    }

    /// Replace the body of an existing record
    pub fn update(&mut self, key: usize, body: impl Into<String>) -> Result<()> {
        self.table.update(key, body.into())?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a record, closing the gap, and return its body
    pub fn delete(&mut self, key: usize) -> Result<String> {
        let removed = self.table.remove(key)?;
        self.dirty = true;
        Ok(removed)
    }

    /// Move the record at `source` to position `dest` (`1..=N`)
    ///
    /// The record is removed first and then inserted at `dest` of the
    /// shortened sequence. Callers that think in terms of the original
    /// arrangement adjust `dest` themselves.
    pub fn move_record(&mut self, source: usize, dest: usize) -> Result<()> {
        self.table.move_record(source, dest)?;
        self.dirty = true;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebind the backing file; does not touch the dirty flag
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read and decode the backing file, keeping keys as written
    fn read_table(path: &Path) -> RecordTable {
        match fs::read_to_string(path) {
            Ok(content) => RecordTable::from_blocks(format::decode(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Database file does not exist yet");
                RecordTable::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read database, starting empty");
                RecordTable::new()
            }
        }
    }
}
