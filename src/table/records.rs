//! RecordTable implementation
//!
//! BTreeMap-based table whose keys are always `1..=N` outside of load.

use std::collections::BTreeMap;

use crate::error::{Result, TextDbError};
use crate::format::{Block, MARKER};

/// Ordered text records keyed by 1-based position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    data: BTreeMap<usize, String>,
}

impl RecordTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from decoded blocks, keeping the keys as written
    ///
    /// A key that appears twice keeps the later body. The result may be
    /// non-dense until `reindex_if_needed` runs.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let data = blocks
            .into_iter()
            .map(|block| (block.key, block.body))
            .collect();
        Self { data }
    }

    /// Build a dense table from bodies in order
    pub fn from_bodies<S: Into<String>>(bodies: impl IntoIterator<Item = S>) -> Self {
        let mut table = Self::new();
        table.rebuild(bodies.into_iter().map(Into::into).collect());
        table
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Number of records (N)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Body at `key`, if present
    pub fn get(&self, key: usize) -> Option<&str> {
        self.data.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: usize) -> bool {
        self.data.contains_key(&key)
    }

    /// Records in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.data.iter().map(|(key, body)| (*key, body.as_str()))
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.keys().copied()
    }

    /// True when the key set is exactly `{1..=N}`
    pub fn is_dense(&self) -> bool {
        // Keys are sorted and unique, so density means key == position
        self.data.keys().zip(1..).all(|(key, expected)| *key == expected)
    }

    // =========================================================================
    // Invariant Maintenance
    // =========================================================================

    /// Reassign keys `1..=N` in ascending order of the current keys
    ///
    /// Returns true if any key changed.
    pub fn reindex_if_needed(&mut self) -> bool {
        if self.is_dense() {
            return false;
        }
        let bodies = self.take_bodies();
        self.rebuild(bodies);
        true
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert `body` at `key`, shifting records at `key..` down by one
    ///
    /// Accepts `1..=N+1`.
    pub fn insert_at(&mut self, key: usize, body: String) -> Result<()> {
        let max = self.len() + 1;
        if !(1..=max).contains(&key) {
            return Err(TextDbError::OutOfRange { key, min: 1, max });
        }
        check_body(&body)?;

        let mut bodies = self.take_bodies();
        bodies.insert(key - 1, body);
        self.rebuild(bodies);
        Ok(())
    }

    /// Replace the body at an existing key
    pub fn update(&mut self, key: usize, body: String) -> Result<()> {
        let slot = self
            .data
            .get_mut(&key)
            .ok_or(TextDbError::NotFound { key })?;
        check_body(&body)?;
        *slot = body;
        Ok(())
    }

    /// Remove the record at `key` and close the gap
    pub fn remove(&mut self, key: usize) -> Result<String> {
        if !self.contains(key) {
            return Err(TextDbError::NotFound { key });
        }

        let mut bodies = self.take_bodies();
        let removed = bodies.remove(key - 1);
        self.rebuild(bodies);
        Ok(removed)
    }

    /// Pop the record at `source` and insert it at `dest` of the shortened
    /// sequence
    ///
    /// `dest` is validated against the unchanged size N (`1..=N`).
    pub fn move_record(&mut self, source: usize, dest: usize) -> Result<()> {
        if !self.contains(source) {
            return Err(TextDbError::NotFound { key: source });
        }
        let max = self.len();
        if !(1..=max).contains(&dest) {
            return Err(TextDbError::OutOfRange {
                key: dest,
                min: 1,
                max,
            });
        }

        let mut bodies = self.take_bodies();
        let body = bodies.remove(source - 1);
        bodies.insert(dest - 1, body);
        self.rebuild(bodies);
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Drain all bodies in key order
    fn take_bodies(&mut self) -> Vec<String> {
        std::mem::take(&mut self.data).into_values().collect()
    }

    /// Replace contents with `bodies`, keyed `1..=len`
    fn rebuild(&mut self, bodies: Vec<String>) {
        self.data = bodies.into_iter().enumerate().map(|(i, body)| (i + 1, body)).collect();
    }
}

/// Reject bodies that would split into extra blocks when read back
fn check_body(body: &str) -> Result<()> {
    if body.contains(MARKER) {
        return Err(TextDbError::InvalidInput(format!(
            "text may not contain the record marker '{}'",
            MARKER
        )));
    }
    Ok(())
}
