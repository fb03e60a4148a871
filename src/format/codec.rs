//! Format codec
//!
//! Decoding and encoding functions for the block text format.
//!
//! ### Block Header
//! ```text
//! ###INDEX:<ws><digits><ws with at least one newline><body...>
//! ```
//!
//! Blocks whose header does not match are skipped, as is any text before
//! the first marker.

use std::io::Write;

use tracing::warn;

use crate::error::Result;
use super::{Block, MARKER};

// =============================================================================
// Decoding
// =============================================================================

/// Decode all blocks from file contents, in the order they appear
///
/// Never fails: malformed blocks are dropped.
pub fn decode(content: &str) -> Vec<Block> {
    content
        .split(MARKER)
        .skip(1)
        .filter_map(decode_block)
        .collect()
}

/// Decode the text following a single marker
fn decode_block(raw: &str) -> Option<Block> {
    let rest = raw.trim_start();

    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_len == 0 {
        return None;
    }
    let (digits, after_key) = rest.split_at(digits_len);

    // The header ends at the first newline; only whitespace may precede it
    let ws_len = after_key
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(after_key.len());
    if !after_key[..ws_len].contains('\n') {
        return None;
    }

    let key = match digits.parse::<usize>() {
        Ok(key) => key,
        Err(e) => {
            warn!(key = digits, error = %e, "Skipping block with unusable key");
            return None;
        }
    };

    Some(Block::new(key, after_key.trim()))
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode records to the on-disk text
///
/// Records are written in the order given; callers pass them sorted by key.
pub fn encode<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut out = String::new();
    for (key, body) in records {
        out.push_str(&header(key));
        out.push_str(body);
        out.push_str("\n\n");
    }
    out
}

/// Write records to a writer in the on-disk format
pub fn write_blocks<'a, W, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (usize, &'a str)>,
{
    for (key, body) in records {
        writer.write_all(header(key).as_bytes())?;
        writer.write_all(body.as_bytes())?;
        writer.write_all(b"\n\n")?;
    }
    Ok(())
}

fn header(key: usize) -> String {
    format!("{} {}\n", MARKER, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        assert_eq!(header(7), "###INDEX: 7\n");
    }

    #[test]
    fn test_decode_block_requires_newline_after_key() {
        assert_eq!(decode_block(" 3 body on same line"), None);
        assert_eq!(decode_block(" 3"), None);
        assert_eq!(decode_block(" 3\n"), Some(Block::new(3, "")));
    }

    #[test]
    fn test_decode_block_requires_digits() {
        assert_eq!(decode_block(" x\nbody"), None);
        assert_eq!(decode_block("\nbody"), None);
    }

    #[test]
    fn test_decode_block_allows_trailing_spaces_on_header() {
        assert_eq!(decode_block("  12  \t\n  body\n"), Some(Block::new(12, "body")));
    }

    #[test]
    fn test_decode_block_overflowing_key_is_skipped() {
        let raw = format!(" {}0\nbody", usize::MAX);
        assert_eq!(decode_block(&raw), None);
    }
}
