//! Format Tests
//!
//! Tests for decoding and encoding the block text format.

use textdb::format::{decode, encode, write_blocks, Block, MARKER};

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_empty_content() {
    assert!(decode("").is_empty());
    assert!(decode("no markers at all\n").is_empty());
}

#[test]
fn test_decode_single_block() {
    let blocks = decode("###INDEX: 1\nhello\n\n");

    assert_eq!(blocks, vec![Block::new(1, "hello")]);
}

#[test]
fn test_decode_ignores_preamble() {
    let content = "Some notes before the data\n\n###INDEX: 1\nfirst\n\n###INDEX: 2\nsecond\n\n";

    let blocks = decode(content);

    assert_eq!(blocks, vec![Block::new(1, "first"), Block::new(2, "second")]);
}

#[test]
fn test_decode_keeps_file_order_and_keys() {
    let content = "###INDEX: 5\nB5\n\n###INDEX: 2\nB2\n\n###INDEX: 10\nB10\n\n";

    let blocks = decode(content);

    let keys: Vec<usize> = blocks.iter().map(|b| b.key).collect();
    assert_eq!(keys, vec![5, 2, 10]);
}

#[test]
fn test_decode_multiline_body_is_trimmed() {
    let content = "###INDEX: 1\n\n  line one\n\nline three  \n\n\n";

    let blocks = decode(content);

    assert_eq!(blocks, vec![Block::new(1, "line one\n\nline three")]);
}

#[test]
fn test_decode_header_without_space() {
    let blocks = decode("###INDEX:3\nbody\n");

    assert_eq!(blocks, vec![Block::new(3, "body")]);
}

#[test]
fn test_decode_header_with_crlf() {
    let blocks = decode("###INDEX: 1\r\nwindows\r\n\r\n###INDEX: 2\r\nline\r\n");

    assert_eq!(blocks, vec![Block::new(1, "windows"), Block::new(2, "line")]);
}

#[test]
fn test_decode_skips_malformed_headers() {
    let content = "###INDEX: abc\nbad\n\n###INDEX: 2 trailing\nbad\n\n###INDEX: 3\ngood\n\n";

    let blocks = decode(content);

    assert_eq!(blocks, vec![Block::new(3, "good")]);
}

#[test]
fn test_decode_last_block_without_trailing_newline() {
    let blocks = decode("###INDEX: 1\nend of file");

    assert_eq!(blocks, vec![Block::new(1, "end of file")]);
}

#[test]
fn test_decode_keeps_duplicate_keys() {
    let blocks = decode("###INDEX: 1\nold\n\n###INDEX: 1\nnew\n\n");

    assert_eq!(blocks, vec![Block::new(1, "old"), Block::new(1, "new")]);
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_layout() {
    let encoded = encode(vec![(1, "first"), (2, "second\nline")]);

    assert_eq!(encoded, "###INDEX: 1\nfirst\n\n###INDEX: 2\nsecond\nline\n\n");
}

#[test]
fn test_encode_nothing() {
    assert_eq!(encode(Vec::<(usize, &str)>::new()), "");
}

#[test]
fn test_write_blocks_matches_encode() {
    let records = vec![(1, "a"), (2, "b\n\nc")];
    let mut buffer = Vec::new();

    write_blocks(&mut buffer, records.clone()).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), encode(records));
}

#[test]
fn test_encoded_text_decodes_to_same_records() {
    let records = vec![(1, "alpha"), (2, "beta\n\ngamma"), (3, "delta")];

    let blocks = decode(&encode(records.clone()));

    let decoded: Vec<(usize, &str)> = blocks.iter().map(|b| (b.key, b.body.as_str())).collect();
    assert_eq!(decoded, records);
}

#[test]
fn test_marker_constant() {
    assert_eq!(MARKER, "###INDEX:");
}
