//! Sequence decoder buffer policy tests

use rust_morse_decoder::classifier::Symbol;
use rust_morse_decoder::sequence::{DecodeResult, SequenceDecoder, DEFAULT_CAPACITY};

#[test]
fn test_decode_always_returns_to_empty() {
    let mut seq: SequenceDecoder = SequenceDecoder::new();

    // Match
    seq.append(Symbol::Dot);
    seq.append(Symbol::Dash);
    assert_eq!(seq.decode(), DecodeResult::Resolved('A'));
    assert!(seq.is_empty());

    // No match
    for _ in 0..7 {
        seq.append(Symbol::Dash);
    }
    assert_eq!(seq.decode(), DecodeResult::Unrecognized);
    assert!(seq.is_empty());

    // Empty
    assert_eq!(seq.decode(), DecodeResult::Empty);
    assert!(seq.is_empty());
}

#[test]
fn test_empty_decode_is_sentinel_not_error() {
    let mut seq: SequenceDecoder = SequenceDecoder::new();
    assert_eq!(seq.decode().as_char(), '?');
    assert!(seq.is_empty());
}

#[test]
fn test_overflow_decodes_first_nine() {
    let mut seq: SequenceDecoder = SequenceDecoder::new();

    // Nine dashes fit, the rest are dropped
    for i in 0..15 {
        let stored = seq.append(Symbol::Dash);
        assert_eq!(stored, i < DEFAULT_CAPACITY);
    }

    assert_eq!(seq.len(), DEFAULT_CAPACITY);
    assert_eq!(seq.pattern().as_str(), "---------");

    // Nine dashes match nothing, state stays sound
    assert_eq!(seq.decode(), DecodeResult::Unrecognized);
    assert!(seq.is_empty());

    // Buffer is usable again after the overflow episode
    seq.append(Symbol::Dash);
    seq.append(Symbol::Dot);
    assert_eq!(seq.decode(), DecodeResult::Resolved('N'));
}

#[test]
fn test_clear_discards_without_resolving() {
    let mut seq: SequenceDecoder = SequenceDecoder::new();

    seq.append(Symbol::Dot);
    seq.append(Symbol::Dash);
    seq.clear();

    // The cleared ".-" is gone; decode reports empty, not 'A'
    assert_eq!(seq.decode(), DecodeResult::Empty);
    assert_eq!(seq.decode().as_char(), '?');
}

#[test]
fn test_overflow_preserves_prefix_order() {
    let mut seq: SequenceDecoder<4> = SequenceDecoder::new();

    seq.append(Symbol::Dash);
    seq.append(Symbol::Dot);
    seq.append(Symbol::Dot);
    seq.append(Symbol::Dot);

    // Full: these must not displace the stored prefix
    seq.append(Symbol::Dash);
    seq.append(Symbol::Dash);

    assert_eq!(seq.pattern().as_str(), "-...");
    assert_eq!(seq.decode(), DecodeResult::Resolved('B'));
}
