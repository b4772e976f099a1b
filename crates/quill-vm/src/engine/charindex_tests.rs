use super::charindex::CharIndex;
use super::error::EvalError;

#[test]
fn ascii_offsets_equal_byte_offsets() {
    let index = CharIndex::build(b"hello").unwrap();
    assert_eq!(index.len(), 6);
    for byte in 0..=5 {
        assert_eq!(index.codepoint(byte), byte);
    }
    assert_eq!(index.char_count(), 5);
}

#[test]
fn empty_input_has_single_trailing_entry() {
    let index = CharIndex::build(b"").unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.codepoint(0), 0);
    assert_eq!(index.char_count(), 0);
    assert!(index.is_empty());
}

#[test]
fn multibyte_bytes_share_a_codepoint() {
    // "αx": U+03B1 is two bytes (0xCE 0xB1), then ASCII 'x'.
    let bytes = "αx".as_bytes();
    let index = CharIndex::build(bytes).unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(index.codepoint(0), 0);
    assert_eq!(index.codepoint(1), 0);
    assert_eq!(index.codepoint(2), 1);
    assert_eq!(index.codepoint(3), 2);
    assert_eq!(index.char_count(), 2);
}

#[test]
fn four_byte_codepoint() {
    // U+1F600 encodes as four bytes.
    let bytes = "😀a".as_bytes();
    let index = CharIndex::build(bytes).unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(index.codepoint(0), 0);
    assert_eq!(index.codepoint(3), 0);
    assert_eq!(index.codepoint(4), 1);
    assert_eq!(index.char_count(), 2);
}

#[test]
fn entries_are_non_decreasing_and_start_at_zero() {
    let bytes = "aé漢😀z".as_bytes();
    let index = CharIndex::build(bytes).unwrap();
    assert_eq!(index.len(), bytes.len() + 1);
    assert_eq!(index.codepoint(0), 0);
    let mut previous = 0;
    for byte in 0..index.len() {
        let cp = index.codepoint(byte);
        assert!(cp >= previous);
        previous = cp;
    }
    assert_eq!(index.char_count(), 5);
}

#[test]
fn illegal_bytes_are_rejected() {
    let err = CharIndex::build(&[b'a', 0xfe, b'b']).unwrap_err();
    assert_eq!(
        err,
        EvalError::Encoding {
            byte: 0xfe,
            offset: 1
        }
    );
    assert!(CharIndex::build(&[0xff]).is_err());
}

#[test]
fn next_boundary_steps_over_whole_characters() {
    let bytes = "αx".as_bytes();
    let index = CharIndex::build(bytes).unwrap();
    // From the start of the two-byte character to the start of 'x'.
    assert_eq!(index.next_boundary(0), 2);
    assert_eq!(index.next_boundary(2), 3);
}

#[test]
fn next_boundary_on_ascii_advances_one_byte() {
    let index = CharIndex::build(b"ab").unwrap();
    assert_eq!(index.next_boundary(0), 1);
    assert_eq!(index.next_boundary(1), 2);
}
