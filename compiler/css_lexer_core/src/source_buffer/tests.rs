use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("a{b:c}");
    assert_eq!(buf.len(), 6);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"a{b:c}");
    assert_eq!(buf.as_sentinel_bytes()[6], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "content: \"\u{2192}\"";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn interior_null_is_kept() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 58, 59, 60, 63, 64, 65, 127, 128, 1000] {
        let source = ".".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {len}",
            buf.as_sentinel_bytes().len(),
        );
    }
}

#[test]
fn lookahead_padding_always_present() {
    // Lengths around the alignment boundary are the ones that used to leave
    // no room past the sentinel.
    for len in 55..=70 {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert!(
            buf.as_sentinel_bytes().len() >= len + 1 + LOOKAHEAD,
            "missing lookahead padding for source length {len}"
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("div");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.source_len(), 3);
}
