//! CSS numeric literal grammar.
//!
//! `[-+]?(digits | digits? '.' digits)([eE][-+]?digits)?`

/// Length of the longest numeric-literal prefix of `text` (0 if none).
///
/// Splits a dimension token such as `1.5e3px` into its number and unit
/// the same way the scanner delimited it.
pub fn number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut has_digits = int_digits > 0;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digit_run(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
            has_digits = true;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digit_run(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Whether all of `text` is one numeric literal.
#[inline]
pub fn is_number(text: &str) -> bool {
    !text.is_empty() && number_len(text) == text.len()
}

/// Numeric value of `text`, if it is a numeric literal.
pub fn number_value(text: &str) -> Option<f64> {
    if is_number(text) {
        text.parse().ok()
    } else {
        None
    }
}
