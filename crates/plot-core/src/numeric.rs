/// Floating point type used for plot values and axis bounds.
pub type Real = f64;

/// Parse the longest numeric literal at the start of `input`.
///
/// Leading ECMAScript whitespace (see [`is_js_whitespace`]) is skipped and anything after the literal is ignored, so
/// `"3abc"` yields `3.0` and `" -1.5e3 px"` yields `-1500.0`. A signed
/// `Infinity` is accepted. Returns `None` when no literal starts the string;
/// `"NaN"` is not a literal and also yields `None`.
pub fn parse_float_prefix(input: &str) -> Option<Real> {
    let s = input.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            Real::NEG_INFINITY
        } else {
            Real::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone "." after digits is still part of the literal ("3." == 3).
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<Real>().ok()
}

/// The `WhiteSpace` and `LineTerminator` sets of ECMAScript. Narrower than
/// [`char::is_whitespace`]: U+0085 and the other control separators are excluded.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | ' '
            | '\u{a0}'
            | '\u{feff}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_only_js_whitespace() {
        assert_eq!(parse_float_prefix("\t\u{b}\u{c}\r\n 1"), Some(1.0));
        assert_eq!(parse_float_prefix("\u{a0}\u{feff}\u{3000}\u{2028}2"), Some(2.0));
        assert_eq!(parse_float_prefix("\u{2003}\u{202f}3"), Some(3.0));
        assert_eq!(parse_float_prefix("\u{85}5"), None);
        assert_eq!(parse_float_prefix("\u{1c}5"), None);
        assert_eq!(parse_float_prefix("\u{200b}5"), None);
    }

    #[test]
    fn parses_plain_literals() {
        assert_eq!(parse_float_prefix("3.14"), Some(3.14));
        assert_eq!(parse_float_prefix("-2"), Some(-2.0));
        assert_eq!(parse_float_prefix("1e5"), Some(100_000.0));
        assert_eq!(parse_float_prefix("+.5"), Some(0.5));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_float_prefix("3abc"), Some(3.0));
        assert_eq!(parse_float_prefix("  42 px"), Some(42.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("1e+"), Some(1.0));
        assert_eq!(parse_float_prefix("2.5.1"), Some(2.5));
        assert_eq!(parse_float_prefix("7-3"), Some(7.0));
    }

    #[test]
    fn infinity_literal() {
        assert_eq!(parse_float_prefix("Infinity"), Some(Real::INFINITY));
        assert_eq!(parse_float_prefix("-Infinityx"), Some(Real::NEG_INFINITY));
        assert_eq!(parse_float_prefix("inf"), None);
    }

    #[test]
    fn rejects_non_numeric_prefix() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("/topic/field"), None);
        assert_eq!(parse_float_prefix("0x10"), Some(0.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_literals_round_trip(v in -1.0e12_f64..1.0e12_f64) {
            let text = format!("{v}");
            prop_assert_eq!(parse_float_prefix(&text), Some(v));
        }

        #[test]
        fn suffix_does_not_change_value(v in -1.0e6_f64..1.0e6_f64, suffix in "[a-zA-Z/_ ]{0,8}") {
            let text = format!("{v}{suffix}");
            prop_assert_eq!(parse_float_prefix(&text), Some(v));
        }

        #[test]
        fn alphabetic_prefix_never_parses(s in "[a-zA-HJ-Z_/][a-zA-Z0-9_/]{0,12}") {
            prop_assert_eq!(parse_float_prefix(&s), None);
        }
    }
}
