//! String helpers: tokenizing, lenient number parsing, section mapping,
//! and the XOR cipher used for obfuscated save payloads.

/// How wide one section is, in world units.
pub const SECTION_WIDTH: f32 = 100.0;

/// Splits `s` on `delim`.
///
/// Adjacent delimiters produce empty tokens (`"a,b,,c"` gives
/// `["a", "b", "", "c"]`), a string without the delimiter is a single
/// token, the empty string has no tokens, and a trailing delimiter does
/// not produce a trailing empty token.
pub fn split_delimited(s: &str, delim: char) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(s.len() / 2);
    let mut pos = 0;
    while pos < s.len() {
        match s[pos..].find(delim) {
            Some(i) => {
                tokens.push(&s[pos..pos + i]);
                pos += i + delim.len_utf8();
            }
            None => {
                tokens.push(&s[pos..]);
                break;
            }
        }
    }
    tokens
}

/// Parses the longest integer prefix of `s`, or 0 if there is none.
///
/// Level data interleaves numbers with junk, so `"12abc"` is 12 and
/// garbage is 0 rather than an error.
pub fn parse_int(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    s[..end].parse().unwrap_or(0)
}

/// Parses the longest float prefix of `s`, or 0.0 if there is none.
pub fn parse_float(s: &str) -> f32 {
    s[..float_prefix_len(s)].parse().unwrap_or(0.0)
}

/// Length of the leading `[sign] digits [. digits] [exponent]` run.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mantissa_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // "1." and ".5" both count; a bare "." doesn't.
        if frac_end > end + 1 || end > mantissa_start {
            end = frac_end;
        }
    }
    if end == mantissa_start {
        return 0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    end
}

/// Maps an x coordinate to its section index.
///
/// Everything left of the origin lands in section 0.
pub fn section_for_pos(x: f32) -> usize {
    (x / SECTION_WIDTH).max(0.0) as usize
}

/// XORs every byte with `key`, in place. Applying it twice with the same
/// key restores the original bytes.
pub fn xor_bytes(data: &mut [u8], key: u8) {
    for byte in data {
        *byte ^= key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_tokens_between_delimiters() {
        assert_eq!(split_delimited("a,b,,c", ','), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn split_without_delimiter_is_one_token() {
        assert_eq!(split_delimited("whole", ','), vec!["whole"]);
    }

    #[test]
    fn split_edge_cases() {
        assert!(split_delimited("", ',').is_empty());
        // No trailing empty token, but a leading one.
        assert_eq!(split_delimited("a,", ','), vec!["a"]);
        assert_eq!(split_delimited(",a", ','), vec!["", "a"]);
        assert_eq!(split_delimited(",", ','), vec![""]);
    }

    #[test]
    fn split_multibyte_delimiter() {
        assert_eq!(split_delimited("x→y→z", '→'), vec!["x", "y", "z"]);
    }

    #[test]
    fn parse_int_is_lenient() {
        assert_eq!(parse_int("123"), 123);
        assert_eq!(parse_int("-5"), -5);
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("12abc"), 12);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("-"), 0);
        // Out of range parses to the fallback, like from_chars leaving
        // the output untouched.
        assert_eq!(parse_int("99999999999999"), 0);
    }

    #[test]
    fn parse_float_is_lenient() {
        assert_eq!(parse_float("0.5"), 0.5);
        assert_eq!(parse_float("-1.25"), -1.25);
        assert_eq!(parse_float("3x"), 3.0);
        assert_eq!(parse_float("2e2"), 200.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1."), 1.0);
        assert_eq!(parse_float("."), 0.0);
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float("nope"), 0.0);
    }

    #[test]
    fn section_is_floor_division_clamped_at_zero() {
        assert_eq!(section_for_pos(250.0), 2);
        assert_eq!(section_for_pos(99.0), 0);
        assert_eq!(section_for_pos(100.0), 1);
        assert_eq!(section_for_pos(0.0), 0);
        assert_eq!(section_for_pos(-1.0), 0);
        assert_eq!(section_for_pos(-1000.0), 0);
    }

    #[test]
    fn xor_twice_is_identity() {
        let original = b"1;2;3;colors=4".to_vec();
        let mut data = original.clone();
        xor_bytes(&mut data, 11);
        assert_ne!(data, original);
        xor_bytes(&mut data, 11);
        assert_eq!(data, original);
    }

    #[test]
    fn xor_with_zero_key_is_identity() {
        let mut data = b"unchanged".to_vec();
        xor_bytes(&mut data, 0);
        assert_eq!(data, b"unchanged");
    }
}
