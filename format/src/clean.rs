//! Canonical form helpers.

use alphabet::{digit_value, MAX_DIGIT_COUNT};

/// Returns the canonical (upper-cased) form of a code string.
#[must_use]
pub fn canonicalize(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Returns the significant digits of a code.
///
/// Separator and padding are stripped, digits are upper-cased, and anything
/// past [`MAX_DIGIT_COUNT`] digits is dropped. Non-alphabet bytes are
/// skipped, so this is only meaningful on a code that already passed
/// [`is_valid`](crate::is_valid).
#[must_use]
pub fn significant_digits(code: &str) -> String {
    code.bytes()
        .filter(|&byte| digit_value(byte).is_some())
        .map(|byte| char::from(byte.to_ascii_uppercase()))
        .take(MAX_DIGIT_COUNT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_upper_cases() {
        assert_eq!(canonicalize("9c3xgvjg+8f"), "9C3XGVJG+8F");
        assert_eq!(canonicalize("9C3XGVJG+8F"), "9C3XGVJG+8F");
    }

    #[test]
    fn strips_separator() {
        assert_eq!(significant_digits("9C3XGVJG+8F"), "9C3XGVJG8F");
        assert_eq!(significant_digits("GVJG+8F"), "GVJG8F");
    }

    #[test]
    fn strips_padding() {
        assert_eq!(significant_digits("8FVC0000+"), "8FVC");
        assert_eq!(significant_digits("8FVCJJ00+"), "8FVCJJ");
    }

    #[test]
    fn truncates_to_max_digit_count() {
        // 8 + 9 digits; only the first 15 carry positional meaning.
        let digits = significant_digits("8FVC2222+222222222");
        assert_eq!(digits.len(), MAX_DIGIT_COUNT);
        assert_eq!(digits, "8FVC22222222222");
    }

    #[test]
    fn upper_cases_digits() {
        assert_eq!(significant_digits("9c3xgvjg+8f"), "9C3XGVJG8F");
    }
}
