use proptest::prelude::*;

// First digit is bounded by the latitude range, second by the longitude
// range; the remaining pair digits may use the whole alphabet.
const FULL_CODE_PATTERN: &str =
    "[2-9C][2-9CFGHJMPQRV][2-9CFGHJMPQRVWX]{6}\\+([2-9CFGHJMPQRVWX]{2,7})?";

const SHORT_CODE_PATTERN: &str = "([2-9CFGHJMPQRVWX]{2}|[2-9CFGHJMPQRVWX]{4})\\+[2-9CFGHJMPQRVWX]{2,5}";

proptest! {
    #[test]
    fn prop_generated_full_codes_are_valid(code in FULL_CODE_PATTERN) {
        prop_assert!(format::is_valid(&code), "{code}");
        prop_assert!(format::is_full(&code));
        prop_assert!(!format::is_short(&code));
        prop_assert!(!format::is_padded(&code));
    }

    #[test]
    fn prop_generated_short_codes_are_valid(code in SHORT_CODE_PATTERN) {
        prop_assert!(format::is_valid(&code), "{code}");
        prop_assert!(format::is_short(&code));
        prop_assert!(!format::is_full(&code));
    }

    #[test]
    fn prop_validity_is_case_insensitive(code in "[0-9A-Za-z+]{0,16}") {
        prop_assert_eq!(
            format::is_valid(&code),
            format::is_valid(&code.to_ascii_lowercase())
        );
    }

    #[test]
    fn prop_classification_is_exclusive(code in "\\PC*") {
        if format::is_valid(&code) {
            prop_assert!(format::is_full(&code) ^ format::is_short(&code));
        } else {
            prop_assert!(!format::is_full(&code));
            prop_assert!(!format::is_short(&code));
            prop_assert!(!format::is_padded(&code));
        }
    }

    #[test]
    fn prop_significant_digits_bounded(code in FULL_CODE_PATTERN) {
        let digits = format::significant_digits(&code);
        prop_assert!(digits.len() <= alphabet::MAX_DIGIT_COUNT);
        prop_assert!(digits.bytes().all(|b| alphabet::digit_value(b).is_some()));
    }
}
