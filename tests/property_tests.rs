//! Property-based tests for slug derivation and contact-link generation.
//!
//! These use proptest to verify invariants across a wide range of inputs,
//! catching edge cases unit tests miss.

use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront_api::links::{digits_only, whatsapp_inquiry_url};
use storefront_api::services::catalog::slugify;

fn name_strategy() -> impl Strategy<Value = String> {
    // Printable-ish names with unicode, punctuation and whitespace mixed in
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z').prop_map(|c| c.to_string()),
            proptest::char::range('A', 'Z').prop_map(|c| c.to_string()),
            proptest::char::range('0', '9').prop_map(|c| c.to_string()),
            Just(" ".to_string()),
            Just("-".to_string()),
            Just("&".to_string()),
            Just("é".to_string()),
            Just("!".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn phone_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('0', '9').prop_map(|c| c.to_string()),
            Just(" ".to_string()),
            Just("-".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("+".to_string()),
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn slugs_are_always_url_safe(name in name_strategy()) {
        let slug = slugify(&name);
        prop_assert!(!slug.is_empty(), "slug must never be empty");
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "slug contains unsafe characters: {}",
            slug
        );
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"), "dashes must not repeat: {}", slug);
    }

    #[test]
    fn slugify_is_idempotent(name in name_strategy()) {
        let once = slugify(&name);
        let twice = slugify(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn digits_only_yields_digits(phone in phone_strategy()) {
        let cleaned = digits_only(&phone);
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn whatsapp_links_have_digit_phones_and_no_spaces(
        phone in phone_strategy(),
        name in name_strategy(),
    ) {
        let price = Decimal::new(4999, 2);
        match whatsapp_inquiry_url(&phone, &name, &price) {
            Some(url) => {
                let phone_segment = url
                    .strip_prefix("https://wa.me/")
                    .and_then(|rest| rest.split('?').next())
                    .unwrap_or("");
                prop_assert!(!phone_segment.is_empty());
                prop_assert!(phone_segment.chars().all(|c| c.is_ascii_digit()));
                prop_assert!(!url.contains(' '), "URL must be fully encoded: {}", url);
            }
            None => {
                // Only permissible when the number has no digits
                prop_assert!(digits_only(&phone).is_empty());
            }
        }
    }
}
