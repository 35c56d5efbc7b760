// SPDX-License-Identifier: PMPL-1.0-or-later

//! Behaviour of the classifier and pseudo-translator as seen by callers

use pseudoloc::i18n::{is_locale_identifier, PSEUDO_LOCALE};
use pseudoloc::pipeline::transform_entries;
use pseudoloc::pseudo::{pseudofy, Pseudofier};
use pseudoloc::types::{OpaqueValue, ResourceEntry, ResourceValue};

#[test]
fn test_locale_identifiers_in_any_case() {
    for tag in ["en-US", "en-us", "EN-us", "fr", "FR", "qps-ploc", "zh-Hant-TW", "pt-br"] {
        assert!(is_locale_identifier(tag), "{} should classify as a locale", tag);
    }
}

#[test]
fn test_non_locales_are_rejected() {
    for value in ["Hello World", "", "123", "OK", "Cancel", "en-US!", "\u{0}", "\r\n"] {
        assert!(!is_locale_identifier(value), "{:?} should be text", value);
    }
}

#[test]
fn test_classifier_is_total_over_odd_input() {
    let long = "a".repeat(10_000);
    let samples = [
        long.as_str(),
        "-",
        "--",
        "en-",
        "-en",
        "en--US",
        "日本語",
        "en-US-x-private",
        "\u{200B}en",
    ];
    for value in samples {
        let _ = is_locale_identifier(value);
    }
}

#[test]
fn test_pseudofy_properties() {
    assert_eq!(pseudofy(""), "");
    assert_eq!(pseudofy("12345"), "12345");
    assert_eq!(pseudofy("Hello World"), "Héllö Wörld");

    let input = "Hello {0}, you have {1} items";
    let out = pseudofy(input);
    assert_eq!(out, pseudofy(input));
    assert!(out.contains("{0}"));
    assert!(out.contains("{1}"));
}

#[test]
fn test_padding_never_splits_placeholders() {
    let pseudo = Pseudofier::new().with_expansion(1.0).with_brackets(true);
    let out = pseudo.pseudofy("Items: {0:N0} of {1}");
    assert!(out.starts_with('['));
    assert!(out.ends_with(']'));
    assert!(out.contains("{0:N0}"));
    assert!(out.contains("{1}"));
    assert!(out.contains(" öf "));
}

#[test]
fn test_entry_scenarios() {
    let entries = vec![
        ResourceEntry::text("Greeting", "Hello World"),
        ResourceEntry::text("MetaLocale", "en-US"),
        ResourceEntry::opaque(
            "Count",
            OpaqueValue {
                raw: "42".to_string(),
                type_name: Some("System.Int32, mscorlib".to_string()),
                mime_type: None,
            },
        ),
    ];

    let (out, _) = transform_entries(&entries, PSEUDO_LOCALE, &Pseudofier::new());

    assert_eq!(out[0].value, ResourceValue::Text("Héllö Wörld".to_string()));
    assert_eq!(out[1].value, ResourceValue::Text("qps-ploc".to_string()));
    match &out[2].value {
        ResourceValue::Opaque(opaque) => {
            assert_eq!(opaque.raw, "42");
            assert_eq!(opaque.type_name.as_deref(), Some("System.Int32, mscorlib"));
        }
        other => panic!("Count should stay typed, got {:?}", other),
    }
}
