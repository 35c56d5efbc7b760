// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifier classification.
//!
//! Resource files conventionally keep a few "meta" entries whose value is a
//! culture name rather than translatable text. The classifier here decides
//! which values are culture names so the generator can rewrite them to the
//! pseudo-locale instead of mangling them.
//!
//! ## Design
//!
//! Syntax comes from `unic-langid` (BCP 47 language identifiers, canonical
//! casing). On top of the syntax check every subtag must be present in a
//! registry table:
//!
//! | Subtag   | Registry                          | Example |
//! |----------|-----------------------------------|---------|
//! | language | ISO 639-1, selected ISO 639-2/3   | `fr`, `haw` |
//! | script   | ISO 15924                         | `Latn`  |
//! | region   | ISO 3166-1 alpha-2, UN M.49       | `US`, `419` |
//!
//! Variants are not accepted. The reserved pseudo-locales (`qps-ploc`,
//! `qps-ploca`, `qps-plocm`) are always valid.
//!
//! Validation is a total lookup. Nothing here panics or returns an error:
//! anything that fails to resolve is simply "not a locale".

mod iso639;
mod subtags;

use std::str::FromStr;
use unic_langid::LanguageIdentifier;

pub use iso639::{is_valid_iso639_1, is_valid_iso639_3, language_name};
pub use subtags::{is_valid_region, is_valid_script};

/// The pseudo-locale written into generated file names and into entries that
/// hold a culture name.
pub const PSEUDO_LOCALE: &str = "qps-ploc";

/// Reserved pseudo-locales: base, accented and mirrored.
const RESERVED_PSEUDO_LOCALES: [&str; 3] = ["qps-ploc", "qps-ploca", "qps-plocm"];

/// Resolve `value` as a known locale identifier.
///
/// Surrounding whitespace is ignored and matching is case-insensitive, so
/// `" en-us "` resolves to `en-US`. Only `-` separates subtags.
///
/// Returns `None` for anything that does not resolve: empty input, malformed
/// syntax, unknown subtags, variants.
pub fn parse_locale(value: &str) -> Option<LanguageIdentifier> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }

    if let Some(reserved) = RESERVED_PSEUDO_LOCALES
        .iter()
        .find(|tag| tag.eq_ignore_ascii_case(trimmed))
    {
        return LanguageIdentifier::from_str(reserved).ok();
    }

    LanguageIdentifier::from_str(trimmed)
        .ok()
        .filter(is_registered)
}

/// Returns `true` iff `value` can be interpreted as a locale identifier.
///
/// This is a best-effort heuristic. Any short word that happens to be a
/// language subtag is accepted too: `"it"`, `"no"`, `"be"` and `"to"` all
/// classify as locales even when they were meant as text. Callers must not
/// treat the answer as authoritative.
///
/// # Examples
/// ```
/// use pseudoloc::i18n::is_locale_identifier;
///
/// assert!(is_locale_identifier("en-US"));
/// assert!(is_locale_identifier("fr"));
/// assert!(!is_locale_identifier("Hello World"));
/// assert!(!is_locale_identifier(""));
/// ```
pub fn is_locale_identifier(value: &str) -> bool {
    parse_locale(value).is_some()
}

fn is_registered(langid: &LanguageIdentifier) -> bool {
    let language = langid.language.to_string();
    let language_known = match language.len() {
        2 => is_valid_iso639_1(&language),
        3 => is_valid_iso639_3(&language),
        _ => false,
    };

    language_known
        && langid
            .script
            .as_ref()
            .map_or(true, |script| is_valid_script(&script.to_string()))
        && langid
            .region
            .as_ref()
            .map_or(true, |region| is_valid_region(&region.to_string()))
        && langid.variants().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_regional_cultures() {
        for tag in ["en", "en-US", "fr-FR", "de-CH", "zh-Hans", "sr-Latn-RS", "es-419", "haw-US"] {
            assert!(is_locale_identifier(tag), "{tag} should be a locale");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_locale_identifier("en-us"));
        assert!(is_locale_identifier("EN-US"));
        assert!(is_locale_identifier("ZH-hant-tw"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!(is_locale_identifier("  en-GB\t"));
        assert_eq!(
            parse_locale(" en-us ").map(|id| id.to_string()),
            Some("en-US".to_string())
        );
    }

    #[test]
    fn pseudo_locales_are_valid() {
        assert!(is_locale_identifier(PSEUDO_LOCALE));
        assert!(is_locale_identifier("qps-ploca"));
        assert!(is_locale_identifier("QPS-PLOCM"));
        assert!(!is_locale_identifier("qps"));
    }

    #[test]
    fn rejects_text_and_garbage() {
        for value in [
            "",
            "   ",
            "Hello World",
            "Hello",
            "123",
            "xx",
            "en_US",
            "en-ZZ",
            "en-Xxxx",
            "de-DE-1996",
            "und",
            "en\0",
            "\u{7}fr",
            "{0}",
        ] {
            assert!(!is_locale_identifier(value), "{value:?} should not be a locale");
        }
    }

    #[test]
    fn short_words_are_known_false_positives() {
        assert!(is_locale_identifier("it"));
        assert!(is_locale_identifier("no"));
    }
}
