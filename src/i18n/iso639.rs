// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 language subtag registry.
//!
//! Covers every ISO 639-1 two-letter code, plus the three-letter ISO 639-2/3
//! codes for which platform culture databases commonly ship a culture (they
//! have no two-letter equivalent). Lookups expect the lowercase form that
//! `unic-langid` canonicalises language subtags to.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(pseudoloc::i18n::is_valid_iso639_1("en"));
/// assert!(pseudoloc::i18n::is_valid_iso639_1("ja"));
/// assert!(!pseudoloc::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Validates three-letter language codes that name real cultures but have no
/// ISO 639-1 form (Hawaiian, Filipino, Cherokee, ...).
pub fn is_valid_iso639_3(code: &str) -> bool {
    matches!(
        code,
        "agq" | "arn" | "asa" | "ast" | "bas" | "bem" | "bez" | "bfz" | "bgc" | "bho" | "brx" | "byn"
            | "ccp" | "ceb" | "cgg" | "chr" | "ckb" | "dav" | "dje" | "doi" | "dsb" | "dua" | "dyo"
            | "ebu" | "ewo" | "fil" | "fur" | "gsw" | "guz" | "haw" | "hsb" | "ibb" | "jgo" | "jmc"
            | "kab" | "kam" | "kde" | "kea" | "khq" | "kkj" | "kln" | "kok" | "ksb" | "ksf" | "ksh"
            | "lag" | "lkt" | "lrc" | "luo" | "luy" | "mai" | "mas" | "mer" | "mfe" | "mgh" | "mgo"
            | "mni" | "moh" | "mua" | "mzn" | "naq" | "nds" | "nmg" | "nnh" | "nqo" | "nso" | "nus"
            | "nyn" | "prg" | "quc" | "quz" | "rof" | "rwk" | "sah" | "saq" | "sat" | "sbp" | "seh"
            | "ses" | "shi" | "sma" | "smj" | "smn" | "sms" | "syr" | "teo" | "tig" | "twq" | "tzm"
            | "vai" | "vun" | "wae" | "wal" | "xog" | "yav" | "yue" | "zgh"
    )
}

/// Returns the English name of a language code.
///
/// Returns `None` for unrecognised codes. Only the common languages are
/// named; used for the `classify` command's display.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "vi" => Some("Vietnamese"),
        "th" => Some("Thai"),
        "uk" => Some("Ukrainian"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "he" => Some("Hebrew"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "no" | "nb" => Some("Norwegian"),
        "hu" => Some("Hungarian"),
        "ro" => Some("Romanian"),
        "id" => Some("Indonesian"),
        "ms" => Some("Malay"),
        "haw" => Some("Hawaiian"),
        "fil" => Some("Filipino"),
        "qps" => Some("Pseudo"),
        _ => None,
    }
}
