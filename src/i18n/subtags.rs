// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script (ISO 15924) and region (ISO 3166-1, UN M.49) subtag registries.
//!
//! Inputs are expected in the canonical casing produced by `unic-langid`:
//! title-case scripts (`Latn`) and upper-case regions (`US`).

/// Validates a four-letter ISO 15924 script code used by culture names.
pub fn is_valid_script(code: &str) -> bool {
    matches!(
        code,
        "Adlm" | "Arab" | "Armn" | "Beng" | "Bopo" | "Brai" | "Cans" | "Cher" | "Cyrl" | "Deva"
            | "Ethi" | "Geor" | "Grek" | "Gujr" | "Guru" | "Hang" | "Hani" | "Hans" | "Hant"
            | "Hebr" | "Hira" | "Jpan" | "Kana" | "Khmr" | "Knda" | "Kore" | "Laoo" | "Latn"
            | "Mlym" | "Mong" | "Mtei" | "Mymr" | "Nkoo" | "Olck" | "Orya" | "Sinh" | "Syrc"
            | "Taml" | "Telu" | "Tfng" | "Thaa" | "Thai" | "Tibt" | "Vaii" | "Yiii"
    )
}

/// Validates a region subtag: an ISO 3166-1 alpha-2 code or a UN M.49 area
/// code such as `419` (Latin America).
pub fn is_valid_region(code: &str) -> bool {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit()) {
        return is_valid_m49(code);
    }
    matches!(
        code,
        "AD" | "AE" | "AF" | "AG" | "AI" | "AL" | "AM" | "AO" | "AQ" | "AR" | "AS" | "AT" | "AU" | "AW" | "AX" | "AZ"
            | "BA" | "BB" | "BD" | "BE" | "BF" | "BG" | "BH" | "BI" | "BJ" | "BL" | "BM" | "BN" | "BO" | "BQ" | "BR" | "BS" | "BT" | "BV" | "BW" | "BY" | "BZ"
            | "CA" | "CC" | "CD" | "CF" | "CG" | "CH" | "CI" | "CK" | "CL" | "CM" | "CN" | "CO" | "CR" | "CU" | "CV" | "CW" | "CX" | "CY" | "CZ"
            | "DE" | "DJ" | "DK" | "DM" | "DO" | "DZ"
            | "EC" | "EE" | "EG" | "EH" | "ER" | "ES" | "ET"
            | "FI" | "FJ" | "FK" | "FM" | "FO" | "FR"
            | "GA" | "GB" | "GD" | "GE" | "GF" | "GG" | "GH" | "GI" | "GL" | "GM" | "GN" | "GP" | "GQ" | "GR" | "GS" | "GT" | "GU" | "GW" | "GY"
            | "HK" | "HM" | "HN" | "HR" | "HT" | "HU"
            | "ID" | "IE" | "IL" | "IM" | "IN" | "IO" | "IQ" | "IR" | "IS" | "IT"
            | "JE" | "JM" | "JO" | "JP"
            | "KE" | "KG" | "KH" | "KI" | "KM" | "KN" | "KP" | "KR" | "KW" | "KY" | "KZ"
            | "LA" | "LB" | "LC" | "LI" | "LK" | "LR" | "LS" | "LT" | "LU" | "LV" | "LY"
            | "MA" | "MC" | "MD" | "ME" | "MF" | "MG" | "MH" | "MK" | "ML" | "MM" | "MN" | "MO" | "MP" | "MQ" | "MR" | "MS" | "MT" | "MU" | "MV" | "MW" | "MX" | "MY" | "MZ"
            | "NA" | "NC" | "NE" | "NF" | "NG" | "NI" | "NL" | "NO" | "NP" | "NR" | "NU" | "NZ"
            | "OM"
            | "PA" | "PE" | "PF" | "PG" | "PH" | "PK" | "PL" | "PM" | "PN" | "PR" | "PS" | "PT" | "PW" | "PY"
            | "QA"
            | "RE" | "RO" | "RS" | "RU" | "RW"
            | "SA" | "SB" | "SC" | "SD" | "SE" | "SG" | "SH" | "SI" | "SJ" | "SK" | "SL" | "SM" | "SN" | "SO" | "SR" | "SS" | "ST" | "SV" | "SX" | "SY" | "SZ"
            | "TC" | "TD" | "TF" | "TG" | "TH" | "TJ" | "TK" | "TL" | "TM" | "TN" | "TO" | "TR" | "TT" | "TV" | "TW" | "TZ"
            | "UA" | "UG" | "UM" | "US" | "UY" | "UZ"
            | "VA" | "VC" | "VE" | "VG" | "VI" | "VN" | "VU"
            | "WF" | "WS"
            | "XK"
            | "YE" | "YT"
            | "ZA" | "ZM" | "ZW"
    )
}

fn is_valid_m49(code: &str) -> bool {
    matches!(
        code,
        "001" | "002" | "003" | "005" | "009" | "011" | "013" | "014" | "015" | "017" | "018"
            | "019" | "021" | "029" | "030" | "034" | "035" | "039" | "053" | "054" | "057"
            | "061" | "142" | "143" | "145" | "150" | "151" | "154" | "155" | "202" | "419"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts() {
        assert!(is_valid_script("Latn"));
        assert!(is_valid_script("Hant"));
        assert!(!is_valid_script("Xxxx"));
        assert!(!is_valid_script("latn"));
    }

    #[test]
    fn regions() {
        assert!(is_valid_region("US"));
        assert!(is_valid_region("GB"));
        assert!(is_valid_region("419"));
        assert!(!is_valid_region("QQ"));
        assert!(!is_valid_region("999"));
        assert!(!is_valid_region("us"));
    }
}
