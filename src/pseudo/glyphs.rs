// SPDX-License-Identifier: PMPL-1.0-or-later

//! Glyph substitution table.
//!
//! Each mapped letter is replaced by one accented glyph, so the table is a
//! strict one-to-one character mapping and never changes the character
//! count of a string.

/// Returns the pseudo glyph for `c`, or `None` when `c` passes through.
pub fn substitute(c: char) -> Option<char> {
    match c {
        'a' => Some('å'),
        'c' => Some('ç'),
        'e' => Some('é'),
        'i' => Some('í'),
        'n' => Some('ñ'),
        'o' => Some('ö'),
        's' => Some('š'),
        'u' => Some('ü'),
        'y' => Some('ý'),
        'z' => Some('ž'),
        'A' => Some('Å'),
        'C' => Some('Ç'),
        'E' => Some('É'),
        'I' => Some('Í'),
        'N' => Some('Ñ'),
        'O' => Some('Ö'),
        'S' => Some('Š'),
        'U' => Some('Ü'),
        'Y' => Some('Ý'),
        'Z' => Some('Ž'),
        _ => None,
    }
}

/// Maps a single character, passing unmapped characters through.
pub fn pseudo_char(c: char) -> char {
    substitute(c).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_accented() {
        assert_eq!(pseudo_char('e'), 'é');
        assert_eq!(pseudo_char('O'), 'Ö');
    }

    #[test]
    fn digits_and_punctuation_pass_through() {
        for c in "0123456789{}%$.,!? \t\n".chars() {
            assert_eq!(substitute(c), None, "{c:?} should be unmapped");
        }
    }

    #[test]
    fn output_glyphs_are_not_remapped() {
        for c in ('a'..='z').chain('A'..='Z') {
            if let Some(glyph) = substitute(c) {
                assert_eq!(substitute(glyph), None);
                assert_ne!(glyph, c);
            }
        }
    }
}
