// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pseudo-translation of resource text.
//!
//! Translatable text is rewritten with accented look-alike glyphs so that
//! untranslated or hard-coded strings stand out in a running UI, while the
//! text stays readable to a tester:
//!
//! ```text
//! "Hello World"                     -> "Héllö Wörld"
//! "Hello {0}, you have {1} items"   -> "Héllö {0}, ýöü håvé {1} ítémš"
//! ```
//!
//! Format placeholders, printf conversions, markup tags and backslash
//! escapes are copied verbatim (see [`placeholders`]). Everything else goes
//! through the substitution table in [`glyphs`].
//!
//! [`pseudofy`] is the plain one-to-one transform. [`Pseudofier`] adds the
//! optional decorations used to catch truncation: expansion padding and
//! bracketing. Padding is appended after the transformed text, never inside
//! a placeholder.

pub mod glyphs;
pub mod placeholders;

use placeholders::Segment;

/// Upper bound for the expansion ratio.
pub const MAX_EXPANSION: f64 = 2.0;

/// Character appended to simulate translation growth.
pub const PADDING_CHAR: char = '!';

/// Pseudo-translate `text` with the default glyph table and no decoration.
///
/// Deterministic and total: the output has exactly as many characters as the
/// input, and `pseudofy("") == ""`.
///
/// # Examples
/// ```
/// assert_eq!(pseudoloc::pseudo::pseudofy("Hello World"), "Héllö Wörld");
/// assert_eq!(pseudoloc::pseudo::pseudofy("{0} files"), "{0} fíléš");
/// ```
pub fn pseudofy(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for segment in placeholders::segments(text) {
        match segment {
            Segment::Text(chunk) => out.extend(chunk.chars().map(glyphs::pseudo_char)),
            Segment::Placeholder(token) => out.push_str(token),
        }
    }
    out
}

/// Configurable pseudo-translator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pseudofier {
    /// Extra length to append, as a fraction of the input's character count.
    pub expansion: f64,
    /// Wrap the output in `[` `]`.
    pub brackets: bool,
}

impl Default for Pseudofier {
    fn default() -> Self {
        Self {
            expansion: 0.0,
            brackets: false,
        }
    }
}

impl Pseudofier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expansion ratio, clamped to `0.0..=MAX_EXPANSION`.
    pub fn with_expansion(mut self, ratio: f64) -> Self {
        self.expansion = if ratio.is_finite() {
            ratio.clamp(0.0, MAX_EXPANSION)
        } else {
            0.0
        };
        self
    }

    pub fn with_brackets(mut self, brackets: bool) -> Self {
        self.brackets = brackets;
        self
    }

    /// Number of padding characters appended for `text`.
    pub fn padding_len(&self, text: &str) -> usize {
        if self.expansion <= 0.0 {
            return 0;
        }
        (text.chars().count() as f64 * self.expansion).ceil() as usize
    }

    /// Pseudo-translate `text`, then apply padding and brackets.
    ///
    /// Empty input stays empty regardless of decoration.
    pub fn pseudofy(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        if self.brackets {
            out.push('[');
        }
        out.push_str(&pseudofy(text));
        out.extend(std::iter::repeat(PADDING_CHAR).take(self.padding_len(text)));
        if self.brackets {
            out.push(']');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world() {
        assert_eq!(pseudofy("Hello World"), "Héllö Wörld");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(pseudofy(""), "");
        assert_eq!(
            Pseudofier::new().with_expansion(0.5).with_brackets(true).pseudofy(""),
            ""
        );
    }

    #[test]
    fn unmapped_text_is_unchanged() {
        assert_eq!(pseudofy("12345"), "12345");
        assert_eq!(pseudofy("Hřď!?"), "Hřď!?");
    }

    #[test]
    fn deterministic() {
        let input = "The quick brown fox {0}";
        assert_eq!(pseudofy(input), pseudofy(input));
    }

    #[test]
    fn character_count_is_preserved() {
        let input = "Sync %d of %s items <b>now</b>";
        assert_eq!(pseudofy(input).chars().count(), input.chars().count());
    }

    #[test]
    fn placeholders_survive() {
        let out = pseudofy("Hello {0}, you have {1} items");
        assert_eq!(out, "Héllö {0}, ýöü håvé {1} ítémš");

        let out = pseudofy("Welcome {userName}, %s saved");
        assert!(out.contains("{userName}"));
        assert!(out.contains("%s"));
        assert!(out.starts_with("Wélçömé"));
    }

    #[test]
    fn percent_before_a_word_is_translated() {
        assert_eq!(pseudofy("100%sure"), "100%šüré");
        assert_eq!(pseudofy("10%off"), "10%öff");
    }

    #[test]
    fn padding_goes_after_placeholders() {
        let pseudo = Pseudofier::new().with_expansion(0.5);
        assert_eq!(pseudo.pseudofy("Open {0}"), "Öpéñ {0}!!!!");
    }

    #[test]
    fn brackets_wrap_the_whole_value() {
        let pseudo = Pseudofier::new().with_brackets(true);
        assert_eq!(pseudo.pseudofy("Save"), "[Šåvé]");
    }

    #[test]
    fn expansion_is_clamped() {
        assert_eq!(Pseudofier::new().with_expansion(10.0).expansion, MAX_EXPANSION);
        assert_eq!(Pseudofier::new().with_expansion(-1.0).expansion, 0.0);
        assert_eq!(Pseudofier::new().with_expansion(f64::NAN).expansion, 0.0);
    }
}
