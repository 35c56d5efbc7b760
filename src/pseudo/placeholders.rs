// SPDX-License-Identifier: PMPL-1.0-or-later

//! Detection of spans that must survive pseudo-translation untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static PROTECTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        // escaped braces
        r"\{\{|\}\}",
        // composite format items: {0}, {1,-8}, {0:N2}
        r"|\{[0-9]+(?:\s*,\s*-?[0-9]+)?(?::[^{}]*)?\}",
        // named placeholders: {name}, {user.Name}
        r"|\{[A-Za-z_][A-Za-z0-9_.]*\}",
        // printf: %%, %s, %1$s, %-5d, %.2f, %lld
        r"|%%",
        r"|%(?:[0-9]+\$)?[-+#0]*(?:\*|[0-9]+)?(?:\.(?:\*|[0-9]+))?(?:hh|ll|[hlLqjzt])?[diouxXeEfFgGaAcspn@]",
        // markup tags
        r"|</?[A-Za-z][^<>]*>",
        // literal backslash escapes
        r#"|\\[nrt\\"']"#,
    ))
    .expect("placeholder pattern is valid")
});

/// A piece of input text: either translatable or protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Byte ranges of every protected span in `text`, in order, non-overlapping.
pub fn protected_spans(text: &str) -> Vec<Range<usize>> {
    PROTECTED
        .find_iter(text)
        .map(|m| m.range())
        .filter(|span| !is_inside_word(text, span))
        .collect()
}

// A printf conversion running straight into a letter is prose ("100%sure").
fn is_inside_word(text: &str, span: &Range<usize>) -> bool {
    let token = &text[span.clone()];
    token.starts_with('%')
        && token != "%%"
        && text[span.end..]
            .chars()
            .next()
            .map_or(false, char::is_alphabetic)
}

/// Splits `text` into alternating text and placeholder segments.
///
/// Concatenating the segments yields `text` again.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for span in protected_spans(text) {
        if span.start > cursor {
            out.push(Segment::Text(&text[cursor..span.start]));
        }
        out.push(Segment::Placeholder(&text[span.clone()]));
        cursor = span.end;
    }
    if cursor < text.len() {
        out.push(Segment::Text(&text[cursor..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(text: &str) -> Vec<&str> {
        segments(text)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(p) => Some(p),
                Segment::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn composite_format_items() {
        assert_eq!(
            placeholders("Hello {0}, you have {1} items"),
            vec!["{0}", "{1}"]
        );
        assert_eq!(placeholders("Total: {0:N2} {1,-8}"), vec!["{0:N2}", "{1,-8}"]);
        assert_eq!(placeholders("{{literal}}"), vec!["{{", "}}"]);
    }

    #[test]
    fn named_and_printf_placeholders() {
        assert_eq!(placeholders("Hi {userName}"), vec!["{userName}"]);
        assert_eq!(placeholders("%s of %1$d at %.2f%%"), vec!["%s", "%1$d", "%.2f", "%%"]);
    }

    #[test]
    fn percent_inside_a_word_is_text() {
        assert!(placeholders("100%sure").is_empty());
        assert!(placeholders("10%off").is_empty());
        assert_eq!(placeholders("%s files, 50%% done"), vec!["%s", "%%"]);
        assert_eq!(placeholders("%d%s"), vec!["%d", "%s"]);
    }

    #[test]
    fn markup_and_escapes() {
        assert_eq!(
            placeholders("<b>Save</b> now\\n"),
            vec!["<b>", "</b>", "\\n"]
        );
    }

    #[test]
    fn plain_text_is_a_single_segment() {
        assert_eq!(segments("Hello World"), vec![Segment::Text("Hello World")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn segments_reassemble_input() {
        let input = "Dear {name}, <i>%d</i> files {0:D3} left";
        let joined: String = segments(input)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(t) | Segment::Placeholder(t) => t,
            })
            .collect();
        assert_eq!(joined, input);
    }
}
