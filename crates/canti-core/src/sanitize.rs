//! Edge stripping for verses.

/// Characters stripped from both ends of a sanitized verse: ASCII
/// punctuation, space, newline and the poem's quotation marks.
pub const EXCLUDED_CHARS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', ' ', '\n', '«', '»',
    '’',
];

#[must_use]
pub fn is_excluded(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, ' ' | '\n' | '«' | '»' | '’')
}

/// Strip excluded characters from both ends; interior characters are kept.
#[must_use]
pub fn sanitize_verse(verse: &str) -> &str {
    verse.trim_matches(is_excluded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_and_predicate_agree() {
        for c in EXCLUDED_CHARS {
            assert!(is_excluded(*c), "{c:?} should be excluded");
        }
        let ascii_punct = (0u8..128).filter(|b| b.is_ascii_punctuation()).count();
        assert_eq!(EXCLUDED_CHARS.len(), ascii_punct + 5);
    }

    #[test]
    fn strips_quotes_and_punctuation_at_edges() {
        assert_eq!(
            sanitize_verse("«Or se’ tu quel Virgilio»,\n"),
            "Or se’ tu quel Virgilio"
        );
        assert_eq!(
            sanitize_verse("  che la diritta via era smarrita.  "),
            "che la diritta via era smarrita"
        );
    }

    #[test]
    fn keeps_interior_characters() {
        assert_eq!(
            sanitize_verse("l’amor che move il sole e l’altre stelle."),
            "l’amor che move il sole e l’altre stelle"
        );
    }

    #[test]
    fn does_not_strip_tabs_or_letters() {
        assert_eq!(sanitize_verse("\tverso"), "\tverso");
        assert_eq!(sanitize_verse("...!?"), "");
    }
}
