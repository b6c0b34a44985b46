//! Display text normalization
//!
//! Profile pages render a handful of typographic characters (curly quotes, prime
//! marks, non-breaking spaces) where users type plain ASCII. Decoded values and
//! essay titles go through [`replace_chars`] so callers can compare against the
//! ASCII spellings.

/// The em-dash the remote pages show for an attribute that has no value.
pub const UNSET_SENTINEL: &str = "\u{2014}";

const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{2032}', "'"),
    ('\u{201c}', "\""),
    ('\u{201d}', "\""),
    ('\u{2033}', "\""),
    ('\u{00a0}', " "),
    ('\u{2026}', "..."),
];

/// Replace known non-ASCII artifacts with their ASCII equivalents.
pub fn replace_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_curly_height_quotes() {
        assert_eq!(replace_chars("5\u{2019}6\u{201d}"), "5'6\"");
    }

    #[test]
    fn test_leaves_ascii_untouched() {
        assert_eq!(replace_chars("Athletic"), "Athletic");
    }

    #[test]
    fn test_replaces_nbsp_and_ellipsis() {
        assert_eq!(replace_chars("a\u{00a0}b\u{2026}"), "a b...");
    }
}
