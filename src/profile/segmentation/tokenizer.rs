//! Section tokenization
//!
//! Splits a section's text into tokens. Each token carries two strings: the text stored
//! in the output field and the lowercase key the category matchers look up.

/// Delimiter between attribute values in section text.
pub const DELIMITER: &str = ", ";

/// One comma-separated piece of section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text kept in the output field.
    pub stored: String,
    /// Normalized text handed to the matchers.
    pub key: String,
}

/// Rules for turning section text into tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    conjunction: Option<String>,
    stored_strip: Vec<String>,
    key_strip: Vec<String>,
}

impl Tokenizer {
    /// Split on [`DELIMITER`] only.
    pub fn plain() -> Self {
        Tokenizer::default()
    }

    /// Background text joins list items with " and" and prefixes them with verbs and
    /// qualifiers ("Speaks some Spanish", "Dropped out of college").
    pub fn background() -> Self {
        Tokenizer::plain()
            .with_conjunction(" and")
            .strip_stored(["Speaks"])
            .strip_key(["some", "fluently", "Working on", "Attended", "Dropped out of"])
    }

    /// Rewrite `conjunction` to a delimiter before splitting.
    pub fn with_conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = Some(conjunction.into());
        self
    }

    /// Words removed from the stored token text.
    pub fn strip_stored<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stored_strip.extend(words.into_iter().map(Into::into));
        self
    }

    /// Words removed from the match key only.
    pub fn strip_key<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_strip.extend(words.into_iter().map(Into::into));
        self
    }

    /// Tokens of `text` in order. Tokens whose key is empty are left out.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let text = match &self.conjunction {
            Some(conjunction) => text.replace(conjunction.as_str(), ","),
            None => text.to_string(),
        };

        text.split(DELIMITER)
            .filter_map(|piece| {
                let stored = strip_all(piece, &self.stored_strip).trim().to_string();
                let key = strip_all(&stored, &self.key_strip).trim().to_lowercase();
                if key.is_empty() {
                    None
                } else {
                    Some(Token { stored, key })
                }
            })
            .collect()
    }
}

fn strip_all(text: &str, words: &[String]) -> String {
    words
        .iter()
        .fold(text.to_string(), |acc, word| acc.replace(word.as_str(), ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.stored.as_str()).collect()
    }

    #[test]
    fn test_plain_splits_on_comma_space() {
        let tokens = Tokenizer::plain().tokenize("Straight, Woman, Single");
        assert_eq!(stored(&tokens), vec!["Straight", "Woman", "Single"]);
        assert_eq!(tokens[1].key, "woman");
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(Tokenizer::plain().tokenize("").is_empty());
        assert!(Tokenizer::background().tokenize("   ").is_empty());
    }

    #[test]
    fn test_background_splits_conjunction_and_strips_speaks() {
        let tokens =
            Tokenizer::background().tokenize("Speaks English (fluently) and Spanish (okay)");
        assert_eq!(stored(&tokens), vec!["English (fluently)", "Spanish (okay)"]);
        assert_eq!(tokens[0].key, "english ()");
        assert_eq!(tokens[1].key, "spanish (okay)");
    }

    #[test]
    fn test_background_key_drops_education_verbs() {
        let tokens = Tokenizer::background().tokenize("Dropped out of law school");
        assert_eq!(tokens[0].stored, "Dropped out of law school");
        assert_eq!(tokens[0].key, "law school");
    }

    #[test]
    fn test_token_of_only_qualifiers_is_skipped() {
        let tokens = Tokenizer::background().tokenize("Speaks, Asian");
        assert_eq!(stored(&tokens), vec!["Asian"]);
    }
}
