//! Regex-driven fuzzy map

use super::{CategoryMatcher, Code};
use regex::{Regex, RegexBuilder};

/// Ordered `(pattern, code)` pairs; the first pattern matching the token wins.
///
/// Patterns keep the semantics they were written with: an unanchored pattern is
/// searched anywhere in the token, so anchor it when a whole-token match is meant.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMap {
    patterns: Vec<(Regex, Code)>,
}

impl FuzzyMap {
    pub fn from_patterns<'a, I>(pairs: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, Code)>,
    {
        let patterns = pairs
            .into_iter()
            .map(|(pattern, code)| Ok((compile(pattern)?, code)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(FuzzyMap { patterns })
    }

    /// Build a map from literal names, several names per code.
    ///
    /// Each name is escaped and must start the token and be followed by whitespace or
    /// the end of the token, so "c++" matches "C++ (poorly)" without matching "c".
    pub fn from_aliases<'a, I>(groups: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a [&'a str], Code)>,
    {
        let patterns = groups
            .into_iter()
            .map(|(names, code)| {
                let alternation = names
                    .iter()
                    .map(|name| regex::escape(name))
                    .collect::<Vec<_>>()
                    .join("|");
                Ok((compile(&format!(r"^(?:{})(?:\s|$)", alternation))?, code))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(FuzzyMap { patterns })
    }

    pub fn lookup(&self, token: &str) -> Option<Code> {
        let token = token.trim();
        self.patterns
            .iter()
            .find(|(pattern, _)| pattern.is_match(token))
            .map(|(_, code)| *code)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

impl CategoryMatcher for FuzzyMap {
    fn find(&self, token: &str) -> Option<Code> {
        self.lookup(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_patterns_match_whole_token() {
        let genders = FuzzyMap::from_patterns([("^man$", 1), ("^woman$", 2)]).unwrap();
        assert_eq!(genders.lookup("Woman"), Some(2));
        assert_eq!(genders.lookup("man"), Some(1));
        assert_eq!(genders.lookup("trans man"), None);
    }

    #[test]
    fn test_first_pattern_wins() {
        let map = FuzzyMap::from_patterns([("ship", 1), ("ships", 2)]).unwrap();
        assert_eq!(map.lookup("ships"), Some(1));
    }

    #[test]
    fn test_aliases_escape_plus() {
        let langs =
            FuzzyMap::from_aliases([(&["c++"][..], 92), (&["c"][..], 91)]).unwrap();
        assert_eq!(langs.lookup("c++ (poorly)"), Some(92));
        assert_eq!(langs.lookup("c ()"), Some(91));
        assert_eq!(langs.lookup("cc"), None);
    }

    #[test]
    fn test_aliases_share_a_code() {
        let langs = FuzzyMap::from_aliases([(&["persian", "farsi"][..], 40)]).unwrap();
        assert_eq!(langs.lookup("Farsi (okay)"), Some(40));
        assert_eq!(langs.lookup("persian"), Some(40));
    }

    #[test]
    fn test_miss_is_none() {
        let map = FuzzyMap::from_patterns([("^leo$", 5)]).unwrap();
        assert_eq!(map.find("lion"), None);
    }
}
