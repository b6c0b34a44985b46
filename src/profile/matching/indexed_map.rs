//! Index-ranked option map
//!
//! The remote form numbers the options of most drop-downs 1..n in display order and
//! uses 0 for "not specified". An [`IndexedMap`] is built from that ordered option list.
//! Options are regex patterns searched within the token, which lets a single option
//! such as `smok` recognize "Never smokes" or "Smokes sometimes".
//!
//! Options are tried in rank order unless [`IndexedMap::prefer`] moves one ahead, which
//! is needed when one option's text contains another's ("not very serious" contains
//! "very serious").

use super::{CategoryMatcher, Code};
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct IndexedMap {
    /// Options in matching order, each with its rank.
    options: Vec<(Regex, Code)>,
    default: Code,
}

impl IndexedMap {
    /// Compile `options` in order; option `i` encodes as `i + 1`. Default is 0.
    pub fn new(options: &[&str]) -> Result<Self, regex::Error> {
        let options = options
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
                Ok((regex, index as Code + 1))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(IndexedMap {
            options,
            default: 0,
        })
    }

    pub fn with_default(mut self, default: Code) -> Self {
        self.default = default;
        self
    }

    /// Try the option ranked `rank` before all others. Ranks are unchanged.
    pub fn prefer(mut self, rank: Code) -> Self {
        if let Some(position) = self.options.iter().position(|(_, code)| *code == rank) {
            let option = self.options.remove(position);
            self.options.insert(0, option);
        }
        self
    }

    pub fn default_code(&self) -> Code {
        self.default
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Rank of the first option found in `token`, or the default.
    pub fn lookup(&self, token: &str) -> Code {
        self.find(token).unwrap_or(self.default)
    }
}

impl CategoryMatcher for IndexedMap {
    fn find(&self, token: &str) -> Option<Code> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|(option, _)| option.is_match(token))
            .map(|(_, code)| *code)
    }

    fn encode(&self, _attribute: &str, value: &str) -> crate::profile::error::Result<Code> {
        Ok(self.lookup(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn levels() -> IndexedMap {
        IndexedMap::new(&["fluently", "okay", "poorly"]).unwrap()
    }

    #[rstest(option, expected,
        case("fluently", 1),
        case("okay", 2),
        case("poorly", 3),
    )]
    fn test_options_rank_from_one(option: &str, expected: Code) {
        assert_eq!(levels().lookup(option), expected);
    }

    #[test]
    fn test_empty_and_unlisted_yield_default() {
        let map = levels();
        assert_eq!(map.lookup(""), 0);
        assert_eq!(map.lookup("   "), 0);
        assert_eq!(map.lookup("natively"), 0);
    }

    #[test]
    fn test_configured_default() {
        let map = levels().with_default(9);
        assert_eq!(map.lookup("natively"), 9);
        assert_eq!(map.find("natively"), None);
    }

    #[test]
    fn test_options_are_searched_within_token() {
        let smokes = IndexedMap::new(&["smok"]).unwrap();
        assert_eq!(smokes.find("never smokes"), Some(1));
        assert_eq!(smokes.find("Smokes sometimes"), Some(1));
    }

    #[test]
    fn test_first_option_wins() {
        let drinks = IndexedMap::new(&["very often", "often"]).unwrap();
        assert_eq!(drinks.lookup("drinks very often"), 1);
        assert_eq!(drinks.lookup("drinks often"), 2);
    }

    #[test]
    fn test_preferred_option_keeps_its_rank() {
        let seriousness = IndexedMap::new(&["very serious", "somewhat serious", "not very serious"])
            .unwrap()
            .prefer(3);
        assert_eq!(seriousness.lookup("not very serious about it"), 3);
        assert_eq!(seriousness.lookup("very serious about it"), 1);
        assert_eq!(seriousness.lookup("somewhat serious"), 2);
        assert_eq!(seriousness.len(), 3);
    }

    #[test]
    fn test_empty_option_list_never_matches() {
        let height = IndexedMap::new(&[]).unwrap();
        assert!(height.is_empty());
        assert_eq!(height.find("5' 6\""), None);
    }

    #[test]
    fn test_encode_falls_back_to_default() {
        assert_eq!(levels().encode("languages", "natively"), Ok(0));
    }
}
