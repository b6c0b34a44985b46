//! Exact-match value map

use super::{normalize, CategoryMatcher, Code};
use std::collections::HashMap;

/// Maps normalized tokens to codes by exact key match.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: HashMap<String, Code>,
}

impl ValueMap {
    pub fn new<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Code)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, code)| (normalize(key), code))
            .collect();
        ValueMap { entries }
    }

    /// Build a map where several spellings share one code.
    pub fn with_aliases<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a [&'a str], Code)>,
    {
        let entries = groups
            .into_iter()
            .flat_map(|(keys, code)| keys.iter().map(move |key| (normalize(key), code)))
            .collect();
        ValueMap { entries }
    }

    pub fn lookup(&self, token: &str) -> Option<Code> {
        self.entries.get(&normalize(token)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CategoryMatcher for ValueMap {
    fn find(&self, token: &str) -> Option<Code> {
        self.lookup(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::error::DetailsError;

    fn statuses() -> ValueMap {
        ValueMap::new([("single", 1), ("seeing someone", 2), ("married", 3)])
    }

    #[test]
    fn test_lookup_ignores_case_and_outer_whitespace() {
        let map = statuses();
        assert_eq!(map.lookup("Seeing Someone"), Some(2));
        assert_eq!(map.lookup("  married "), Some(3));
    }

    #[test]
    fn test_lookup_is_exact_not_substring() {
        assert_eq!(statuses().lookup("single mom"), None);
    }

    #[test]
    fn test_aliases_share_a_code() {
        let map = ValueMap::with_aliases([(&["hispanic / latin", "latin"][..], 7)]);
        assert_eq!(map.lookup("Latin"), Some(7));
        assert_eq!(map.lookup("Hispanic / Latin"), Some(7));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_encode_reports_unknown_value() {
        let err = statuses().encode("status", "complicated").unwrap_err();
        assert_eq!(err, DetailsError::unknown_value("status", "complicated"));
    }
}
