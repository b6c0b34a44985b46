//! Segmentation
//!
//!     Third-party profile views render each section as one comma-separated line, e.g.
//!     "Straight, Woman, Single, 5' 6\", Athletic". Categories always appear in the same
//!     order but any of them may be missing, and some (orientation, languages) may list
//!     several values. There is no per-category delimiter to lean on.
//!
//! The Scan
//!
//!     Tokens are assigned left to right against the layout's ordered categories. A
//!     pointer records the category of the previous token; each token is offered to the
//!     categories from the pointer onward and goes to the first one that accepts it.
//!     The pointer only moves forward, so a token can land in the same category as the
//!     previous one (list values) or a later one (skipped categories), never an earlier
//!     one.
//!
//!     When no category accepts a token the layout's digit fallback gets a chance (the
//!     basics height), and after that its failure policy decides: strict layouts fail
//!     with [`DetailsError::Segmentation`], lenient ones drop the token. Dropped tokens
//!     are reported by [`segment_with_report`] and traced at debug level.
//!
//!     The layouts are built once ([`Layouts`]) and each call owns its scan state, so
//!     concurrent calls share nothing mutable.

pub mod layout;
pub mod tokenizer;

pub use layout::{Category, DigitFallback, FailurePolicy, Section, SectionLayout};
pub use tokenizer::{Token, Tokenizer};

use crate::profile::config::SegmentationConfig;
use crate::profile::error::{DetailsError, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Output field name to the joined tokens assigned to it.
pub type Fields = BTreeMap<String, String>;

/// Layouts built with the default policies.
pub static LAYOUTS: Lazy<Layouts> = Lazy::new(Layouts::default);

/// Result of one segmentation call, including what was left out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SegmentReport {
    pub fields: Fields,
    /// Category index of every assigned token, in input order.
    pub assignments: Vec<usize>,
    /// Tokens a lenient layout discarded.
    pub dropped: Vec<String>,
}

/// Split `text` into the fields of `layout`.
///
/// Every field of the layout is present in the result; unassigned ones are empty.
pub fn segment(text: &str, layout: &SectionLayout) -> Result<Fields> {
    segment_with_report(text, layout).map(|report| report.fields)
}

pub fn segment_with_report(text: &str, layout: &SectionLayout) -> Result<SegmentReport> {
    let mut state = SegmentationState::new(layout);
    for token in layout.tokenizer().tokenize(text) {
        state.assign(token)?;
    }
    Ok(state.finish())
}

/// Per-call scan state.
struct SegmentationState<'a> {
    layout: &'a SectionLayout,
    current: usize,
    buckets: Vec<Vec<String>>,
    assignments: Vec<usize>,
    dropped: Vec<String>,
}

impl<'a> SegmentationState<'a> {
    fn new(layout: &'a SectionLayout) -> Self {
        SegmentationState {
            layout,
            current: 0,
            buckets: vec![Vec::new(); layout.categories().len()],
            assignments: Vec::new(),
            dropped: Vec::new(),
        }
    }

    fn assign(&mut self, token: Token) -> Result<()> {
        let layout = self.layout;
        let categories = layout.categories();
        let hit = (self.current..categories.len())
            .find(|&index| categories[index].matcher.find(&token.key).is_some());

        if let Some(index) = hit {
            trace!(
                section = layout.name(),
                field = categories[index].field.as_str(),
                token = token.stored.as_str(),
                "token assigned"
            );
            self.push(index, token.stored);
            return Ok(());
        }

        if let Some(fallback) = layout.digit_fallback() {
            if self.current <= fallback.until
                && fallback.category < categories.len()
                && token.stored.chars().any(|c| c.is_ascii_digit())
            {
                debug!(
                    section = layout.name(),
                    field = categories[fallback.category].field.as_str(),
                    token = token.stored.as_str(),
                    "token assigned by digit fallback"
                );
                self.push(fallback.category, token.stored);
                return Ok(());
            }
        }

        match layout.policy() {
            FailurePolicy::Strict => Err(DetailsError::segmentation(layout.name(), token.stored)),
            FailurePolicy::Lenient => {
                debug!(
                    section = layout.name(),
                    token = token.stored.as_str(),
                    "dropping unrecognized token"
                );
                self.dropped.push(token.stored);
                Ok(())
            }
        }
    }

    fn push(&mut self, index: usize, stored: String) {
        self.current = index;
        self.buckets[index].push(stored);
        self.assignments.push(index);
    }

    fn finish(self) -> SegmentReport {
        let fields = self
            .layout
            .categories()
            .iter()
            .zip(self.buckets)
            .map(|(category, tokens)| (category.field.clone(), tokens.join(", ")))
            .collect();
        SegmentReport {
            fields,
            assignments: self.assignments,
            dropped: self.dropped,
        }
    }
}

/// The three section layouts, built once.
#[derive(Debug)]
pub struct Layouts {
    basics: SectionLayout,
    background: SectionLayout,
    misc: SectionLayout,
}

impl Layouts {
    pub fn from_config(config: &SegmentationConfig) -> Self {
        Layouts {
            basics: SectionLayout::basics(config.basics),
            background: SectionLayout::background(config.background),
            misc: SectionLayout::misc(config.misc),
        }
    }

    pub fn get(&self, section: Section) -> &SectionLayout {
        match section {
            Section::Basics => &self.basics,
            Section::Background => &self.background,
            Section::Misc => &self.misc,
        }
    }

    pub fn segment(&self, section: Section, text: &str) -> Result<Fields> {
        segment(text, self.get(section))
    }

    pub fn segment_with_report(&self, section: Section, text: &str) -> Result<SegmentReport> {
        segment_with_report(text, self.get(section))
    }
}

impl Default for Layouts {
    fn default() -> Self {
        Layouts::from_config(&SegmentationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::matching::ValueMap;

    fn colors() -> SectionLayout {
        SectionLayout::new("colors")
            .category("warm", ValueMap::new([("red", 1), ("orange", 2)]))
            .category("cool", ValueMap::new([("blue", 1), ("green", 2), ("red", 3)]))
    }

    #[test]
    fn test_every_field_present_for_empty_text() {
        let fields = segment("", &colors()).unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_list_values_join_in_order() {
        let fields = segment("Red, Orange, Blue, Green", &colors()).unwrap();
        assert_eq!(fields["warm"], "Red, Orange");
        assert_eq!(fields["cool"], "Blue, Green");
    }

    #[test]
    fn test_pointer_never_moves_back() {
        // "red" is in both tables; after a cool token it can only be cool.
        let report = segment_with_report("Blue, Red", &colors()).unwrap();
        assert_eq!(report.fields["warm"], "");
        assert_eq!(report.fields["cool"], "Blue, Red");
        assert_eq!(report.assignments, vec![1, 1]);
    }

    #[test]
    fn test_tie_goes_to_lowest_remaining_category() {
        let report = segment_with_report("Red", &colors()).unwrap();
        assert_eq!(report.assignments, vec![0]);
    }

    #[test]
    fn test_strict_rejects_token_behind_pointer() {
        let err = segment("Blue, Orange", &colors()).unwrap_err();
        assert_eq!(err, DetailsError::segmentation("colors", "Orange"));
    }

    #[test]
    fn test_lenient_reports_dropped_tokens() {
        let layout = colors().with_policy(FailurePolicy::Lenient);
        let report = segment_with_report("Purple, Red, Blue", &layout).unwrap();
        assert_eq!(report.dropped, vec!["Purple".to_string()]);
        assert_eq!(report.fields["warm"], "Red");
        assert_eq!(report.fields["cool"], "Blue");
    }

    #[test]
    fn test_digit_fallback_respects_pointer_limit() {
        let layout = colors().with_digit_fallback(0, 0);
        assert_eq!(segment("42", &layout).unwrap()["warm"], "42");
        assert!(segment("Blue, 42", &layout).is_err());
    }
}
