//! Section layouts
//!
//! A layout is the ordered list of categories one section of profile text renders, plus
//! how to tokenize it and what to do with tokens no category accepts. Layouts hold no
//! per-parse state and are shared freely.

use super::tokenizer::Tokenizer;
use crate::profile::matching::CategoryMatcher;
use crate::profile::tables;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three free-text sections of a third-party profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basics,
    Background,
    Misc,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Basics, Section::Background, Section::Misc];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Basics => "basics",
            Section::Background => "background",
            Section::Misc => "misc",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basics" => Ok(Section::Basics),
            "background" => Ok(Section::Background),
            "misc" => Ok(Section::Misc),
            other => Err(format!("unknown section '{}'", other)),
        }
    }
}

/// What to do with a token that no remaining category accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole parse.
    Strict,
    /// Drop the token and keep going.
    Lenient,
}

/// One output field of a layout and the matcher that claims tokens for it.
#[derive(Debug)]
pub struct Category {
    pub field: String,
    pub matcher: Box<dyn CategoryMatcher>,
}

/// Assigns an unmatched token containing a digit to `category`, as long as the
/// scan has not moved past `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitFallback {
    pub category: usize,
    pub until: usize,
}

#[derive(Debug)]
pub struct SectionLayout {
    name: String,
    categories: Vec<Category>,
    tokenizer: Tokenizer,
    digit_fallback: Option<DigitFallback>,
    policy: FailurePolicy,
}

impl SectionLayout {
    pub fn new(name: impl Into<String>) -> Self {
        SectionLayout {
            name: name.into(),
            categories: Vec::new(),
            tokenizer: Tokenizer::plain(),
            digit_fallback: None,
            policy: FailurePolicy::Strict,
        }
    }

    /// Append a category; categories are scanned in the order they are added.
    pub fn category<M>(mut self, field: impl Into<String>, matcher: M) -> Self
    where
        M: CategoryMatcher + 'static,
    {
        self.categories.push(Category {
            field: field.into(),
            matcher: Box::new(matcher),
        });
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_digit_fallback(mut self, category: usize, until: usize) -> Self {
        self.digit_fallback = Some(DigitFallback { category, until });
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Orientation, gender, status, height, body type.
    ///
    /// Orientation and gender may list several values. Heights are never in a table;
    /// any unmatched token with a digit before body type counts as the height.
    pub fn basics(policy: FailurePolicy) -> Self {
        SectionLayout::new(Section::Basics.name())
            .category("orientation", &*tables::ORIENTATION)
            .category("gender", &*tables::GENDER)
            .category("status", &*tables::STATUS)
            .category("height", &*tables::HEIGHT)
            .category("bodytype", &*tables::BODYTYPE)
            .with_digit_fallback(3, 3)
            .with_policy(policy)
    }

    /// Ethnicities, languages, education, religion.
    pub fn background(policy: FailurePolicy) -> Self {
        SectionLayout::new(Section::Background.name())
            .category("ethnicities", &*tables::ETHNICITIES)
            .category("languages", &*tables::LANGUAGE_MATCHER)
            .category("education", &*tables::EDUCATION_LEVEL)
            .category("religion", &*tables::RELIGION)
            .with_tokenizer(Tokenizer::background())
            .with_policy(policy)
    }

    /// Smoking, drinking, drugs, diet, children, pets, sign.
    ///
    /// The misc section carries free-form remarks the tables do not cover, so it is
    /// normally parsed leniently.
    pub fn misc(policy: FailurePolicy) -> Self {
        SectionLayout::new(Section::Misc.name())
            .category("smoking", &*tables::SMOKES_TOPIC)
            .category("drinking", &*tables::DRINKS_TOPIC)
            .category("drugs", &*tables::DRUGS_TOPIC)
            .category("diet", &*tables::DIET)
            .category("children", &*tables::KIDS_TOPIC)
            .category("pets", &*tables::PETS_TOPIC)
            .category("sign", &*tables::SIGN)
            .with_policy(policy)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.field.as_str())
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn digit_fallback(&self) -> Option<DigitFallback> {
        self.digit_fallback
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }
}
