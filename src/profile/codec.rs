//! Attribute Codecs
//!
//!     Each profile attribute has two independent directions:
//!
//!         decode   display text (what the page shows) -> canonical value
//!         encode   canonical value -> wire fields (what the edit form accepts)
//!
//!     The two are not inverses. The page shows "5' 6\"" where the form wants
//!     `centimeters=168`; it shows "Mostly vegetarian" where the form wants two fields,
//!     `diet` and `dietserious`. A codec is therefore a pair of explicit strategies:
//!     a [`Presenter`] for decoding and an [`Updater`] for encoding.
//!
//! Encoding Rules
//!
//!     Textual values are lowercased before any table lookup. An absent value passes
//!     through as null so the remote side keeps its own default. Tables without a default
//!     reject values they do not list with [`DetailsError::UnknownValue`].

pub mod height;
pub mod income;
pub mod lists;

use crate::profile::error::{DetailsError, Result};
use crate::profile::matching::CategoryMatcher;
use crate::profile::text::replace_chars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire field name to submitted value.
pub type WireFields = BTreeMap<String, WireValue>;

/// A language and, when shown, how well it is spoken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: Option<String>,
}

/// Decoded, human-meaningful attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalValue {
    Absent,
    Number(i64),
    Text(String),
    List(Vec<String>),
    Languages(Vec<LanguageSkill>),
}

impl CanonicalValue {
    pub fn text(value: impl Into<String>) -> Self {
        CanonicalValue::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CanonicalValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CanonicalValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for CanonicalValue {
    fn from(value: &str) -> Self {
        CanonicalValue::Text(value.to_string())
    }
}

impl From<Option<&str>> for CanonicalValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(CanonicalValue::Absent, CanonicalValue::from)
    }
}

impl From<i64> for CanonicalValue {
    fn from(value: i64) -> Self {
        CanonicalValue::Number(value)
    }
}

impl From<Vec<LanguageSkill>> for CanonicalValue {
    fn from(value: Vec<LanguageSkill>) -> Self {
        CanonicalValue::Languages(value)
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Absent => f.write_str("null"),
            CanonicalValue::Number(n) => write!(f, "{}", n),
            CanonicalValue::Text(text) => f.write_str(text),
            CanonicalValue::List(items) => f.write_str(&items.join(", ")),
            CanonicalValue::Languages(skills) => {
                let entries: Vec<String> = skills
                    .iter()
                    .map(|skill| match &skill.level {
                        Some(level) => format!("{} ({})", skill.language, level),
                        None => skill.language.clone(),
                    })
                    .collect();
                f.write_str(&entries.join(", "))
            }
        }
    }
}

/// Value of one submitted form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Null,
    Int(i64),
    Text(String),
    List(Vec<i64>),
}

/// How display text becomes a canonical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presenter {
    /// The unset sentinel decodes as absent, anything else as normalized text.
    Standard { sentinel: String },
    /// Comma-separated entries containing a letter.
    Ethnicities,
    /// `name (level)` entries.
    Languages,
    /// Income range text to a representative amount.
    Income,
}

/// How a canonical value becomes wire fields.
#[derive(Debug, Clone)]
pub enum Updater {
    /// `{wire_id: value}` with no translation.
    Passthrough,
    /// `{wire_id: table[value]}`.
    Table(&'static dyn CategoryMatcher),
    /// One value looked up in several tables, one wire field each.
    Composite(Vec<(String, &'static dyn CategoryMatcher)>),
    Ethnicities,
    Languages { slots: usize },
    Income,
    /// Free-form height to `{centimeters: n}`.
    Height,
}

/// Decode/encode pair for one logical attribute.
#[derive(Debug, Clone)]
pub struct AttributeCodec {
    name: String,
    wire_id: String,
    presenter: Presenter,
    updater: Updater,
}

impl AttributeCodec {
    pub fn new(
        name: impl Into<String>,
        wire_id: impl Into<String>,
        presenter: Presenter,
        updater: Updater,
    ) -> Self {
        AttributeCodec {
            name: name.into(),
            wire_id: wire_id.into(),
            presenter,
            updater,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field id the display value is read from, and written to by single-field updaters.
    pub fn wire_id(&self) -> &str {
        &self.wire_id
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn updater(&self) -> &Updater {
        &self.updater
    }

    pub fn decode(&self, raw: &str) -> CanonicalValue {
        match &self.presenter {
            Presenter::Standard { sentinel } => decode_standard(raw, sentinel),
            Presenter::Ethnicities => lists::decode_ethnicities(raw),
            Presenter::Languages => lists::decode_languages(raw),
            Presenter::Income => CanonicalValue::Number(income::parse_income(Some(raw))),
        }
    }

    pub fn encode(&self, value: &CanonicalValue) -> Result<WireFields> {
        match &self.updater {
            Updater::Passthrough => Ok(self.single(passthrough(value))),
            Updater::Table(table) => Ok(self.single(self.lookup(*table, value)?)),
            Updater::Composite(fields) => fields
                .iter()
                .map(|(field, table)| Ok((field.clone(), self.lookup(*table, value)?)))
                .collect(),
            Updater::Ethnicities => lists::encode_ethnicities(&self.name, &self.wire_id, value),
            Updater::Languages { slots } => lists::encode_languages(&self.name, value, *slots),
            Updater::Income => self.encode_income(value),
            Updater::Height => self.encode_height(value),
        }
    }

    fn single(&self, value: WireValue) -> WireFields {
        WireFields::from([(self.wire_id.clone(), value)])
    }

    fn lookup(&self, table: &dyn CategoryMatcher, value: &CanonicalValue) -> Result<WireValue> {
        match value {
            CanonicalValue::Absent => Ok(WireValue::Null),
            CanonicalValue::Number(code) => Ok(WireValue::Int(*code)),
            CanonicalValue::Text(text) => table
                .encode(&self.name, &text.trim().to_lowercase())
                .map(WireValue::Int),
            other => Err(DetailsError::unknown_value(&self.name, other.to_string())),
        }
    }

    fn encode_income(&self, value: &CanonicalValue) -> Result<WireFields> {
        let code = match value {
            CanonicalValue::Absent => 0,
            CanonicalValue::Number(amount) => income::income_code(*amount),
            CanonicalValue::Text(text) => income::income_amount(text)
                .map(income::income_code)
                .ok_or_else(|| DetailsError::unknown_value(&self.name, text.as_str()))?,
            other => return Err(DetailsError::unknown_value(&self.name, other.to_string())),
        };
        Ok(self.single(WireValue::Int(code)))
    }

    fn encode_height(&self, value: &CanonicalValue) -> Result<WireFields> {
        let centimeters = match value {
            CanonicalValue::Absent => WireValue::Null,
            CanonicalValue::Number(cm) => WireValue::Int(*cm),
            CanonicalValue::Text(text) => height::height_centimeters(text)
                .map(WireValue::Int)
                .ok_or_else(|| DetailsError::unknown_value(&self.name, text.as_str()))?,
            other => return Err(DetailsError::unknown_value(&self.name, other.to_string())),
        };
        Ok(WireFields::from([("centimeters".to_string(), centimeters)]))
    }
}

/// Absent when `raw` is the unset sentinel, otherwise trimmed ASCII-normalized text.
pub fn decode_standard(raw: &str, sentinel: &str) -> CanonicalValue {
    let trimmed = raw.trim();
    if trimmed == sentinel {
        CanonicalValue::Absent
    } else {
        CanonicalValue::Text(replace_chars(trimmed))
    }
}

fn passthrough(value: &CanonicalValue) -> WireValue {
    match value {
        CanonicalValue::Absent => WireValue::Null,
        CanonicalValue::Number(n) => WireValue::Int(*n),
        other => WireValue::Text(other.to_string()),
    }
}
