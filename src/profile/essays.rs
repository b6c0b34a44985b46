//! Essays
//!
//! The ten fixed free-text essays of a profile. Pages show each essay under its title;
//! the edit form addresses it by index.

use crate::profile::codec::{WireFields, WireValue};
use crate::profile::error::{DetailsError, Result};
use crate::profile::snapshot::SubmissionRequest;
use crate::profile::text::replace_chars;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EssaySlot {
    pub index: i64,
    pub name: &'static str,
    pub title: &'static str,
}

const fn slot(index: i64, name: &'static str, title: &'static str) -> EssaySlot {
    EssaySlot { index, name, title }
}

pub const ESSAYS: [EssaySlot; 10] = [
    slot(0, "self_summary", "My self-summary"),
    slot(1, "my_life", "What I'm doing with my life"),
    slot(2, "good_at", "I'm really good at"),
    slot(3, "people_first_notice", "The first things people usually notice about me"),
    slot(4, "favorites", "Favorite books, movies, shows, music, and food"),
    slot(5, "six_things", "The six things I could never do without"),
    slot(6, "think_about", "I spend a lot of time thinking about"),
    slot(7, "friday_night", "On a typical Friday night I am"),
    slot(8, "private_admission", "The most private thing I'm willing to admit"),
    slot(9, "message_me_if", "You should message me if"),
];

pub fn by_name(name: &str) -> Option<&'static EssaySlot> {
    ESSAYS.iter().find(|essay| essay.name == name)
}

/// Title comparison ignores typographic quotes and surrounding whitespace.
pub fn by_title(title: &str) -> Option<&'static EssaySlot> {
    let title = replace_chars(title);
    let title = title.trim();
    ESSAYS.iter().find(|essay| essay.title == title)
}

/// Essay texts of one profile, keyed by short name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Essays {
    texts: BTreeMap<&'static str, String>,
}

impl Essays {
    /// Collect texts from `(title, body)` pairs as they appear on the page.
    /// Unknown titles are ignored; the first body for a title wins.
    pub fn from_sections<I, T, B>(sections: I) -> Self
    where
        I: IntoIterator<Item = (T, B)>,
        T: AsRef<str>,
        B: AsRef<str>,
    {
        let mut texts = BTreeMap::new();
        for (title, body) in sections {
            if let Some(essay) = by_title(title.as_ref()) {
                texts
                    .entry(essay.name)
                    .or_insert_with(|| body.as_ref().trim().to_string());
            }
        }
        Essays { texts }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }

    /// Every essay in index order; missing essays yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&'static EssaySlot, Option<&str>)> + '_ {
        ESSAYS.iter().map(move |essay| (essay, self.get(essay.name)))
    }
}

/// Request replacing the essay `name` with `body`.
pub fn essay_update(name: &str, body: &str) -> Result<SubmissionRequest> {
    let essay = by_name(name).ok_or_else(|| DetailsError::UnknownAttribute(name.to_string()))?;
    Ok(SubmissionRequest::new(WireFields::from([
        ("essay_id".to_string(), WireValue::Int(essay.index)),
        ("essay_body".to_string(), WireValue::Text(body.to_string())),
        ("okc_api".to_string(), WireValue::Int(1)),
    ])))
}
