//! List-valued attributes: ethnicities and languages

use super::{CanonicalValue, LanguageSkill, WireFields, WireValue};
use crate::profile::error::{DetailsError, Result};
use crate::profile::matching::CategoryMatcher;
use crate::profile::segmentation::tokenizer::DELIMITER;
use crate::profile::tables::{ETHNICITIES, ETHNICITY_UNSPECIFIED, LANGUAGE_CODES, LANGUAGE_LEVEL};
use once_cell::sync::Lazy;
use regex::Regex;

static LANGUAGE_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?) \((.*?)\)").unwrap());

fn has_alphabetic(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

/// Display entries with at least one letter; drops the unset marker and stray numbers.
pub fn decode_ethnicities(raw: &str) -> CanonicalValue {
    CanonicalValue::List(
        raw.trim()
            .split(DELIMITER)
            .filter(|entry| has_alphabetic(entry))
            .map(|entry| entry.trim().to_string())
            .collect(),
    )
}

/// `{ethnicities: [ids]}`, or the unspecified code when nothing is selected.
pub fn encode_ethnicities(
    attribute: &str,
    wire_id: &str,
    value: &CanonicalValue,
) -> Result<WireFields> {
    let items = list_items(attribute, value)?;
    let codes = items
        .iter()
        .map(|item| ETHNICITIES.encode(attribute, &item.to_lowercase()))
        .collect::<Result<Vec<_>>>()?;

    let wire = if codes.is_empty() {
        WireValue::Int(ETHNICITY_UNSPECIFIED)
    } else {
        WireValue::List(codes)
    };
    Ok(WireFields::from([(wire_id.to_string(), wire)]))
}

/// One entry of a languages display string: `"Spanish (okay)"` or `"Spanish"`.
pub fn parse_language_entry(entry: &str) -> LanguageSkill {
    let entry = entry.trim();
    match LANGUAGE_ENTRY.captures(entry) {
        Some(caps) => LanguageSkill {
            language: caps[1].to_lowercase(),
            level: Some(caps[2].to_lowercase()),
        },
        None => LanguageSkill {
            language: entry.to_string(),
            level: None,
        },
    }
}

pub fn decode_languages(raw: &str) -> CanonicalValue {
    CanonicalValue::Languages(
        raw.split(',')
            .filter(|entry| has_alphabetic(entry))
            .map(parse_language_entry)
            .collect(),
    )
}

/// Fill `cont_lang_{n}`/`language{n}status` for each language, then blank the remaining
/// slots so a shorter list replaces a longer one.
pub fn encode_languages(attribute: &str, value: &CanonicalValue, slots: usize) -> Result<WireFields> {
    let skills = match value {
        CanonicalValue::Absent => Vec::new(),
        CanonicalValue::Languages(skills) => skills.clone(),
        CanonicalValue::Text(_) | CanonicalValue::List(_) => list_items(attribute, value)?
            .iter()
            .map(|entry| parse_language_entry(entry))
            .collect(),
        CanonicalValue::Number(_) => {
            return Err(DetailsError::unknown_value(attribute, value.to_string()))
        }
    };

    let mut fields = WireFields::new();
    for (number, skill) in skills.iter().enumerate().map(|(i, s)| (i + 1, s)) {
        let language = LANGUAGE_CODES.encode(attribute, &skill.language.to_lowercase())?;
        let level = LANGUAGE_LEVEL.lookup(&skill.level.as_deref().unwrap_or("").to_lowercase());
        fields.insert(format!("cont_lang_{}", number), WireValue::Int(language));
        fields.insert(format!("language{}status", number), WireValue::Int(level));
    }
    for number in skills.len() + 1..=slots {
        fields.insert(format!("cont_lang_{}", number), WireValue::Text(String::new()));
        fields.insert(format!("language{}status", number), WireValue::Text(String::new()));
    }
    Ok(fields)
}

/// Items of a list-shaped canonical value. Text is read as a comma-separated list.
fn list_items(attribute: &str, value: &CanonicalValue) -> Result<Vec<String>> {
    match value {
        CanonicalValue::Absent => Ok(Vec::new()),
        CanonicalValue::List(items) => Ok(items.clone()),
        CanonicalValue::Text(text) => Ok(text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()),
        other => Err(DetailsError::unknown_value(attribute, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(language: &str, level: Option<&str>) -> LanguageSkill {
        LanguageSkill {
            language: language.to_string(),
            level: level.map(str::to_string),
        }
    }

    #[test]
    fn test_decode_ethnicities_drops_non_alphabetic_entries() {
        assert_eq!(
            decode_ethnicities("Asian, White, 3"),
            CanonicalValue::List(vec!["Asian".into(), "White".into()])
        );
        assert_eq!(decode_ethnicities("\u{2014}"), CanonicalValue::List(vec![]));
    }

    #[test]
    fn test_empty_ethnicities_encode_to_unspecified() {
        let fields = encode_ethnicities("ethnicities", "ethnicities", &CanonicalValue::List(vec![]))
            .unwrap();
        assert_eq!(fields["ethnicities"], WireValue::Int(10));

        let fields =
            encode_ethnicities("ethnicities", "ethnicities", &CanonicalValue::Absent).unwrap();
        assert_eq!(fields["ethnicities"], WireValue::Int(10));
    }

    #[test]
    fn test_ethnicities_encode_to_id_list() {
        let value = CanonicalValue::List(vec!["Asian".into()]);
        let fields = encode_ethnicities("ethnicities", "ethnicities", &value).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["ethnicities"], WireValue::List(vec![1]));
    }

    #[test]
    fn test_unknown_ethnicity_is_an_error() {
        let value = CanonicalValue::List(vec!["martian".into()]);
        let err = encode_ethnicities("ethnicities", "ethnicities", &value).unwrap_err();
        assert_eq!(err, DetailsError::unknown_value("ethnicities", "martian"));
    }

    #[test]
    fn test_decode_languages() {
        assert_eq!(
            decode_languages("English (Fluently), Spanish (okay), Klingon"),
            CanonicalValue::Languages(vec![
                skill("english", Some("fluently")),
                skill("spanish", Some("okay")),
                skill("Klingon", None),
            ])
        );
    }

    #[test]
    fn test_one_language_clears_later_slots() {
        let value = CanonicalValue::Languages(vec![skill("spanish", Some("fluently"))]);
        let fields = encode_languages("languages", &value, 5).unwrap();
        assert_eq!(fields["cont_lang_1"], WireValue::Int(62));
        assert_eq!(fields["language1status"], WireValue::Int(1));
        for n in 2..=5 {
            assert_eq!(fields[&format!("cont_lang_{}", n)], WireValue::Text(String::new()));
            assert_eq!(fields[&format!("language{}status", n)], WireValue::Text(String::new()));
        }
        assert_eq!(fields.len(), 10);
    }

    #[test]
    fn test_no_languages_clear_every_slot() {
        let fields =
            encode_languages("languages", &CanonicalValue::Languages(vec![]), 5).unwrap();
        assert_eq!(fields.len(), 10);
        assert!(fields.values().all(|v| *v == WireValue::Text(String::new())));
    }

    #[test]
    fn test_missing_level_uses_level_default() {
        let value = CanonicalValue::Languages(vec![skill("english", None)]);
        let fields = encode_languages("languages", &value, 5).unwrap();
        assert_eq!(fields["language1status"], WireValue::Int(0));
    }

    #[test]
    fn test_languages_from_text() {
        let value = CanonicalValue::Text("French (poorly), German".into());
        let fields = encode_languages("languages", &value, 2).unwrap();
        assert_eq!(fields["cont_lang_1"], WireValue::Int(23));
        assert_eq!(fields["language1status"], WireValue::Int(3));
        assert_eq!(fields["cont_lang_2"], WireValue::Int(26));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let value = CanonicalValue::Languages(vec![skill("klingon", None)]);
        assert_eq!(
            encode_languages("languages", &value, 5),
            Err(DetailsError::unknown_value("languages", "klingon"))
        );
    }
}
