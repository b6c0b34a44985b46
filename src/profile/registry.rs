//! Attribute registry
//!
//! Every attribute a profile exposes, keyed by name. Built once from a
//! [`CodecConfig`]; lookups by name replace any kind of dynamic attribute access.

use crate::profile::codec::{AttributeCodec, Presenter, Updater};
use crate::profile::config::CodecConfig;
use crate::profile::matching::CategoryMatcher;
use crate::profile::tables;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Registry built with the default codec configuration.
pub static REGISTRY: Lazy<AttributeRegistry> = Lazy::new(AttributeRegistry::default);

#[derive(Debug, Clone)]
pub struct AttributeRegistry {
    codecs: BTreeMap<String, AttributeCodec>,
    sentinel: String,
}

impl AttributeRegistry {
    pub fn from_config(config: &CodecConfig) -> Self {
        let standard = || Presenter::Standard {
            sentinel: config.unset_sentinel.clone(),
        };
        let table = |name: &str, wire_id: &str, table: &'static dyn CategoryMatcher| {
            AttributeCodec::new(name, wire_id, standard(), Updater::Table(table))
        };
        let composite = |name: &str, fields: [(&str, &'static dyn CategoryMatcher); 2]| {
            let fields = fields
                .into_iter()
                .map(|(field, table)| (field.to_string(), table))
                .collect();
            AttributeCodec::new(name, name, standard(), Updater::Composite(fields))
        };

        let codecs = [
            table("bodytype", "bodytype", &*tables::BODYTYPE),
            table("gender", "gender", &*tables::GENDER),
            table("orientation", "orientation", &*tables::ORIENTATION),
            table("smokes", "smoking", &*tables::SMOKES),
            table("drinks", "drinking", &*tables::DRINKS),
            table("drugs", "drugs", &*tables::DRUGS),
            table("job", "job", &*tables::JOB),
            table("status", "status", &*tables::STATUS),
            AttributeCodec::new(
                "monogamy",
                "monogamous",
                standard(),
                Updater::Composite(vec![
                    ("monogamous".to_string(), &*tables::MONOGAMY),
                    ("monogamyflex".to_string(), &*tables::STRICTNESS),
                ]),
            ),
            composite(
                "children",
                [("children", &*tables::HAS_KIDS), ("children2", &*tables::WANTS_KIDS)],
            ),
            composite(
                "education",
                [
                    ("educationstatus", &*tables::EDUCATION_STATUS),
                    ("educationlevel", &*tables::EDUCATION_LEVEL),
                ],
            ),
            composite("pets", [("cats", &*tables::CATS), ("dogs", &*tables::DOGS)]),
            composite(
                "diet",
                [("diet", &*tables::DIET), ("dietserious", &*tables::STRICTNESS)],
            ),
            composite(
                "religion",
                [
                    ("religion", &*tables::RELIGION),
                    ("religionserious", &*tables::SERIOUSNESS),
                ],
            ),
            composite(
                "sign",
                [("sign", &*tables::SIGN), ("sign_status", &*tables::IMPORTANCE)],
            ),
            AttributeCodec::new("height", "height", standard(), Updater::Height),
            AttributeCodec::new(
                "ethnicities",
                "ethnicities",
                Presenter::Ethnicities,
                Updater::Ethnicities,
            ),
            AttributeCodec::new(
                "languages",
                "languages",
                Presenter::Languages,
                Updater::Languages {
                    slots: config.language_slots,
                },
            ),
            AttributeCodec::new("income", "income", Presenter::Income, Updater::Income),
        ]
        .into_iter()
        .map(|codec| (codec.name().to_string(), codec))
        .collect();

        AttributeRegistry {
            codecs,
            sentinel: config.unset_sentinel.clone(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeCodec> {
        self.codecs.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeCodec> {
        self.codecs.values()
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Display text standing for "no value".
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        AttributeRegistry::from_config(&CodecConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::codec::WireValue;

    #[test]
    fn test_registry_knows_every_attribute() {
        let names: Vec<_> = REGISTRY.names().collect();
        assert_eq!(names.len(), 19);
        for name in ["monogamy", "children", "languages", "income", "smokes"] {
            assert!(names.contains(&name), "missing {}", name);
        }
    }

    #[test]
    fn test_smokes_reads_and_writes_smoking() {
        let codec = REGISTRY.get("smokes").unwrap();
        assert_eq!(codec.wire_id(), "smoking");
        let fields = codec.encode(&"When drinking".into()).unwrap();
        assert_eq!(fields["smoking"], WireValue::Int(3));
    }

    #[test]
    fn test_monogamy_writes_two_fields() {
        let fields = REGISTRY
            .get("monogamy")
            .unwrap()
            .encode(&"Strictly monogamous".into())
            .unwrap();
        assert_eq!(fields["monogamous"], WireValue::Int(1));
        assert_eq!(fields["monogamyflex"], WireValue::Int(2));
    }

    #[test]
    fn test_language_slots_follow_config() {
        let config = CodecConfig {
            language_slots: 3,
            ..CodecConfig::default()
        };
        let registry = AttributeRegistry::from_config(&config);
        let fields = registry
            .get("languages")
            .unwrap()
            .encode(&crate::profile::codec::CanonicalValue::Languages(vec![]))
            .unwrap();
        assert_eq!(fields.len(), 6);
    }
}
