//! Profile Snapshots
//!
//!     A [`ProfileDetails`] is the raw display text of every attribute of one profile,
//!     keyed by wire id. It comes from one of two document shapes:
//!
//!         - the owner's own view, which labels every value with its field id;
//!         - someone else's view, which only has three free-text sections that go
//!           through segmentation first.
//!
//!     Either way, empty values are stored as the unset sentinel, and the snapshot is
//!     never changed after it is built.
//!
//! Caching and Writes
//!
//!     [`DetailsCache`] builds the snapshot on first access and keeps it until
//!     [`DetailsCache::refresh`]. Writes never touch the snapshot: `apply_update`
//!     produces a [`SubmissionRequest`] for the caller to send, after which the caller
//!     refreshes.

use crate::profile::codec::{CanonicalValue, WireFields, WireValue};
use crate::profile::config::DetailsConfig;
use crate::profile::error::{DetailsError, Result};
use crate::profile::registry::AttributeRegistry;
use crate::profile::segmentation::{Layouts, Section};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Prefix the owner's view puts on field ids.
const SELF_VIEW_ID_PREFIX: &str = "ajax_";

/// Raw profile data as a document provider hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDocument {
    /// Owner's view: field id to display text.
    DisplayValues(BTreeMap<String, String>),
    /// Third-party view: up to one text per section.
    Sections(BTreeMap<Section, String>),
}

/// Source of the raw profile document.
pub trait DocumentProvider {
    fn document(&self) -> ProfileDocument;
}

impl<F> DocumentProvider for F
where
    F: Fn() -> ProfileDocument,
{
    fn document(&self) -> ProfileDocument {
        self()
    }
}

/// Wire fields ready for the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SubmissionRequest {
    fields: WireFields,
}

impl SubmissionRequest {
    pub fn new(fields: WireFields) -> Self {
        SubmissionRequest { fields }
    }

    /// Add `fields`, later values replacing earlier ones.
    pub fn merge(&mut self, fields: WireFields) {
        self.fields.extend(fields);
    }

    pub fn get(&self, field: &str) -> Option<&WireValue> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &WireFields {
        &self.fields
    }

    pub fn into_fields(self) -> WireFields {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Immutable raw display values of one profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDetails {
    values: BTreeMap<String, String>,
    dropped: Vec<String>,
}

impl ProfileDetails {
    /// Snapshot of the owner's view. `ajax_` id prefixes are removed.
    pub fn from_display_values<I, K, V>(values: I, sentinel: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(id, value)| {
                let id = id.as_ref();
                let id = id.strip_prefix(SELF_VIEW_ID_PREFIX).unwrap_or(id);
                (id.to_string(), value.into())
            })
            .collect();
        ProfileDetails {
            values: fill_sentinel(values, sentinel),
            dropped: Vec::new(),
        }
    }

    /// Snapshot of a third-party view. Missing sections are skipped.
    pub fn from_sections<'a, I>(sections: I, layouts: &Layouts, sentinel: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (Section, &'a str)>,
    {
        let mut values = BTreeMap::new();
        let mut dropped = Vec::new();
        for (section, text) in sections {
            let report = layouts.segment_with_report(section, text.trim())?;
            values.extend(report.fields);
            dropped.extend(report.dropped);
        }
        Ok(ProfileDetails {
            values: fill_sentinel(values, sentinel),
            dropped,
        })
    }

    pub fn from_document(
        document: &ProfileDocument,
        layouts: &Layouts,
        sentinel: &str,
    ) -> Result<Self> {
        match document {
            ProfileDocument::DisplayValues(values) => Ok(ProfileDetails::from_display_values(
                values.iter().map(|(id, value)| (id, value.clone())),
                sentinel,
            )),
            ProfileDocument::Sections(sections) => ProfileDetails::from_sections(
                sections.iter().map(|(section, text)| (*section, text.as_str())),
                layouts,
                sentinel,
            ),
        }
    }

    /// Raw display text stored under `wire_id`.
    pub fn raw(&self, wire_id: &str) -> Option<&str> {
        self.values.get(wire_id).map(String::as_str)
    }

    pub fn raw_values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Tokens lenient sections discarded while this snapshot was built.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Decoded value of `attribute`; attributes the document lacks decode from the sentinel.
    pub fn get(&self, registry: &AttributeRegistry, attribute: &str) -> Result<CanonicalValue> {
        let codec = registry
            .get(attribute)
            .ok_or_else(|| DetailsError::UnknownAttribute(attribute.to_string()))?;
        let raw = self.raw(codec.wire_id()).unwrap_or(registry.sentinel());
        Ok(codec.decode(raw))
    }

    /// Every registered attribute, decoded.
    pub fn as_map(&self, registry: &AttributeRegistry) -> BTreeMap<String, CanonicalValue> {
        registry
            .iter()
            .map(|codec| {
                let raw = self.raw(codec.wire_id()).unwrap_or(registry.sentinel());
                (codec.name().to_string(), codec.decode(raw))
            })
            .collect()
    }
}

fn fill_sentinel(values: BTreeMap<String, String>, sentinel: &str) -> BTreeMap<String, String> {
    values
        .into_iter()
        .map(|(id, value)| {
            if value.trim().is_empty() {
                (id, sentinel.to_string())
            } else {
                (id, value)
            }
        })
        .collect()
}

/// Encode one attribute update.
pub fn apply_update(
    registry: &AttributeRegistry,
    attribute: &str,
    value: &CanonicalValue,
) -> Result<SubmissionRequest> {
    let codec = registry
        .get(attribute)
        .ok_or_else(|| DetailsError::UnknownAttribute(attribute.to_string()))?;
    codec.encode(value).map(SubmissionRequest::new)
}

/// Encode several updates into one request.
pub fn convert_updates<'a, I>(registry: &AttributeRegistry, updates: I) -> Result<SubmissionRequest>
where
    I: IntoIterator<Item = (&'a str, &'a CanonicalValue)>,
{
    let mut request = SubmissionRequest::default();
    for (attribute, value) in updates {
        request.merge(apply_update(registry, attribute, value)?.into_fields());
    }
    Ok(request)
}

/// Layouts and registry built from one configuration.
#[derive(Debug)]
pub struct DetailsEngine {
    layouts: Layouts,
    registry: AttributeRegistry,
}

impl DetailsEngine {
    pub fn new(config: &DetailsConfig) -> Self {
        DetailsEngine {
            layouts: Layouts::from_config(&config.segmentation),
            registry: AttributeRegistry::from_config(&config.codec),
        }
    }

    pub fn layouts(&self) -> &Layouts {
        &self.layouts
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    pub fn snapshot(&self, document: &ProfileDocument) -> Result<ProfileDetails> {
        ProfileDetails::from_document(document, &self.layouts, self.registry.sentinel())
    }

    pub fn apply_update(&self, attribute: &str, value: &CanonicalValue) -> Result<SubmissionRequest> {
        apply_update(&self.registry, attribute, value)
    }
}

impl Default for DetailsEngine {
    fn default() -> Self {
        DetailsEngine::new(&DetailsConfig::default())
    }
}

/// Lazily built snapshot of one profile.
pub struct DetailsCache<P> {
    provider: P,
    engine: Arc<DetailsEngine>,
    snapshot: OnceCell<Arc<ProfileDetails>>,
}

impl<P: DocumentProvider> DetailsCache<P> {
    pub fn new(provider: P, engine: Arc<DetailsEngine>) -> Self {
        DetailsCache {
            provider,
            engine,
            snapshot: OnceCell::new(),
        }
    }

    /// The current snapshot, built from the provider's document on first use.
    pub fn snapshot(&self) -> Result<Arc<ProfileDetails>> {
        self.snapshot
            .get_or_try_init(|| {
                debug!("building profile details snapshot");
                self.engine
                    .snapshot(&self.provider.document())
                    .map(Arc::new)
            })
            .cloned()
    }

    pub fn get(&self, attribute: &str) -> Result<CanonicalValue> {
        self.snapshot()?.get(self.engine.registry(), attribute)
    }

    pub fn as_map(&self) -> Result<BTreeMap<String, CanonicalValue>> {
        Ok(self.snapshot()?.as_map(self.engine.registry()))
    }

    pub fn apply_update(&self, attribute: &str, value: &CanonicalValue) -> Result<SubmissionRequest> {
        self.engine.apply_update(attribute, value)
    }

    pub fn convert_updates<'a, I>(&self, updates: I) -> Result<SubmissionRequest>
    where
        I: IntoIterator<Item = (&'a str, &'a CanonicalValue)>,
    {
        convert_updates(self.engine.registry(), updates)
    }

    /// Drop the snapshot; the next read rebuilds it from the provider.
    pub fn refresh(&mut self) {
        self.snapshot = OnceCell::new();
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.get().is_some()
    }
}
