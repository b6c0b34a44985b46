//! Profile details
//!
//!     The pipeline from page text to form fields, one module per stage:
//!
//!         segmentation   section text -> named raw fields
//!         codec          raw field <-> canonical value -> wire fields
//!         registry       every attribute's codec, by name
//!         snapshot       one profile's raw values, cached until refreshed
//!         essays         the free-text essays and their submissions
//!
//!     The category tables behind segmentation and encoding live in [`tables`] and are
//!     built once. Everything downstream of them is a pure function of its inputs, so
//!     segmenting, decoding and encoding can run concurrently without coordination.
//!
//! Configuration
//!
//!     Failure policies per section, the unset sentinel and the number of language slots
//!     come from [`config::DetailsConfig`]. The defaults are embedded; see
//!     [`config::Loader`] for layering a file and overrides on top.

pub mod codec;
pub mod config;
pub mod error;
pub mod essays;
pub mod matching;
pub mod registry;
pub mod segmentation;
pub mod snapshot;
pub mod tables;
pub mod text;

pub use codec::{AttributeCodec, CanonicalValue, LanguageSkill, WireFields, WireValue};
pub use config::{DetailsConfig, Loader};
pub use error::{DetailsError, Result};
pub use registry::{AttributeRegistry, REGISTRY};
pub use segmentation::{segment, Fields, Layouts, Section, SectionLayout, LAYOUTS};
pub use snapshot::{
    apply_update, convert_updates, DetailsCache, DetailsEngine, DocumentProvider,
    ProfileDetails, ProfileDocument, SubmissionRequest,
};
