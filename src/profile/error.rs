//! Error types for segmentation and attribute encoding

use thiserror::Error;

/// Errors surfaced by the details engine.
///
/// Nothing here is transient: the inputs are static text or caller-supplied values,
/// so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailsError {
    /// A strict section contained a token no remaining category accepts.
    #[error("parsing error in {section} section: {token:?} not recognized")]
    Segmentation { section: String, token: String },

    /// An encode table has no entry (and no default) for the given value.
    #[error("value {value:?} not recognized for attribute {attribute}")]
    UnknownValue { attribute: String, value: String },

    /// No codec is registered under this attribute name.
    #[error("unknown profile attribute {0:?}")]
    UnknownAttribute(String),
}

impl DetailsError {
    pub fn segmentation(section: impl Into<String>, token: impl Into<String>) -> Self {
        DetailsError::Segmentation {
            section: section.into(),
            token: token.into(),
        }
    }

    pub fn unknown_value(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        DetailsError::UnknownValue {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DetailsError>;
