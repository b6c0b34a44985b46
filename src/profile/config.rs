//! Engine configuration
//!
//! Section failure policies, the unset sentinel and the language slot count. The
//! defaults live in `defaults/details.default.toml`, compiled into the crate; a
//! [`Loader`] stacks files, `DETAILS_*` environment variables and single-key overrides
//! on top of them.

use crate::profile::segmentation::FailurePolicy;
use crate::profile::text::UNSET_SENTINEL;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/details.default.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct DetailsConfig {
    pub segmentation: SegmentationConfig,
    pub codec: CodecConfig,
}

/// Failure policy per section layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SegmentationConfig {
    pub basics: FailurePolicy,
    pub background: FailurePolicy,
    pub misc: FailurePolicy,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        SegmentationConfig {
            basics: FailurePolicy::Strict,
            background: FailurePolicy::Strict,
            misc: FailurePolicy::Lenient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodecConfig {
    pub unset_sentinel: String,
    pub language_slots: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            unset_sentinel: UNSET_SENTINEL.to_string(),
            language_slots: 5,
        }
    }
}

/// Prefix of environment variables read by [`Loader::with_env`].
pub const ENV_PREFIX: &str = "DETAILS";

/// Builds a [`DetailsConfig`] from the embedded defaults plus whatever the caller
/// stacks on top. Later layers win over earlier ones, key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from `defaults/details.default.toml`.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Stack a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Stack a TOML file if it exists, e.g. a per-user file that is usually absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Stack `DETAILS_<SECTION>__<KEY>` variables, e.g. `DETAILS_CODEC__LANGUAGE_SLOTS=3`
    /// or `DETAILS_SEGMENTATION__MISC=strict`.
    pub fn with_env(mut self) -> Self {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(env);
        self
    }

    /// Set one dotted key (`codec.unset_sentinel`) above every other layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DetailsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<DetailsConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, DetailsConfig::default());
        assert_eq!(config.codec.unset_sentinel, "\u{2014}");
    }

    #[test]
    fn test_policy_override() {
        let config = Loader::new()
            .set_override("segmentation.misc", "strict")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.segmentation.misc, FailurePolicy::Strict);
        assert_eq!(config.segmentation.basics, FailurePolicy::Strict);
    }

    #[test]
    fn test_environment_layer() {
        std::env::set_var("DETAILS_CODEC__LANGUAGE_SLOTS", "3");
        let config = Loader::new().with_env().build().expect("config to build");
        std::env::remove_var("DETAILS_CODEC__LANGUAGE_SLOTS");
        assert_eq!(config.codec.language_slots, 3);
        assert_eq!(config.codec.unset_sentinel, UNSET_SENTINEL);
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, DetailsConfig::default());
    }

    #[test]
    fn test_missing_required_file_fails() {
        let result = Loader::new().with_file("does/not/exist.toml").build();
        assert!(result.is_err());
    }
}
