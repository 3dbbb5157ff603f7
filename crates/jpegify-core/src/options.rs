//! Conversion options.
//!
//! Options arrive from the front end as plain data (serde, camelCase), and
//! every field has a default so partial objects are accepted.

use image::Rgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::parse_color;
use crate::encode::{effective_quality, DEFAULT_QUALITY};

/// Background used when none is configured.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Errors in user-supplied options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid background color: {0:?}")]
    InvalidColor(String),
}

/// What a run does when a single file fails to load or encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure. Items produced so far are kept.
    #[default]
    Abort,
    /// Record the failure in the run report and carry on.
    Skip,
}

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Quality factor in (0, 1]. Out-of-range values fall back to 0.9.
    pub quality: f32,
    /// Color painted under transparent regions.
    pub background_color: String,
    pub failure_policy: FailurePolicy,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            background_color: DEFAULT_BACKGROUND.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl ConversionOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// The quality factor actually used for encoding.
    pub fn effective_quality(&self) -> f32 {
        effective_quality(self.quality)
    }

    /// Resolve the background color. A blank value means white.
    pub fn background(&self) -> Result<Rgb<u8>, ConfigError> {
        let text = self.background_color.trim();
        let text = if text.is_empty() { DEFAULT_BACKGROUND } else { text };
        parse_color(text).ok_or_else(|| ConfigError::InvalidColor(self.background_color.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConversionOptions::new();
        assert_eq!(opts.quality, 0.9);
        assert_eq!(opts.background().unwrap(), Rgb([255, 255, 255]));
        assert_eq!(opts.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn test_blank_background_is_white() {
        let opts = ConversionOptions::new().with_background("   ");
        assert_eq!(opts.background().unwrap(), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_invalid_background() {
        let opts = ConversionOptions::new().with_background("#12");
        assert_eq!(
            opts.background(),
            Err(ConfigError::InvalidColor("#12".to_string()))
        );
    }

    #[test]
    fn test_effective_quality_fallback() {
        assert_eq!(ConversionOptions::new().with_quality(0.0).effective_quality(), 0.9);
        assert_eq!(ConversionOptions::new().with_quality(0.5).effective_quality(), 0.5);
    }

    #[test]
    fn test_failure_policy_serde_names() {
        assert_eq!(policy_from_tag("skip"), FailurePolicy::Skip);
        assert_eq!(policy_from_tag("abort"), FailurePolicy::Abort);
    }

    fn policy_from_tag(tag: &str) -> FailurePolicy {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;
        let de: StrDeserializer<'_, Error> = tag.into_deserializer();
        FailurePolicy::deserialize(de).unwrap()
    }
}
