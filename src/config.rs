//! Configuration for the stateful content writer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fonts::LAST_BMP;

/// Lowest accepted fallback threshold; ASCII always stays on the primary font.
const MIN_FALLBACK_THRESHOLD: u32 = 0x7F;

/// Writer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Codepoints strictly above this value are drawn with the fallback font.
    pub fallback_threshold: u32,

    /// Skip `Tf` when the next run uses the font and size already set on the stream.
    pub deduplicate_fonts: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            fallback_threshold: LAST_BMP,
            deduplicate_fonts: false,
        }
    }

    /// Set the fallback threshold.
    pub fn with_fallback_threshold(mut self, threshold: u32) -> Self {
        self.fallback_threshold = threshold;
        self
    }

    /// Enable font deduplication across runs.
    pub fn with_deduplicate_fonts(mut self, enable: bool) -> Self {
        self.deduplicate_fonts = enable;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_threshold < MIN_FALLBACK_THRESHOLD {
            return Err(Error::Config(format!(
                "fallback threshold 0x{:X} is below 0x{:X}",
                self.fallback_threshold, MIN_FALLBACK_THRESHOLD
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON, falling back to defaults for missing keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WriterConfig::default();
        assert_eq!(config.fallback_threshold, 0xFFFF);
        assert!(!config.deduplicate_fonts);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = WriterConfig::new()
            .with_fallback_threshold(0x2FFF)
            .with_deduplicate_fonts(true);
        assert_eq!(config.fallback_threshold, 0x2FFF);
        assert!(config.deduplicate_fonts);
    }

    #[test]
    fn test_rejects_low_threshold() {
        let config = WriterConfig::new().with_fallback_threshold(0x41);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = WriterConfig::from_json(r#"{"deduplicate_fonts": true}"#).unwrap();
        assert!(config.deduplicate_fonts);
        assert_eq!(config.fallback_threshold, LAST_BMP);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(WriterConfig::from_json("not json").is_err());
        assert!(WriterConfig::from_json(r#"{"fallback_threshold": 10}"#).is_err());
    }
}
