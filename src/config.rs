use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Tunable constants of the detection pipeline.
///
/// Missing fields fall back to the defaults when loading from JSON, so a
/// config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Border added on every side, as a fraction of the shorter image side
    pub padding_ratio: f64,
    /// Canny hysteresis thresholds
    pub canny_low: f32,
    pub canny_high: f32,
    /// Rectangles narrower or shorter than this (pixels) are noise
    pub min_width: u32,
    pub min_height: u32,
    /// Same-type overlap above which the later element is dropped
    pub iou_threshold: f64,
    /// Placeholder confidence attached to every element
    pub confidence: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            canny_low: 50.0,
            canny_high: 150.0,
            min_width: 40,
            min_height: 30,
            iou_threshold: 0.6,
            confidence: 0.7,
        }
    }
}

impl DetectorConfig {
    pub fn with_padding_ratio(mut self, ratio: f64) -> Self {
        self.padding_ratio = ratio;
        self
    }

    pub fn with_canny_thresholds(mut self, low: f32, high: f32) -> Self {
        self.canny_low = low;
        self.canny_high = high;
        self
    }

    pub fn with_min_size(mut self, min_width: u32, min_height: u32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub fn with_iou_threshold(mut self, threshold: f64) -> Self {
        self.iou_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canny_low <= 0.0 || self.canny_high <= 0.0 {
            return Err(ConfigError::NonPositiveCanny {
                low: self.canny_low,
                high: self.canny_high,
            });
        }
        if self.canny_low > self.canny_high {
            return Err(ConfigError::CannyOrder {
                low: self.canny_low,
                high: self.canny_high,
            });
        }
        if !(0.0..0.5).contains(&self.padding_ratio) {
            return Err(ConfigError::PaddingRatio(self.padding_ratio));
        }
        for (name, value) in [
            ("iou_threshold", self.iou_threshold),
            ("confidence", self.confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Border width in pixels for an image of the given size
    pub fn padding_for(&self, width: u32, height: u32) -> u32 {
        (self.padding_ratio * width.min(height) as f64).floor() as u32
    }
}
