use std::path::PathBuf;

/// Input bytes did not decode into a usable raster
#[derive(thiserror::Error, Debug)]
pub enum InvalidImageError {
    #[error("image data is empty")]
    Empty,

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has zero size ({width}x{height})")]
    ZeroSized { width: u32, height: u32 },
}

/// Rejected detector configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("canny thresholds must be positive (low={low}, high={high})")]
    NonPositiveCanny { low: f32, high: f32 },

    #[error("canny low threshold {low} exceeds high threshold {high}")]
    CannyOrder { low: f32, high: f32 },

    #[error("padding ratio {0} is outside [0, 0.5)")]
    PaddingRatio(f64),

    #[error("{name} {value} is outside [0, 1]")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
