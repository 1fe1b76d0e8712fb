//! Detect user-interface regions in a screenshot.
//!
//! The pipeline pads the image with a white border, runs Canny edge
//! detection, takes the bounding rectangles of the outermost contours,
//! labels each one with a fixed table of layout rules and removes same-type
//! duplicates while keeping nested regions.
//!
//! ```rust,no_run
//! let bytes = std::fs::read("screenshot.png")?;
//! let result = uidetect::detect(&bytes)?;
//! println!("{}", serde_json::to_string(&result)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod models;
pub mod nms;
pub mod pipeline;

pub use config::DetectorConfig;
pub use detection::{Analysis, Candidate, Detector, detect};
pub use error::{ConfigError, InvalidImageError};
pub use geometry::{Bounds, PixelRect, contains, iou};
pub use layout::UiType;
pub use models::{DetectedElement, DetectionResult};
pub use nms::class_aware_nms;
pub use pipeline::{DebugConfig, PipelineContext};
