#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from uidetect for tests
pub use uidetect::{
    Bounds, DetectedElement, DetectionResult, Detector, DetectorConfig, InvalidImageError, UiType,
};
