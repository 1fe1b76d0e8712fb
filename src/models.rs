use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::layout::UiType;

/// A classified UI region. Fields are read-only once the element exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedElement {
    #[serde(rename = "type")]
    ui_type: UiType,
    confidence: f64,
    description: String,
    bounds: Bounds,
}

impl DetectedElement {
    pub fn new(ui_type: UiType, confidence: f64, bounds: Bounds) -> Self {
        Self {
            ui_type,
            confidence,
            description: format!("Detected {} based on layout heuristics", ui_type),
            bounds,
        }
    }

    pub fn ui_type(&self) -> UiType {
        self.ui_type
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

/// Output of one detection call, in contour discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub elements: Vec<DetectedElement>,
}

impl DetectionResult {
    pub fn new(elements: Vec<DetectedElement>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements carrying the given label
    pub fn of_type(&self, ui_type: UiType) -> impl Iterator<Item = &DetectedElement> {
        self.elements.iter().filter(move |e| e.ui_type == ui_type)
    }
}
