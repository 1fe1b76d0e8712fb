pub mod preprocessing;
pub mod contours;

use crate::config::DetectorConfig;
use crate::error::{ConfigError, InvalidImageError};
use crate::geometry::PixelRect;
use crate::layout::{self, UiType};
use crate::models::{DetectedElement, DetectionResult};
use crate::nms::class_aware_nms;
use crate::pipeline::PipelineContext;

pub use preprocessing::Preprocessed;

/// A contour rectangle after classification, before suppression
#[derive(Debug, Clone)]
pub struct Candidate {
    pub rect: PixelRect,
    pub ui_type: UiType,
}

/// Everything one detection pass produced, including intermediate stages
#[derive(Debug, Clone)]
pub struct Analysis {
    pub preprocessed: Preprocessed,
    pub candidates: Vec<Candidate>,
    pub result: DetectionResult,
}

/// Main detection pipeline orchestrator
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
    context: PipelineContext,
}

impl Detector {
    /// Build a detector, rejecting configs that `DetectorConfig::validate` refuses
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            context: PipelineContext::default(),
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect UI regions in an encoded image
    pub fn detect(&self, image_bytes: &[u8]) -> Result<DetectionResult, InvalidImageError> {
        Ok(self.analyze(image_bytes)?.result)
    }

    /// Run the full pipeline and keep the intermediate stages
    pub fn analyze(&self, image_bytes: &[u8]) -> Result<Analysis, InvalidImageError> {
        // Step 1: Decode, pad, grayscale, edges
        self.context.report("Preprocessing image...");
        let pre = preprocessing::preprocess(image_bytes, &self.config)?;
        let (img_w, img_h) = pre.padded_dimensions();
        self.context.report(&format!(
            "Image {}x{}, padded by {}px to {}x{}",
            pre.orig_width, pre.orig_height, pre.pad, img_w, img_h
        ));

        // Step 2: External contours
        let all_rects = contours::find_external_rects(&pre.edges);
        let rects = contours::filter_noise(all_rects.clone(), self.config.min_width, self.config.min_height);
        self.context.report(&format!(
            "Found {} external contours, {} above {}x{}px",
            all_rects.len(),
            rects.len(),
            self.config.min_width,
            self.config.min_height
        ));

        // Step 3: Classify against the padded frame
        let candidates: Vec<Candidate> = rects
            .into_iter()
            .map(|rect| Candidate {
                rect,
                ui_type: layout::classify(&rect, img_w, img_h),
            })
            .collect();

        // Step 4: Back to the original frame, then suppress duplicates
        let elements: Vec<DetectedElement> = candidates
            .iter()
            .map(|c| {
                let bounds = c.rect.to_original_bounds(pre.pad, pre.orig_width, pre.orig_height);
                DetectedElement::new(c.ui_type, self.config.confidence, bounds)
            })
            .collect();
        let before = elements.len();
        let kept = class_aware_nms(elements, self.config.iou_threshold);
        self.context.report(&format!(
            "Kept {} of {} elements after suppression",
            kept.len(),
            before
        ));

        if self.context.verbose {
            for (i, elem) in kept.iter().enumerate() {
                let b = elem.bounds();
                self.context.report(&format!(
                    "  Element {}: {} at ({:.3}, {:.3}) size {:.3}x{:.3}",
                    i + 1,
                    elem.ui_type(),
                    b.x,
                    b.y,
                    b.w,
                    b.h
                ));
            }
        }

        Ok(Analysis {
            preprocessed: pre,
            candidates,
            result: DetectionResult::new(kept),
        })
    }
}

/// Detect UI regions with the default configuration
pub fn detect(image_bytes: &[u8]) -> Result<DetectionResult, InvalidImageError> {
    Detector::default().detect(image_bytes)
}
