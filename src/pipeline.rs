use anyhow::{Context, Result};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

use crate::detection::Analysis;
use crate::layout::UiType;

/// Context shared by the pipeline stages
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pub verbose: bool,
}

impl PipelineContext {
    /// Progress line on stderr when verbose; stdout is reserved for results
    pub fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }
}

/// Destination for intermediate stage images
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
    pub verbose: bool,
}

impl DebugConfig {
    /// The directory must be empty or non-existent
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self {
            output_dir,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Write every stage of an analysis, numbered in pipeline order
    pub fn save(&self, analysis: &Analysis) -> Result<()> {
        let pre = &analysis.preprocessed;

        self.save_image("01_padded.png", |p| pre.padded.save(p))?;
        self.save_image("02_grayscale.png", |p| pre.gray.save(p))?;
        self.save_image("03_edges.png", |p| pre.edges.save(p))?;

        let candidates = render_candidates(analysis);
        self.save_image("04_candidates.png", |p| candidates.save(p))?;

        let elements = render_elements(analysis);
        self.save_image("05_elements.png", |p| elements.save(p))?;

        let json_path = self.output_dir.join("06_result.json");
        let json = serde_json::to_string_pretty(&analysis.result)?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;

        Ok(())
    }

    fn save_image<F>(&self, name: &str, write: F) -> Result<()>
    where
        F: FnOnce(&Path) -> image::ImageResult<()>,
    {
        let path = self.output_dir.join(name);
        write(&path).map_err(|e| anyhow::anyhow!("Failed to save debug image {}: {}", name, e))?;
        if self.verbose {
            eprintln!("  Debug: saved {}", name);
        }
        Ok(())
    }
}

/// Outline color per label
pub fn type_color(ui_type: UiType) -> Rgb<u8> {
    match ui_type {
        UiType::NavigationBar => Rgb([230, 25, 75]),
        UiType::Sidebar => Rgb([60, 180, 75]),
        UiType::Container => Rgb([0, 130, 200]),
        UiType::Card => Rgb([245, 130, 48]),
        UiType::InputField => Rgb([145, 30, 180]),
        UiType::Button => Rgb([240, 50, 230]),
        UiType::Icon => Rgb([0, 128, 128]),
        UiType::UiSection => Rgb([128, 128, 0]),
    }
}

/// Every classified contour, drawn on the padded raster
pub fn render_candidates(analysis: &Analysis) -> RgbImage {
    let mut canvas = analysis.preprocessed.padded.clone();
    for c in &analysis.candidates {
        draw_outline(&mut canvas, c.rect.x, c.rect.y, c.rect.w, c.rect.h, type_color(c.ui_type));
    }
    canvas
}

/// Final elements drawn on the original, unpadded image
pub fn render_elements(analysis: &Analysis) -> RgbImage {
    let pre = &analysis.preprocessed;
    let (ow, oh) = (pre.orig_width, pre.orig_height);
    let mut canvas = imageops::crop_imm(&pre.padded, pre.pad, pre.pad, ow, oh).to_image();

    for elem in &analysis.result.elements {
        let b = elem.bounds();
        let x = (b.x * ow as f64).round() as u32;
        let y = (b.y * oh as f64).round() as u32;
        let w = (b.w * ow as f64).round() as u32;
        let h = (b.h * oh as f64).round() as u32;
        draw_outline(&mut canvas, x, y, w, h, type_color(elem.ui_type()));
    }
    canvas
}

fn draw_outline(canvas: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    draw_hollow_rect_mut(canvas, Rect::at(x as i32, y as i32).of_size(w, h), color);
}
