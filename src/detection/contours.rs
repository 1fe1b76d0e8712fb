use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};

use crate::geometry::PixelRect;

/// Bounding rectangles of the outermost boundaries in a binary edge image.
/// Holes, and any boundary enclosed by another one, are skipped.
pub fn find_external_rects(edges: &GrayImage) -> Vec<PixelRect> {
    find_contours::<u32>(edges)
        .iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter_map(bounding_rect)
        .collect()
}

/// Drop rectangles below the minimum size (pixels, not scaled to the image)
pub fn filter_noise(rects: Vec<PixelRect>, min_width: u32, min_height: u32) -> Vec<PixelRect> {
    rects
        .into_iter()
        .filter(|r| r.w >= min_width && r.h >= min_height)
        .collect()
}

fn bounding_rect(contour: &Contour<u32>) -> Option<PixelRect> {
    let first = contour.points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for p in &contour.points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Some(PixelRect::from_extents(min_x, min_y, max_x, max_y))
}
