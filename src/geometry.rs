use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel units of the padded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest rectangle covering the inclusive extents `min..=max`
    pub fn from_extents(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        }
    }

    /// Map this rectangle from the padded frame back into the original frame
    /// and normalize it against the original dimensions.
    pub fn to_original_bounds(&self, pad: u32, orig_w: u32, orig_h: u32) -> Bounds {
        let x_orig = self.x.saturating_sub(pad).min(orig_w);
        let y_orig = self.y.saturating_sub(pad).min(orig_h);
        let w_orig = self.w.min(orig_w.saturating_sub(x_orig));
        let h_orig = self.h.min(orig_h.saturating_sub(y_orig));

        let (ow, oh) = (orig_w as f64, orig_h as f64);
        Bounds::new(
            round3(x_orig as f64 / ow),
            round3(y_orig as f64 / oh),
            round3(w_orig as f64 / ow),
            round3(h_orig as f64 / oh),
        )
    }
}

/// Bounding box normalized to the original image, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// Intersection over union of two boxes. Returns 0 when the union is empty.
pub fn iou(a: &Bounds, b: &Bounds) -> f64 {
    let xa = a.x.max(b.x);
    let ya = a.y.max(b.y);
    let xb = a.right().min(b.right());
    let yb = a.bottom().min(b.bottom());

    let inter = (xb - xa).max(0.0) * (yb - ya).max(0.0);
    let union = a.area() + b.area() - inter;

    if union <= 0.0 {
        return 0.0;
    }
    inter / union
}

/// True when `small` lies entirely inside `big`, edges inclusive
pub fn contains(big: &Bounds, small: &Bounds) -> bool {
    small.x >= big.x
        && small.y >= big.y
        && small.right() <= big.right()
        && small.bottom() <= big.bottom()
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
