use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Creates a solid white canvas.
pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

/// Fills the inclusive pixel range `x0..=x1, y0..=y1`.
pub fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draws a black rectangle outline of the given thickness over the inclusive
/// range `x0..=x1, y0..=y1`.
pub fn outline_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, thickness: u32) {
    fill_rect(img, x0, y0, x1, y1, BLACK);
    fill_rect(img, x0 + thickness, y0 + thickness, x1 - thickness, y1 - thickness, WHITE);
}

/// Encodes an image as PNG bytes, the way a caller would hand it over.
pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("Failed to encode test image");
    buf
}

/// 1000x800 screenshot with a single wide outline near the top.
pub fn navigation_bar_screenshot() -> RgbImage {
    let mut img = blank_canvas(1000, 800);
    outline_rect(&mut img, 50, 20, 950, 80, 3);
    img
}

/// 1000x800 screenshot with a top bar, a left sidebar and a button, none
/// touching each other.
pub fn dashboard_screenshot() -> RgbImage {
    let mut img = blank_canvas(1000, 800);
    outline_rect(&mut img, 50, 20, 950, 80, 3);
    outline_rect(&mut img, 40, 150, 200, 760, 3);
    outline_rect(&mut img, 500, 400, 620, 450, 3);
    img
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tolerance,
        actual
    );
}
