use image::{GrayImage, Rgb, RgbImage, imageops};
use imageproc::edges::canny;

use crate::config::DetectorConfig;
use crate::error::InvalidImageError;

/// Padded raster and its edge map, ready for contour extraction
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub padded: RgbImage,
    pub gray: GrayImage,
    pub edges: GrayImage,
    /// Border width added on each side, in pixels
    pub pad: u32,
    pub orig_width: u32,
    pub orig_height: u32,
}

impl Preprocessed {
    pub fn padded_dimensions(&self) -> (u32, u32) {
        self.padded.dimensions()
    }
}

/// Decode encoded bytes into an RGB raster
pub fn decode(bytes: &[u8]) -> Result<RgbImage, InvalidImageError> {
    if bytes.is_empty() {
        return Err(InvalidImageError::Empty);
    }

    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(InvalidImageError::ZeroSized { width, height });
    }
    Ok(rgb)
}

/// Surround the image with a solid white border of `pad` pixels
pub fn pad_white(img: &RgbImage, pad: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut canvas = RgbImage::from_pixel(width + 2 * pad, height + 2 * pad, Rgb([255, 255, 255]));
    imageops::replace(&mut canvas, img, pad as i64, pad as i64);
    canvas
}

/// Convert image to grayscale
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    imageops::grayscale(img)
}

/// Detect edges using Canny edge detector
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}

/// Run decode, padding, grayscale and edge detection
pub fn preprocess(bytes: &[u8], config: &DetectorConfig) -> Result<Preprocessed, InvalidImageError> {
    let original = decode(bytes)?;
    let (orig_width, orig_height) = original.dimensions();

    let pad = config.padding_for(orig_width, orig_height);
    let padded = pad_white(&original, pad);
    let gray = to_grayscale(&padded);
    let edges = detect_edges(&gray, config.canny_low, config.canny_high);

    Ok(Preprocessed {
        padded,
        gray,
        edges,
        pad,
        orig_width,
        orig_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img.clone())
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(matches!(decode(&[]), Err(InvalidImageError::Empty)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, InvalidImageError::Decode(_)));
    }

    #[test]
    fn test_pad_white_border() {
        let img = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));
        let padded = pad_white(&img, 2);

        assert_eq!(padded.dimensions(), (8, 7));
        assert_eq!(*padded.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*padded.get_pixel(7, 6), Rgb([255, 255, 255]));
        assert_eq!(*padded.get_pixel(2, 2), Rgb([10, 20, 30]));
        assert_eq!(*padded.get_pixel(5, 4), Rgb([10, 20, 30]));
        assert_eq!(*padded.get_pixel(6, 4), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_grayscale_matches_luma_conversion() {
        let mut img = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([200, 30, 90]));
        img.put_pixel(2, 1, Rgb([0, 0, 0]));

        let gray = to_grayscale(&img);
        assert_eq!(gray, DynamicImage::ImageRgb8(img).to_luma8());
        assert_eq!(gray.get_pixel(1, 0)[0], 255);
        assert_eq!(gray.get_pixel(2, 1)[0], 0);
    }

    #[test]
    fn test_preprocess_dimensions() {
        let img = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
        let pre = preprocess(&png_bytes(&img), &DetectorConfig::default()).unwrap();

        assert_eq!(pre.pad, 5);
        assert_eq!((pre.orig_width, pre.orig_height), (200, 100));
        assert_eq!(pre.padded_dimensions(), (210, 110));
        assert_eq!(pre.gray.dimensions(), (210, 110));
        assert_eq!(pre.edges.dimensions(), (210, 110));
    }

    #[test]
    fn test_blank_image_has_no_edges() {
        let img = RgbImage::from_pixel(120, 80, Rgb([255, 255, 255]));
        let pre = preprocess(&png_bytes(&img), &DetectorConfig::default()).unwrap();
        assert!(pre.edges.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_edge_map_is_binary() {
        let mut img = RgbImage::from_pixel(120, 80, Rgb([255, 255, 255]));
        for y in 20..60 {
            for x in 30..90 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let pre = preprocess(&png_bytes(&img), &DetectorConfig::default()).unwrap();

        assert!(pre.edges.pixels().any(|p| p[0] == 255));
        assert!(pre.edges.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }
}
