//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG) | `image` crate (`ImageReader` + `into_decoder`) |
//! | Auto-orient | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Extract | `DynamicImage::crop_imm` |
//! | Rotate (arbitrary angle) | inverse-mapped bilinear resampling onto an expanded canvas |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, ImageBackend};
use super::calculations::rotated_canvas;
use super::params::{Quality, Region};
use image::codecs::jpeg::JpegEncoder;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, Rgb, RgbImage};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample `src` at a fractional coordinate with bilinear interpolation.
/// Returns None outside the pixel grid.
fn sample_bilinear(src: &RgbImage, x: f32, y: f32) -> Option<Rgb<u8>> {
    let (w, h) = src.dimensions();
    if x < 0.0 || y < 0.0 || x > (w - 1) as f32 || y > (h - 1) as f32 {
        return None;
    }
    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let p00 = src.get_pixel(x0, y0)[i] as f32;
        let p10 = src.get_pixel(x1, y0)[i] as f32;
        let p01 = src.get_pixel(x0, y1)[i] as f32;
        let p11 = src.get_pixel(x1, y1)[i] as f32;
        let top = p00 + (p10 - p00) * fx;
        let bottom = p01 + (p11 - p01) * fx;
        *channel = (top + (bottom - top) * fy).round() as u8;
    }
    Some(Rgb(channels))
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn decode(&self, bytes: &[u8], auto_orient: bool) -> Result<Self::Image, BackendError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(BackendError::Io)?;
        let mut decoder = reader
            .into_decoder()
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        // Orientation must be read before the decoder is consumed.
        let orientation = if auto_orient {
            decoder.orientation().unwrap_or(Orientation::NoTransforms)
        } else {
            Orientation::NoTransforms
        };

        let mut img = DynamicImage::from_decoder(decoder)
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        if orientation != Orientation::NoTransforms {
            img.apply_orientation(orientation);
        }
        Ok(img)
    }

    fn extract(&self, img: Self::Image, region: &Region) -> Result<Self::Image, BackendError> {
        let (w, h) = (img.width(), img.height());
        if region.left + region.width > w || region.top + region.height > h {
            return Err(BackendError::Region(format!(
                "{}x{} at ({},{}) exceeds {}x{} canvas",
                region.width, region.height, region.left, region.top, w, h
            )));
        }
        Ok(img.crop_imm(region.left, region.top, region.width, region.height))
    }

    fn rotate(&self, img: Self::Image, degrees: f32) -> Result<Self::Image, BackendError> {
        if degrees.rem_euclid(360.0) == 0.0 {
            return Ok(img);
        }

        let src = img.to_rgb8();
        let (w, h) = src.dimensions();
        let (out_w, out_h) = rotated_canvas((w, h), degrees);

        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let cx_src = (w as f32 - 1.0) / 2.0;
        let cy_src = (h as f32 - 1.0) / 2.0;
        let cx_dst = (out_w as f32 - 1.0) / 2.0;
        let cy_dst = (out_h as f32 - 1.0) / 2.0;

        // Inverse mapping: rotate each destination pixel back into the
        // source grid and sample. Unmapped corners stay black.
        let mut out = RgbImage::new(out_w, out_h);
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let dx = x as f32 - cx_dst;
            let dy = y as f32 - cy_dst;
            let sx = dx * cos + dy * sin + cx_src;
            let sy = dy * cos - dx * sin + cy_src;
            if let Some(p) = sample_bilinear(&src, sx, sy) {
                *pixel = p;
            }
        }
        Ok(DynamicImage::ImageRgb8(out))
    }

    fn encode(&self, img: &Self::Image, quality: Quality) -> Result<Vec<u8>, BackendError> {
        let mut buf = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buf, quality.value() as u8);
        img.write_with_encoder(encoder)
            .map_err(|e| BackendError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{encode_jpeg, jpeg_with_orientation};

    #[test]
    fn decode_plain_jpeg() {
        let backend = RustBackend::new();
        let img = backend.decode(&encode_jpeg(60, 40), false).unwrap();
        assert_eq!((img.width(), img.height()), (60, 40));
    }

    #[test]
    fn decode_garbage_errors() {
        let backend = RustBackend::new();
        let result = backend.decode(&[0x00, 0x01, 0x02, 0x03], false);
        assert!(result.is_err());
    }

    #[test]
    fn decode_rotated_tag_without_auto_orient_keeps_raw_grid() {
        let backend = RustBackend::new();
        let bytes = jpeg_with_orientation(60, 40, 6);
        let img = backend.decode(&bytes, false).unwrap();
        assert_eq!((img.width(), img.height()), (60, 40));
    }

    #[test]
    fn decode_rotated_tag_with_auto_orient_swaps_dimensions() {
        let backend = RustBackend::new();
        let bytes = jpeg_with_orientation(60, 40, 6);
        let img = backend.decode(&bytes, true).unwrap();
        assert_eq!((img.width(), img.height()), (40, 60));
    }

    #[test]
    fn decode_mirrored_tag_with_auto_orient_keeps_dimensions() {
        let backend = RustBackend::new();
        let bytes = jpeg_with_orientation(60, 40, 2);
        let img = backend.decode(&bytes, true).unwrap();
        assert_eq!((img.width(), img.height()), (60, 40));
    }

    #[test]
    fn extract_crops_to_region() {
        let backend = RustBackend::new();
        let img = backend.decode(&encode_jpeg(60, 40), false).unwrap();
        let region = Region {
            left: 20,
            top: 10,
            width: 20,
            height: 10,
        };
        let cropped = backend.extract(img, &region).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (20, 10));
    }

    #[test]
    fn extract_out_of_bounds_errors() {
        let backend = RustBackend::new();
        let img = backend.decode(&encode_jpeg(60, 40), false).unwrap();
        let result = backend.extract(img, &Region::full(61, 40));
        assert!(matches!(result, Err(BackendError::Region(_))));
    }

    #[test]
    fn rotate_zero_is_noop() {
        let backend = RustBackend::new();
        let img = backend.decode(&encode_jpeg(60, 40), false).unwrap();
        let rotated = backend.rotate(img, 0.0).unwrap();
        assert_eq!((rotated.width(), rotated.height()), (60, 40));
    }

    #[test]
    fn rotate_forty_five_expands_canvas() {
        let backend = RustBackend::new();
        let img = backend.decode(&encode_jpeg(60, 40), false).unwrap();
        let rotated = backend.rotate(img, 45.0).unwrap();
        // (60+40)/√2 ≈ 70.7 → 71
        assert_eq!((rotated.width(), rotated.height()), (71, 71));
    }

    #[test]
    fn rotate_preserves_content_inside_bounds() {
        let backend = RustBackend::new();
        // uniform grey source: every mapped pixel keeps that grey, corners stay black
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 40, Rgb([128, 128, 128])));
        let rotated = backend.rotate(img, 45.0).unwrap().to_rgb8();
        let (w, h) = rotated.dimensions();
        // centre survives
        assert_eq!(*rotated.get_pixel(w / 2, h / 2), Rgb([128, 128, 128]));
        // corner is padding
        assert_eq!(*rotated.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn encode_produces_decodable_jpeg() {
        let backend = RustBackend::new();
        let img = backend.decode(&encode_jpeg(60, 40), false).unwrap();
        let bytes = backend.encode(&img, Quality::new(80)).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let reparsed = backend.decode(&bytes, false).unwrap();
        assert_eq!((reparsed.width(), reparsed.height()), (60, 40));
    }
}
