//! Shared test utilities for the exif-fixtures test suite.
//!
//! The reference dataset stores each orientation tag in a real camera JPEG;
//! tests need the same shape without shipping binary fixtures. These helpers
//! synthesize JPEGs in memory, with or without an EXIF orientation tag.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

/// Encode a gradient-filled JPEG of the given dimensions.
pub fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// Encode a JPEG carrying the given EXIF orientation tag.
///
/// Splices a minimal APP1 segment — `Exif\0\0` plus a little-endian TIFF
/// holding a single IFD0 entry (tag 0x0112, SHORT) — directly after the SOI
/// marker. That is all a decoder needs to see the orientation.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u8) -> Vec<u8> {
    let plain = encode_jpeg(width, height);

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II"); // little-endian byte order
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes()); // IFD0 starts right after the header
    tiff.extend_from_slice(&1u16.to_le_bytes()); // one entry
    tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_le_bytes()); // count
    tiff.extend_from_slice(&(orientation as u16).to_le_bytes());
    tiff.extend_from_slice(&0u16.to_le_bytes()); // value field padding
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    let mut payload = Vec::from(&b"Exif\0\0"[..]);
    payload.extend_from_slice(&tiff);

    let mut out = Vec::with_capacity(plain.len() + payload.len() + 4);
    out.extend_from_slice(&plain[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&plain[2..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageReader;
    use std::io::Cursor;

    #[test]
    fn encode_jpeg_roundtrips_dimensions() {
        let bytes = encode_jpeg(60, 40);
        let img = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!((img.width(), img.height()), (60, 40));
    }

    #[test]
    fn orientation_tag_is_visible_to_the_decoder() {
        use image::ImageDecoder;
        use image::metadata::Orientation;

        let bytes = jpeg_with_orientation(60, 40, 6);
        let mut decoder = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .unwrap()
            .into_decoder()
            .unwrap();
        assert_eq!(decoder.orientation().unwrap(), Orientation::Rotate90);
    }

    #[test]
    fn tagged_jpeg_still_decodes_to_raw_grid() {
        let bytes = jpeg_with_orientation(60, 40, 8);
        let img = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        // plain decode ignores the tag
        assert_eq!((img.width(), img.height()), (60, 40));
    }
}
