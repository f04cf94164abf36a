/// Page image encoders
///
/// PNG keeps the raster exactly as rendered. JPEG cannot carry
/// transparency, so anything with an alpha channel is flattened onto
/// opaque white first, then encoded with optimized Huffman tables.

use image::codecs::png::PngEncoder;
use image::{DynamicImage, RgbImage};
use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::state::data::OutputFormat;

/// Fixed JPEG quality (1-100)
pub const JPEG_QUALITY: u8 = 99;

/// Encode `image` in `format` and write it to `path`, replacing any existing file
pub fn write_page(image: &DynamicImage, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Png => image
            .write_with_encoder(PngEncoder::new(&mut writer))
            .map_err(|e| ConvertError::encode(path, e))?,
        OutputFormat::Jpeg => encode_jpeg(&flatten_onto_white(image), &mut writer)
            .map_err(|reason| ConvertError::encode(path, reason))?,
    }

    writer.flush().map_err(|e| ConvertError::io(path, e))
}

/// Quality 99 baseline JPEG with optimized Huffman tables
fn encode_jpeg(rgb: &RgbImage, writer: &mut impl Write) -> std::result::Result<(), String> {
    let width = u16::try_from(rgb.width())
        .map_err(|_| format!("width {} exceeds the JPEG limit", rgb.width()))?;
    let height = u16::try_from(rgb.height())
        .map_err(|_| format!("height {} exceeds the JPEG limit", rgb.height()))?;

    let mut encoder = Encoder::new(writer, JPEG_QUALITY);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(rgb.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| e.to_string())
}

/// Composite onto an opaque white background. Images without alpha are
/// converted to RGB unchanged.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());

    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let alpha = src[3] as u32;
        for channel in 0..3 {
            let value = src[channel] as u32 * alpha + 255 * (255 - alpha);
            dst[channel] = ((value + 127) / 255) as u8;
        }
    }

    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    /// Left half opaque red, right half fully transparent
    fn half_transparent() -> DynamicImage {
        let img = RgbaImage::from_fn(16, 8, |x, _| {
            if x < 8 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_flatten_blends_with_white() {
        let img = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([10, 20, 30, 255]),
            1 => Rgba([0, 0, 0, 0]),
            _ => Rgba([0, 0, 0, 128]),
        });
        let flat = flatten_onto_white(&DynamicImage::ImageRgba8(img));

        assert_eq!(flat.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(flat.get_pixel(1, 0).0, [255, 255, 255]);
        // 255 * 127 / 255 = 127
        assert_eq!(flat.get_pixel(2, 0).0, [127, 127, 127]);
    }

    #[test]
    fn test_flatten_passes_rgb_through() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3])));
        let flat = flatten_onto_white(&img);
        assert_eq!(flat.get_pixel(1, 1).0, [1, 2, 3]);
    }

    #[test]
    fn test_png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("001.png");

        write_page(&half_transparent(), OutputFormat::Png, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert!(decoded.color().has_alpha());
        assert_eq!(decoded.get_pixel(12, 4), Rgba([0, 0, 0, 0]));
        assert_eq!(decoded.get_pixel(2, 4), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_jpeg_has_no_alpha_and_white_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("001.jpg");

        write_page(&half_transparent(), OutputFormat::Jpeg, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert!(!decoded.color().has_alpha());
        assert_eq!(decoded.dimensions(), (16, 8));

        let rgb = decoded.to_rgb8();
        // Lossy, so allow a small tolerance
        let px = rgb.get_pixel(13, 4).0;
        assert!(px.iter().all(|&c| c >= 245), "expected white, got {:?}", px);
        let px = rgb.get_pixel(2, 4).0;
        assert!(px[0] >= 230 && px[1] <= 25 && px[2] <= 25, "expected red, got {:?}", px);
    }

    /// Noisy gradient so entropy coding has something to work with
    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                ((x * 7 + y * 13) % 256) as u8,
            ])
        })
    }

    #[test]
    fn test_jpeg_tables_are_optimized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("001.jpg");
        let rgb = gradient(320, 240);

        write_page(&DynamicImage::ImageRgb8(rgb.clone()), OutputFormat::Jpeg, &path).unwrap();
        let written = std::fs::metadata(&path).unwrap().len();

        // Same quality, standard tables
        let mut standard = Vec::new();
        Encoder::new(&mut standard, JPEG_QUALITY)
            .encode(rgb.as_raw(), 320, 240, ColorType::Rgb)
            .unwrap();

        assert!(
            written < standard.len() as u64,
            "optimized {} bytes, standard {} bytes",
            written,
            standard.len()
        );
        assert_eq!(image::open(&path).unwrap().dimensions(), (320, 240));
    }

    #[test]
    fn test_oversized_jpeg_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("001.jpg");
        let wide = DynamicImage::ImageRgb8(RgbImage::new(70_000, 1));

        let result = write_page(&wide, OutputFormat::Jpeg, &path);
        assert!(matches!(result, Err(ConvertError::Encode { .. })));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("001.png");

        let result = write_page(&half_transparent(), OutputFormat::Png, &path);
        assert!(matches!(result, Err(ConvertError::Io { .. })));
    }
}
