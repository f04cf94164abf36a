/// Page rasterization module
///
/// The driver only talks to these traits. `pdfium.rs` implements them on top
/// of the PDFium shared library; tests plug in an in-memory renderer.

pub mod pdfium;

use image::DynamicImage;
use std::path::Path;

use crate::error::Result;

pub use pdfium::PdfiumRenderer;

/// Something that can open a document for rasterization
pub trait PageRenderer {
    type Document<'a>: RasterDocument
    where
        Self: 'a;

    fn open(&self, path: &Path) -> Result<Self::Document<'_>>;
}

/// An opened document
pub trait RasterDocument {
    fn page_count(&self) -> usize;

    /// Render the page at zero-based `index`, scaling both axes by `scale`
    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage>;
}

/// Pixel size of a page of `width_pts` x `height_pts` points at `scale`.
/// Never returns a zero dimension.
pub fn target_size(width_pts: f32, height_pts: f32, scale: f32) -> (u32, u32) {
    let scaled = |pts: f32| (pts * scale).round().max(1.0) as u32;
    (scaled(width_pts), scaled(height_pts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Dpi;

    #[test]
    fn test_letter_page_sizes() {
        // US Letter, 612 x 792 pt
        assert_eq!(target_size(612.0, 792.0, Dpi::Dpi150.scale()), (1275, 1650));
        assert_eq!(target_size(612.0, 792.0, Dpi::Dpi300.scale()), (2550, 3300));
        assert_eq!(target_size(612.0, 792.0, Dpi::Dpi600.scale()), (5100, 6600));
    }

    #[test]
    fn test_size_scales_linearly_with_dpi() {
        for &(w, h) in &[(72.0, 144.0), (595.0, 842.0), (300.5, 10.0)] {
            let (w150, h150) = target_size(w, h, Dpi::Dpi150.scale());
            let (w300, h300) = target_size(w, h, Dpi::Dpi300.scale());
            let (w600, h600) = target_size(w, h, Dpi::Dpi600.scale());

            // Doubling DPI doubles each side, within rounding
            assert!((w300 as i64 - 2 * w150 as i64).abs() <= 1);
            assert!((h300 as i64 - 2 * h150 as i64).abs() <= 1);
            assert!((w600 as i64 - 2 * w300 as i64).abs() <= 1);
            assert!((h600 as i64 - 2 * h300 as i64).abs() <= 1);
        }
    }

    #[test]
    fn test_tiny_page_never_collapses() {
        assert_eq!(target_size(0.1, 0.0, 1.0), (1, 1));
    }
}
