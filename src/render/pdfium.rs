/// PDFium-backed renderer.
///
/// `Pdfium` is not `Send`, so a renderer is bound on the thread that uses it
/// (the conversion worker) and never crosses threads.

use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;

use super::{target_size, PageRenderer, RasterDocument};
use crate::error::{ConvertError, Result};

/// Renders pages through a bound PDFium library
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Bind to the PDFium library, trying a bundled copy first
    pub fn bind() -> Result<Self> {
        let bindings = bind_library()?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

/// Try the known library locations in order:
/// 1. next to the executable (release bundles)
/// 2. the current working directory (development)
/// 3. the system library search path
fn bind_library() -> Result<Box<dyn PdfiumLibraryBindings>> {
    let mut attempts = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let lib_path = Pdfium::pdfium_platform_library_name_at_path(&exe_dir);
        match Pdfium::bind_to_library(&lib_path) {
            Ok(bindings) => {
                log::info!("Loaded bundled PDFium: {}", lib_path.display());
                return Ok(bindings);
            }
            Err(e) => attempts.push(format!("{}: {}", lib_path.display(), e)),
        }
    }

    let local_path = Pdfium::pdfium_platform_library_name_at_path("./");
    match Pdfium::bind_to_library(&local_path) {
        Ok(bindings) => {
            log::info!("Loaded PDFium from working directory");
            return Ok(bindings);
        }
        Err(e) => attempts.push(format!("{}: {}", local_path.display(), e)),
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => {
            log::info!("Loaded system PDFium");
            Ok(bindings)
        }
        Err(e) => {
            attempts.push(format!("system library: {}", e));
            Err(ConvertError::LibraryUnavailable(attempts.join("; ")))
        }
    }
}

impl PageRenderer for PdfiumRenderer {
    type Document<'a> = PdfiumDocument<'a>;

    fn open(&self, path: &Path) -> Result<PdfiumDocument<'_>> {
        if !path.is_file() {
            return Err(ConvertError::open(path, "file not found"));
        }

        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ConvertError::open(path, e))?;

        Ok(PdfiumDocument { document })
    }
}

/// A document loaded by PDFium
pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl RasterDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage> {
        let render_error = |reason: String| ConvertError::Render {
            page: index + 1,
            reason,
        };

        let page_index = u16::try_from(index)
            .map_err(|_| render_error("page index out of range".to_string()))?;

        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| render_error(e.to_string()))?;

        let (width, height) = target_size(page.width().value, page.height().value, scale);

        let config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_target_height(height as i32)
            .render_form_data(true)
            .render_annotations(true);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| render_error(e.to_string()))?;

        Ok(bitmap.as_image())
    }
}
