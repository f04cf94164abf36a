/// The conversion loop
///
/// Opens the document, creates `<output_directory>/<stem>`, then renders and
/// writes pages strictly in order. The first error aborts the run and files
/// already written are left in place.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use super::encode::write_page;
use crate::error::{ConvertError, Result};
use crate::render::{PageRenderer, RasterDocument};
use crate::state::data::{ConversionEvent, ConversionOutcome, ConversionRequest, PageResult};

/// Run one request to completion and report a terminal outcome.
///
/// `on_event` receives `Started` once the page count is known and one
/// `PageWritten` per page, in index order. `Finished` is left to the caller.
pub fn run_conversion<R: PageRenderer>(
    renderer: &R,
    request: &ConversionRequest,
    on_event: impl FnMut(ConversionEvent),
) -> ConversionOutcome {
    let started = Instant::now();
    log::info!(
        "Converting {} at {} to {}",
        request.source_path.display(),
        request.dpi,
        request.format.short_name()
    );

    match convert_pages(renderer, request, on_event) {
        Ok((page_count, output_folder)) => {
            log::info!(
                "Converted {} pages into {} in {:.1?}",
                page_count,
                output_folder.display(),
                started.elapsed()
            );
            ConversionOutcome::Success {
                page_count,
                output_folder,
            }
        }
        Err(e) => {
            log::error!("Conversion of {} failed: {}", request.source_path.display(), e);
            ConversionOutcome::Failure {
                message: e.to_string(),
            }
        }
    }
}

fn convert_pages<R: PageRenderer>(
    renderer: &R,
    request: &ConversionRequest,
    mut on_event: impl FnMut(ConversionEvent),
) -> Result<(usize, PathBuf)> {
    // Open first so an unreadable source leaves nothing on disk
    let document = renderer.open(&request.source_path)?;
    let total_pages = document.page_count();

    let output_folder = request.output_folder();
    fs::create_dir_all(&output_folder).map_err(|e| ConvertError::io(&output_folder, e))?;

    on_event(ConversionEvent::Started { total_pages });

    let scale = request.dpi.scale();
    for index in 0..total_pages {
        let image = document.render_page(index, scale)?;
        let output_path = request.page_path(&output_folder, index);
        write_page(&image, request.format, &output_path)?;

        let page = PageResult { index, output_path };
        log::debug!(
            "Page {}/{}: {}x{} -> {}",
            page.sequence(),
            total_pages,
            image.width(),
            image.height(),
            page.output_path.display()
        );

        on_event(ConversionEvent::PageWritten { page, total_pages });
    }

    Ok((total_pages, output_folder))
}
