/// Background conversion worker
///
/// The driver is blocking and PDFium handles are not `Send`, so the whole run
/// (library binding included) happens on one `spawn_blocking` thread. Events
/// cross back to the UI over a channel and surface as an iced stream.

use iced::futures::{SinkExt, Stream};
use tokio::sync::mpsc;

use super::driver::run_conversion;
use crate::error::{ConvertError, Result};
use crate::render::{PageRenderer, PdfiumRenderer};
use crate::state::data::{ConversionEvent, ConversionOutcome, ConversionRequest};

/// Convert `request` with PDFium, streaming progress to the UI
pub fn convert(request: ConversionRequest) -> impl Stream<Item = ConversionEvent> {
    convert_with(request, PdfiumRenderer::bind)
}

/// Convert with a renderer built by `make_renderer` on the worker thread.
/// The stream always ends with exactly one `Finished` event.
pub fn convert_with<R, F>(
    request: ConversionRequest,
    make_renderer: F,
) -> impl Stream<Item = ConversionEvent>
where
    R: PageRenderer,
    F: FnOnce() -> Result<R> + Send + 'static,
{
    iced::stream::channel(100, move |mut output| async move {
        let (sender, mut receiver) = mpsc::unbounded_channel();

        let handle = tokio::task::spawn_blocking(move || match make_renderer() {
            Ok(renderer) => run_conversion(&renderer, &request, |event| {
                // Receiver only goes away if the UI dropped the task
                let _ = sender.send(event);
            }),
            Err(e) => {
                log::error!("{}", e);
                ConversionOutcome::Failure {
                    message: e.to_string(),
                }
            }
        });

        while let Some(event) = receiver.recv().await {
            let _ = output.send(event).await;
        }

        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => ConversionOutcome::Failure {
                message: ConvertError::Worker(e.to_string()).to_string(),
            },
        };

        let _ = output.send(ConversionEvent::Finished(outcome)).await;
    })
}
