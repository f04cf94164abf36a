use iced::widget::{button, column, container, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};

mod convert;
mod error;
mod platform;
mod render;
mod state;
mod ui;

use state::data::{ConversionEvent, ConversionOutcome, ConversionRequest, Dpi, OutputFormat};
use ui::progress::Progress;

const APP_TITLE: &str = "PDF to Image Converter";
const WINDOW_SIZE: (f32, f32) = (600.0, 800.0);

/// Main application state
struct PdfConverter {
    /// The PDF chosen in the file picker
    selected_file: Option<PathBuf>,
    dpi: Dpi,
    format: OutputFormat,
    progress: Progress,
    /// One-line status under the progress panel
    status: String,
    /// Request currently being converted; Some disables the form
    active_request: Option<ConversionRequest>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Select PDF"
    SelectFile,
    DpiSelected(Dpi),
    FormatSelected(OutputFormat),
    /// User clicked "Convert"
    Convert,
    /// Progress or completion from the background worker
    Conversion(ConversionEvent),
}

impl PdfConverter {
    fn new() -> (Self, Task<Message>) {
        let dpi = Dpi::default();
        let format = OutputFormat::default();
        log::info!("{} ready ({}, {})", APP_TITLE, dpi, format.short_name());

        (
            PdfConverter {
                selected_file: None,
                dpi,
                format,
                progress: Progress::default(),
                status: "Ready".to_string(),
                active_request: None,
            },
            Task::none(),
        )
    }

    fn is_converting(&self) -> bool {
        self.active_request.is_some()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFile => {
                let mut dialog = FileDialog::new()
                    .set_title("Select PDF file")
                    .add_filter("PDF files", &["pdf"]);
                if let Some(dir) = source_start_dir() {
                    dialog = dialog.set_directory(dir);
                }

                if let Some(path) = dialog.pick_file() {
                    log::info!("Selected {}", path.display());
                    self.selected_file = Some(path);
                    self.status = "Ready".to_string();
                }

                Task::none()
            }
            Message::DpiSelected(dpi) => {
                self.dpi = dpi;
                Task::none()
            }
            Message::FormatSelected(format) => {
                self.format = format;
                Task::none()
            }
            Message::Convert => {
                if self.is_converting() {
                    return Task::none();
                }

                let Some(source) = self.selected_file.clone() else {
                    ui::dialogs::show_error("Error", "Please select a PDF file first");
                    return Task::none();
                };

                let mut dialog = FileDialog::new().set_title("Select output folder");
                if let Some(dir) = output_start_dir(&source) {
                    dialog = dialog.set_directory(dir);
                }

                // Cancelled picker: nothing to do
                let Some(output_directory) = dialog.pick_folder() else {
                    return Task::none();
                };

                let request = ConversionRequest::new(source, output_directory, self.dpi, self.format);
                self.active_request = Some(request.clone());
                self.status = "Processing PDF...".to_string();
                self.progress.reset("Reading PDF file...");

                Task::run(convert::worker::convert(request), Message::Conversion)
            }
            Message::Conversion(event) => {
                self.handle_conversion_event(event);
                Task::none()
            }
        }
    }

    fn handle_conversion_event(&mut self, event: ConversionEvent) {
        match event {
            ConversionEvent::Started { total_pages } => {
                self.progress.started(total_pages);
            }
            ConversionEvent::PageWritten { page, total_pages } => {
                self.progress.page_written(page.index, total_pages);
            }
            ConversionEvent::Finished(outcome) => {
                log::debug!("Worker finished (success: {})", outcome.is_success());
                let request = self.active_request.take();
                match outcome {
                    ConversionOutcome::Success {
                        page_count,
                        output_folder,
                    } => {
                        self.progress.completed(page_count);
                        self.status = "Conversion complete".to_string();

                        let (dpi, format) = request
                            .map(|r| (r.dpi, r.format))
                            .unwrap_or((self.dpi, self.format));

                        if ui::dialogs::confirm_open_folder(page_count, &output_folder, dpi, format)
                        {
                            if let Err(e) = platform::open_folder(&output_folder) {
                                log::warn!("Could not open {}: {}", output_folder.display(), e);
                                ui::dialogs::show_info(
                                    "Notice",
                                    &format!(
                                        "Please open the folder manually:\n{}",
                                        output_folder.display()
                                    ),
                                );
                            }
                        }
                    }
                    ConversionOutcome::Failure { message } => {
                        let error_msg = format!("Error during conversion: {}", message);
                        self.status = "Conversion failed".to_string();
                        self.progress.message = error_msg.clone();
                        ui::dialogs::show_error("Error", &error_msg);
                    }
                }
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let busy = self.is_converting();

        let content: Column<Message> = column![
            text(APP_TITLE).size(28),
            ui::form::file_section(self.selected_file.as_deref(), busy),
            ui::form::dpi_section(self.dpi),
            ui::form::format_section(self.format),
            button("Convert")
                .on_press_maybe((!busy).then_some(Message::Convert))
                .padding(10),
            ui::progress::view(&self.progress),
            text(&self.status).size(13),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// The PDF picker always opens in the user's home folder
fn source_start_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// The output picker opens next to the chosen PDF
fn output_start_dir(source: &Path) -> Option<PathBuf> {
    source
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Fail early if the renderer is missing rather than on the first conversion
    if let Err(e) = render::PdfiumRenderer::bind() {
        log::error!("{}", e);
        ui::dialogs::show_error(
            "Missing component",
            &format!("The PDF rendering library (PDFium) could not be loaded.\n\n{}", e),
        );
        std::process::exit(1);
    }

    let result = iced::application(APP_TITLE, PdfConverter::update, PdfConverter::view)
        .theme(PdfConverter::theme)
        .window_size(WINDOW_SIZE)
        .resizable(false)
        .centered()
        .run_with(PdfConverter::new);

    if let Err(e) = result {
        log::error!("Failed to start the user interface: {}", e);
        ui::dialogs::show_error(
            "Application error",
            &format!("The application could not start:\n{}", e),
        );
        std::process::exit(1);
    }
}
