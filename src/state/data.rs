/// Shared data structures for the conversion state
///
/// These types flow from the form (main.rs) through the worker into the
/// driver, and back to the UI as progress events.

use std::fmt;
use std::path::{Path, PathBuf};

/// Resolution the PDF is assumed to be authored at (1 point = 1/72 inch)
pub const BASE_DPI: f32 = 72.0;

/// Folder name used when the source path has no usable file stem
const FALLBACK_FOLDER_NAME: &str = "output";

/// Rasterization resolution offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dpi {
    Dpi150,
    #[default]
    Dpi300,
    Dpi600,
}

impl Dpi {
    pub const ALL: [Dpi; 3] = [Dpi::Dpi150, Dpi::Dpi300, Dpi::Dpi600];

    pub fn value(self) -> u32 {
        match self {
            Dpi::Dpi150 => 150,
            Dpi::Dpi300 => 300,
            Dpi::Dpi600 => 600,
        }
    }

    /// Uniform scale factor applied to both page axes
    pub fn scale(self) -> f32 {
        self.value() as f32 / BASE_DPI
    }
}

impl fmt::Display for Dpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} DPI", self.value())
    }
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Png, OutputFormat::Jpeg];

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Short name used in summaries ("PNG", "JPG")
    pub fn short_name(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPG",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG (lossless, larger files)"),
            OutputFormat::Jpeg => write!(f, "JPG (high-quality compression, smaller files)"),
        }
    }
}

/// Everything the driver needs for one run. Never mutated once handed to the worker.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source_path: PathBuf,
    pub output_directory: PathBuf,
    pub dpi: Dpi,
    pub format: OutputFormat,
}

impl ConversionRequest {
    pub fn new(
        source_path: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        dpi: Dpi,
        format: OutputFormat,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            output_directory: output_directory.into(),
            dpi,
            format,
        }
    }

    /// `<output_directory>/<source stem>`
    pub fn output_folder(&self) -> PathBuf {
        let stem = self
            .source_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_FOLDER_NAME.to_string());

        self.output_directory.join(stem)
    }

    /// Output path for the page at zero-based `index`
    pub fn page_path(&self, output_folder: &Path, index: usize) -> PathBuf {
        output_folder.join(PageResult::file_name_for(index, self.format))
    }
}

/// One written page
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// Zero-based page index
    pub index: usize,
    pub output_path: PathBuf,
}

impl PageResult {
    /// 1-based sequence number used in the file name
    pub fn sequence(&self) -> usize {
        self.index + 1
    }

    /// "001.png", "002.png", ... (widens past 999)
    pub fn file_name_for(index: usize, format: OutputFormat) -> String {
        format!("{:03}.{}", index + 1, format.extension())
    }
}

/// Terminal result of a request
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Success {
        page_count: usize,
        output_folder: PathBuf,
    },
    Failure {
        message: String,
    },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }
}

/// Messages sent from the worker to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionEvent {
    /// The document opened and its page count is known
    Started { total_pages: usize },
    /// A page file has been written to disk
    PageWritten { page: PageResult, total_pages: usize },
    /// The request is done, one way or the other
    Finished(ConversionOutcome),
}
