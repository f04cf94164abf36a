/// Native message boxes (rfd). All of these block until dismissed.
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::Path;

use crate::state::data::{Dpi, OutputFormat};

pub fn show_error(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Summarise a finished run and ask whether to open the output folder.
/// Returns true if the user chose "Yes".
pub fn confirm_open_folder(
    page_count: usize,
    output_folder: &Path,
    dpi: Dpi,
    format: OutputFormat,
) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Conversion complete")
        .set_description(completion_summary(page_count, output_folder, dpi, format))
        .set_buttons(MessageButtons::YesNo)
        .show();

    matches!(result, MessageDialogResult::Yes)
}

fn completion_summary(
    page_count: usize,
    output_folder: &Path,
    dpi: Dpi,
    format: OutputFormat,
) -> String {
    format!(
        "PDF conversion complete!\n\n\
         Pages converted: {}\n\
         Output folder: {}\n\
         Resolution: {}\n\
         Format: {}\n\n\
         Open the output folder?",
        page_count,
        output_folder.display(),
        dpi,
        format.short_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_run_details() {
        let summary = completion_summary(
            12,
            Path::new("/out/report"),
            Dpi::Dpi600,
            OutputFormat::Jpeg,
        );
        assert!(summary.contains("Pages converted: 12"));
        assert!(summary.contains("Output folder: /out/report"));
        assert!(summary.contains("Resolution: 600 DPI"));
        assert!(summary.contains("Format: JPG"));
    }
}
