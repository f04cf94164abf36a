use iced::widget::{button, column, container, radio, text, Column};
use iced::{Color, Element, Length};
use std::path::Path;

use crate::state::data::{Dpi, OutputFormat};
use crate::Message;

const SECTION_PADDING: u16 = 15;

/// "Select PDF" section with the chosen file name
pub fn file_section(selected: Option<&Path>, busy: bool) -> Element<'_, Message> {
    let label = match selected {
        Some(path) => text(format!(
            "Selected: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        ))
        .size(14),
        None => text("No file selected")
            .size(14)
            .color(Color::from_rgb(0.6, 0.6, 0.6)),
    };

    section(
        "Select PDF file",
        column![
            label,
            button("Select PDF")
                .on_press_maybe((!busy).then_some(Message::SelectFile))
                .padding(10),
        ]
        .spacing(10),
    )
}

/// Resolution radio group
pub fn dpi_section(selected: Dpi) -> Element<'static, Message> {
    let options = Dpi::ALL.iter().fold(Column::new().spacing(4), |col, &dpi| {
        col.push(radio(dpi.to_string(), dpi, Some(selected), Message::DpiSelected))
    });

    section("Resolution", options)
}

/// Output format radio group
pub fn format_section(selected: OutputFormat) -> Element<'static, Message> {
    let options = OutputFormat::ALL
        .iter()
        .fold(Column::new().spacing(4), |col, &format| {
            col.push(radio(
                format.to_string(),
                format,
                Some(selected),
                Message::FormatSelected,
            ))
        });

    section("Output format", options)
}

/// Titled, padded block shared by every form section
pub fn section<'a>(
    title: &'a str,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(column![text(title).size(16), body.into()].spacing(10))
        .padding(SECTION_PADDING)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
