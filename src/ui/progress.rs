use iced::widget::{column, progress_bar, text};
use iced::Element;

use super::form::section;
use crate::Message;

/// Progress fields shown while a conversion runs.
/// Only `update()` writes these, in response to worker events.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Pages written so far
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current: 0,
            total: 0,
            message: "Select a PDF file to start".to_string(),
        }
    }
}

impl Progress {
    pub fn reset(&mut self, message: impl Into<String>) {
        self.current = 0;
        self.total = 0;
        self.message = message.into();
    }

    pub fn started(&mut self, total: usize) {
        self.current = 0;
        self.total = total;
        self.message = if total == 0 {
            "The document has no pages".to_string()
        } else {
            format!("Converting page 1 of {}...", total)
        };
    }

    pub fn page_written(&mut self, index: usize, total: usize) {
        self.current = index + 1;
        self.total = total;
        self.message = if self.current < total {
            format!("Converting page {} of {}...", self.current + 1, total)
        } else {
            format!("Converted page {} of {}", self.current, total)
        };
    }

    pub fn completed(&mut self, page_count: usize) {
        self.current = page_count;
        self.total = page_count;
        self.message = format!("Conversion complete! {} pages converted", page_count);
    }

    /// Bar position as a fraction of the whole
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Progress panel: message line above a bar
pub fn view(progress: &Progress) -> Element<'_, Message> {
    section(
        "Conversion progress",
        column![
            text(&progress.message).size(14),
            progress_bar(0.0..=1.0, progress.fraction()),
        ]
        .spacing(10),
    )
}
