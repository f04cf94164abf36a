/// View helpers for the converter window
///
/// - `form` - file, DPI and format selection
/// - `progress` - progress bar and status text
/// - `dialogs` - native message boxes

pub mod dialogs;
pub mod form;
pub mod progress;
