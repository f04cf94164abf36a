/// PDF to image conversion module
///
/// This module handles:
/// - The sequential page loop (driver.rs)
/// - PNG / JPEG encoding (encode.rs)
/// - Running the loop off the UI thread (worker.rs)

pub mod driver;
pub mod encode;
pub mod worker;
