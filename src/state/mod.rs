/// State management module
///
/// This module holds the data that moves between the form and the worker:
/// request, page and outcome types (data.rs)

pub mod data;
