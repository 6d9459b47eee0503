// Data models and formatting utilities shared by the UI helper crate.
pub mod models;
pub mod utils;
