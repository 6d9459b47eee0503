// UI helper library for the stock-management front end: table-to-CSV
// export, toast/confirmation/hint surface, form auto-save, debounced
// callbacks, keyboard shortcuts and product CSV import. Rendering itself
// stays in the host application; this crate supplies the machinery behind
// it.

pub mod autosave;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod import;
pub mod shortcuts;
pub mod surface;

pub use error::UiError;
