//! Dioxus UI components for dewebp.
//!
//! Provides the multi-file upload zone, output format selector, result
//! grid, and export panel.

mod export;
mod format_select;
mod results;
mod upload;

pub use export::ExportPanel;
pub use format_select::FormatSelect;
pub use results::{PreviewItem, ResultGrid};
pub use upload::{FileUpload, PickedFile};
