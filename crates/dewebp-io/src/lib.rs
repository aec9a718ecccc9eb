//! dewebp-io: Browser I/O and Dioxus component library.
//!
//! Handles file intake, Blob-backed previews, downloads, alerts, locale
//! strings, and console logging, and provides reusable UI components
//! for the dewebp web application.

pub mod alert;
pub mod blob;
pub mod components;
pub mod download;
pub mod i18n;
pub mod logging;

pub use blob::{BlobError, BlobImage, BlobSnapshot};
pub use components::{
    ExportPanel, FileUpload, FormatSelect, PickedFile, PreviewItem, ResultGrid,
};
pub use download::DownloadError;
pub use i18n::{Locale, Strings};
