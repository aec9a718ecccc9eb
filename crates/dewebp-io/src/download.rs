//! File download via Blob URLs.
//!
//! Dioxus has no built-in file download API.  This module triggers
//! downloads by programmatically clicking a temporary `<a download>`
//! element pointing at an object URL.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::blob::{self, BlobError};

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The Blob holding the download could not be created.
    #[error(transparent)]
    Blob(#[from] BlobError),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Save the resource at `url` under `filename`.
///
/// Used directly for converted images, whose object URL already exists.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the window, document, or body
/// is unavailable or element creation fails.
pub fn save_url(url: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);

    // Append to body, click, and remove.
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download is already initiated; cleanup failures are not
    // reported as "download failed".
    let _ = body.remove_child(&anchor);

    Ok(())
}

/// Save `data` under `filename` via a temporary Blob URL.
///
/// The object URL is revoked after the click.
///
/// # Errors
///
/// Returns [`DownloadError::Blob`] if the Blob cannot be created and
/// [`DownloadError::JsError`] for any other browser API failure.
pub fn save_bytes(data: &[u8], filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let blob = blob::bytes_to_blob(data, mime_type)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let saved = save_url(&url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    saved
}
