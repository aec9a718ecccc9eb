//! Blob-backed encoded images.
//!
//! Converted bytes are handed to the browser once as a `Blob`. The
//! object URL serves both as the `<img src>` preview and as the target
//! of a single-file download, so the bytes are not copied per render.

use dewebp_convert::{ConversionResult, EncodedImage, Materialize, OutputFormat, ResultList};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating or reading a Blob.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create a `Blob` holding `bytes` with the given MIME type.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if Blob creation fails.
pub fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<web_sys::Blob, BlobError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    Ok(web_sys::Blob::new_with_u8_array_sequence_and_options(
        &parts, &opts,
    )?)
}

/// An encoded image held by the browser, with a live object URL.
///
/// The object URL is revoked when the value is dropped, i.e. when the
/// entry is removed from the result list or the list is cleared.
#[derive(Debug)]
pub struct BlobImage {
    format: OutputFormat,
    blob: web_sys::Blob,
    url: String,
}

impl BlobImage {
    /// Copy encoded bytes into a new `Blob` and create its object URL.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if Blob or URL creation fails.
    pub fn from_encoded(image: &EncodedImage) -> Result<Self, BlobError> {
        let format = image.format();
        let blob = bytes_to_blob(image.bytes(), format.mime_type())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { format, blob, url })
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Object URL usable as an `<img src>` or download `href`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// A handle to the same Blob that stays readable after this value
    /// is dropped.
    #[must_use]
    pub fn snapshot(&self) -> BlobSnapshot {
        BlobSnapshot(self.blob.clone())
    }
}

impl Drop for BlobImage {
    fn drop(&mut self) {
        // Best-effort: the URL may already be gone.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

/// A detached Blob handle used while bytes are read asynchronously.
#[derive(Debug, Clone)]
pub struct BlobSnapshot(web_sys::Blob);

impl Materialize for BlobSnapshot {
    type Error = BlobError;

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Blob is !Send
    async fn materialize(&self) -> Result<Vec<u8>, Self::Error> {
        let buffer = JsFuture::from(self.0.array_buffer()).await?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Snapshot every entry so the list can be read across `await` points
/// without holding a borrow of the live session.
#[must_use]
pub fn snapshot_results(results: &ResultList<BlobImage>) -> ResultList<BlobSnapshot> {
    results
        .iter()
        .map(|result| ConversionResult::new(result.name().to_owned(), result.image().snapshot()))
        .collect()
}
