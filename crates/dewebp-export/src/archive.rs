//! ZIP archive serializer for conversion results.
//!
//! Entries are stored under a folder named after the output format
//! (`jpegs/`, `pngs/`, `bmps/`). Timestamps are fixed so the same
//! entries always serialize to the same bytes.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use dewebp_convert::{Materialize, OutputFormat, ResultList};
use futures::future::try_join_all;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Media type of the serialized archive.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// Errors that can occur while building an archive.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An entry's encoded reference could not be read back into bytes.
    #[error("failed to read {name}: {message}")]
    Materialize {
        /// Output name of the entry that failed.
        name: String,
        /// Reason reported by the reference.
        message: String,
    },

    /// The ZIP writer rejected an entry or failed to finish.
    #[error("failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing entry bytes into the in-memory archive failed.
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// A serialized archive ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// Download file name.
    pub name: String,
    /// ZIP bytes.
    pub bytes: Vec<u8>,
}

/// Folder inside the archive holding every entry: the extension plus `s`.
#[must_use]
pub fn folder_name(format: OutputFormat) -> String {
    format!("{}s", format.extension())
}

/// Download name of the archive for `format`.
#[must_use]
pub fn archive_name(format: OutputFormat) -> String {
    format!("imagenes_convertidas_{}.zip", format.extension())
}

/// Serialize named byte blobs into a ZIP archive.
///
/// Entries keep their order. Repeated names get a ` (n)` counter before
/// the extension so every entry survives.
///
/// # Errors
///
/// Returns [`ExportError::Archive`] or [`ExportError::Io`] if the ZIP
/// writer fails.
pub fn write_archive(
    format: OutputFormat,
    entries: &[(String, Vec<u8>)],
) -> Result<Archive, ExportError> {
    let folder = folder_name(format);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut used = HashSet::new();
    for (name, bytes) in entries {
        let unique = unique_name(name, &mut used);
        writer.start_file(format!("{folder}/{unique}"), options)?;
        writer.write_all(bytes)?;
    }
    let bytes = writer.finish()?.into_inner();

    let name = archive_name(format);
    info!(archive = %name, entries = entries.len(), size = bytes.len(), "built archive");
    Ok(Archive { name, bytes })
}

/// Materialize every result concurrently and serialize the archive.
///
/// Returns `Ok(None)` for an empty list. All entries are read before
/// anything is written; the first failure aborts the whole export.
///
/// # Errors
///
/// Returns [`ExportError::Materialize`] naming the first entry that
/// could not be read, or any error from [`write_archive`].
pub async fn bundle<R: Materialize>(
    results: &ResultList<R>,
    format: OutputFormat,
) -> Result<Option<Archive>, ExportError> {
    if results.is_empty() {
        debug!("nothing to export");
        return Ok(None);
    }

    let entries = try_join_all(results.iter().map(|result| async move {
        let name = result.name().to_owned();
        match result.image().materialize().await {
            Ok(bytes) => Ok((name, bytes)),
            Err(e) => Err(ExportError::Materialize {
                name,
                message: e.to_string(),
            }),
        }
    }))
    .await?;

    write_archive(format, &entries).map(Some)
}

/// Return `name`, or `stem (n).ext` if it was already used.
fn unique_name(name: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.to_owned()) {
        return name.to_owned();
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };
    (1..)
        .map(|n| match ext {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        })
        .find(|candidate| used.insert(candidate.clone()))
        .unwrap_or_else(|| name.to_owned())
}
