//! dewebp-export: Pure archive serializer (sans-IO)
//!
//! Bundles conversion results into a single ZIP archive.

pub mod archive;

pub use archive::{
    ARCHIVE_MIME_TYPE, Archive, ExportError, archive_name, bundle, folder_name, write_archive,
};
