//! dewebp-convert: Pure WebP conversion core (sans-IO).
//!
//! Filters candidate files by declared media type, decodes WebP bytes,
//! re-encodes them as JPEG, PNG, or BMP, and keeps the ordered list of
//! results for a session.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. All browser interaction
//! lives in `dewebp-io`.

pub mod convert;
pub mod intake;
pub mod naming;
pub mod results;
pub mod session;
pub mod types;

pub use intake::{IntakeError, MediaTyped, WEBP_MEDIA_TYPE};
pub use naming::output_name;
pub use results::ResultList;
pub use session::{BatchReport, Dispatched, Failure, InputFile, Session};
pub use types::{
    ConversionResult, ConvertConfig, ConvertError, EncodedImage, Materialize, OutputFormat,
    ParseFormatError,
};
