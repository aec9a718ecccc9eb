//! Output file name derivation.

use crate::types::OutputFormat;

const WEBP_SUFFIX: &str = ".webp";

/// Derive the output file name for a converted image.
///
/// A trailing `.webp` is stripped ignoring ASCII case, then the target
/// extension is appended. Names without the suffix keep their full text
/// as the stem, so `photo` becomes `photo.png`.
#[must_use]
pub fn output_name(original: &str, format: OutputFormat) -> String {
    format!("{}.{}", stem(original), format.extension())
}

/// The part of `original` before a case-insensitive `.webp` suffix.
#[must_use]
pub fn stem(original: &str) -> &str {
    let split = original.len().saturating_sub(WEBP_SUFFIX.len());
    match original.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(WEBP_SUFFIX) => &original[..split],
        _ => original,
    }
}
