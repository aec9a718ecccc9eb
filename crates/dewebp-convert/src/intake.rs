//! Intake filtering by declared media type.
//!
//! Only the type tag reported by the platform is checked. File contents
//! are not sniffed here; the decoder decides what the bytes really are.

use tracing::debug;

/// Media type tag accepted for conversion.
pub const WEBP_MEDIA_TYPE: &str = "image/webp";

/// Errors raised when a batch of candidate files is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// None of the supplied files carried the WebP media type.
    #[error("no WebP files in the selection ({rejected} file(s) ignored)")]
    NoWebpFiles {
        /// How many candidates were supplied and dropped.
        rejected: usize,
    },
}

/// A candidate file with a declared media type.
pub trait MediaTyped {
    /// The platform-reported media type, if any.
    fn media_type(&self) -> Option<&str>;

    /// Whether the declared type is exactly [`WEBP_MEDIA_TYPE`].
    fn is_webp(&self) -> bool {
        self.media_type() == Some(WEBP_MEDIA_TYPE)
    }
}

/// Keep only WebP-tagged files, preserving their order.
///
/// # Errors
///
/// Returns [`IntakeError::NoWebpFiles`] when the filtered set is empty,
/// including when `files` itself is empty.
pub fn select_webp<F: MediaTyped>(files: Vec<F>) -> Result<Vec<F>, IntakeError> {
    let total = files.len();
    let accepted: Vec<F> = files.into_iter().filter(MediaTyped::is_webp).collect();
    debug!(total, accepted = accepted.len(), "filtered intake batch");
    if accepted.is_empty() {
        return Err(IntakeError::NoWebpFiles { rejected: total });
    }
    Ok(accepted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tagged(Option<&'static str>);

    impl MediaTyped for Tagged {
        fn media_type(&self) -> Option<&str> {
            self.0
        }
    }

    #[test]
    fn empty_batch_is_rejected() {
        let result = select_webp(Vec::<Tagged>::new());
        assert_eq!(result.unwrap_err(), IntakeError::NoWebpFiles { rejected: 0 });
    }

    #[test]
    fn batch_without_webp_is_rejected() {
        let files = vec![Tagged(Some("image/png")), Tagged(None)];
        let result = select_webp(files);
        assert_eq!(result.unwrap_err(), IntakeError::NoWebpFiles { rejected: 2 });
    }

    #[test]
    fn keeps_only_webp_in_order() {
        let files = vec![
            Tagged(Some("image/webp")),
            Tagged(Some("image/jpeg")),
            Tagged(Some("image/webp")),
        ];
        let kept = select_webp(files).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(MediaTyped::is_webp));
    }

    #[test]
    fn tag_comparison_is_exact() {
        assert!(!Tagged(Some("IMAGE/WEBP")).is_webp());
        assert!(!Tagged(Some("image/webp; q=1")).is_webp());
    }
}
