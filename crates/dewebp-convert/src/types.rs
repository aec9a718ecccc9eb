//! Shared types for the dewebp conversion core.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Re-export `DynamicImage` so downstream crates can hold decoded
/// pixel surfaces without depending on `image` directly.
pub use image::DynamicImage;

/// Target raster format for converted images.
///
/// Serialized in lowercase (`"jpeg"`, `"png"`, `"bmp"`), which is also
/// the value used by the format selector and in output file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Baseline JPEG. Alpha is dropped.
    #[default]
    Jpeg,
    /// Lossless PNG with alpha.
    Png,
    /// Uncompressed Windows bitmap with alpha.
    Bmp,
}

impl OutputFormat {
    /// All formats in selector order.
    pub const ALL: [Self; 3] = [Self::Jpeg, Self::Png, Self::Bmp];

    /// File extension without the leading dot.
    ///
    /// JPEG keeps the long `jpeg` spelling so the extension matches the
    /// format identifier.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Bmp => "bmp",
        }
    }

    /// IANA media type of the encoded output.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Bmp => "image/bmp",
        }
    }

    /// Short display label for the format selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPG",
            Self::Png => "PNG",
            Self::Bmp => "BMP",
        }
    }

    /// The matching `image` crate format.
    #[must_use]
    pub const fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
            Self::Bmp => image::ImageFormat::Bmp,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when parsing an unknown format identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format: {0:?}")]
pub struct ParseFormatError(pub String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    /// Parses `jpeg`/`jpg`, `png`, or `bmp`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("jpeg") || s.eq_ignore_ascii_case("jpg") {
            Ok(Self::Jpeg)
        } else if s.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else if s.eq_ignore_ascii_case("bmp") {
            Ok(Self::Bmp)
        } else {
            Err(ParseFormatError(s.to_owned()))
        }
    }
}

/// Settings captured by each conversion at dispatch time.
///
/// Changing the session's config never affects conversions that were
/// already dispatched, nor results that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Target format for new conversions.
    pub format: OutputFormat,

    /// JPEG quality (1..=100). Ignored for lossless formats.
    ///
    /// Out-of-range values are clamped by [`Self::effective_jpeg_quality`].
    pub jpeg_quality: u8,
}

impl ConvertConfig {
    /// Default output format.
    pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Jpeg;

    /// Default JPEG quality: maximum.
    pub const DEFAULT_JPEG_QUALITY: u8 = 100;

    /// Return a copy of this config targeting `format`.
    #[must_use]
    pub const fn with_format(self, format: OutputFormat) -> Self {
        Self { format, ..self }
    }

    /// JPEG quality clamped into the encoder's accepted range.
    #[must_use]
    pub const fn effective_jpeg_quality(&self) -> u8 {
        if self.jpeg_quality == 0 {
            1
        } else if self.jpeg_quality > 100 {
            100
        } else {
            self.jpeg_quality
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            format: Self::DEFAULT_FORMAT,
            jpeg_quality: Self::DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Encoded image bytes in a known output format.
///
/// The bytes are shared, so cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: OutputFormat,
    bytes: Arc<[u8]>,
}

impl EncodedImage {
    /// Wrap already-encoded bytes.
    #[must_use]
    pub fn new(format: OutputFormat, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            format,
            bytes: bytes.into(),
        }
    }

    /// Format the bytes are encoded in.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// The encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// An encoded image reference that can be turned back into raw bytes.
///
/// In-memory images resolve immediately; browser-backed references
/// suspend while the platform reads the underlying blob.
pub trait Materialize {
    /// Error produced when the bytes cannot be obtained.
    type Error: fmt::Display;

    /// Read the full encoded contents.
    fn materialize(&self) -> impl Future<Output = Result<Vec<u8>, Self::Error>>;
}

impl Materialize for EncodedImage {
    type Error = Infallible;

    fn materialize(&self) -> impl Future<Output = Result<Vec<u8>, Self::Error>> {
        std::future::ready(Ok(self.bytes.to_vec()))
    }
}

/// One converted image: its output file name and encoded reference.
///
/// Immutable once created. The reference type `R` is [`EncodedImage`]
/// in the core and a browser-backed handle in the web front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult<R = EncodedImage> {
    name: String,
    image: R,
}

impl<R> ConversionResult<R> {
    /// Pair an output name with its encoded image.
    #[must_use]
    pub const fn new(name: String, image: R) -> Self {
        Self { name, image }
    }

    /// Output file name (stem plus the target extension).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The encoded image reference.
    #[must_use]
    pub const fn image(&self) -> &R {
        &self.image
    }

    /// Replace the reference type, keeping the name.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `f`.
    pub fn try_map<S, E>(
        self,
        f: impl FnOnce(R) -> Result<S, E>,
    ) -> Result<ConversionResult<S>, E> {
        Ok(ConversionResult {
            name: self.name,
            image: f(self.image)?,
        })
    }
}

/// Errors that can occur while converting a single file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input file contained no bytes.
    #[error("input image data is empty")]
    EmptyInput,

    /// The bytes could not be decoded (corrupt or unsupported variant).
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The decoded surface could not be encoded to the target format.
    #[error("failed to encode {format}: {source}")]
    Encode {
        /// Target format of the failed encode.
        format: OutputFormat,
        /// Underlying encoder error.
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn extension_matches_display() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string(), format.extension());
        }
    }

    #[test]
    fn parse_accepts_jpg_alias_and_case() {
        assert_eq!("JPG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!(" Png ".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("bmp".parse::<OutputFormat>().unwrap(), OutputFormat::Bmp);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "gif".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err, ParseFormatError("gif".into()));
    }

    #[test]
    fn serializes_as_lowercase_identifier() {
        let json = serde_json::to_string(&OutputFormat::Bmp).unwrap();
        assert_eq!(json, "\"bmp\"");
        let parsed: OutputFormat = serde_json::from_str("\"jpeg\"").unwrap();
        assert_eq!(parsed, OutputFormat::Jpeg);
    }

    #[test]
    fn default_config_is_maximum_quality_jpeg() {
        let config = ConvertConfig::default();
        assert_eq!(config.format, OutputFormat::Jpeg);
        assert_eq!(config.effective_jpeg_quality(), 100);
    }

    #[test]
    fn jpeg_quality_is_clamped() {
        let low = ConvertConfig {
            jpeg_quality: 0,
            ..ConvertConfig::default()
        };
        let high = ConvertConfig {
            jpeg_quality: 250,
            ..ConvertConfig::default()
        };
        assert_eq!(low.effective_jpeg_quality(), 1);
        assert_eq!(high.effective_jpeg_quality(), 100);
    }

    #[test]
    fn with_format_keeps_quality() {
        let config = ConvertConfig {
            jpeg_quality: 80,
            ..ConvertConfig::default()
        }
        .with_format(OutputFormat::Png);
        assert_eq!(config.format, OutputFormat::Png);
        assert_eq!(config.jpeg_quality, 80);
    }

    #[test]
    fn encoded_image_materializes_its_bytes() {
        let image = EncodedImage::new(OutputFormat::Png, vec![1, 2, 3]);
        let bytes = futures::executor::block_on(image.materialize()).unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn try_map_keeps_name() {
        let result = ConversionResult::new("a.png".into(), 7_u32);
        let mapped: ConversionResult<String> =
            result.try_map(|n| Ok::<_, ()>(n.to_string())).unwrap();
        assert_eq!(mapped.name(), "a.png");
        assert_eq!(mapped.image(), "7");
    }
}
