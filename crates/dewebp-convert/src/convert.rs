//! Decoding WebP input and re-encoding it into the target format.
//!
//! Raw bytes in, encoded bytes out. Decoding goes through the `image`
//! crate's format sniffing, so a file tagged as WebP whose bytes are
//! some other supported format still converts.

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::naming;
use crate::types::{ConversionResult, ConvertConfig, ConvertError, EncodedImage, OutputFormat};

/// Decode raw image bytes into a pixel surface.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyInput`] if `bytes` is empty.
/// Returns [`ConvertError::Decode`] if the data is corrupt or uses an
/// unsupported variant.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
    if bytes.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    image::load_from_memory(bytes).map_err(ConvertError::Decode)
}

/// Encode a decoded surface into `config.format`.
///
/// JPEG is written from RGB (alpha dropped) at the configured quality.
/// PNG and BMP are written losslessly from RGBA.
///
/// # Errors
///
/// Returns [`ConvertError::Encode`] if the encoder rejects the surface.
pub fn encode(
    image: &DynamicImage,
    config: &ConvertConfig,
) -> Result<EncodedImage, ConvertError> {
    let format = config.format;
    let (width, height) = (image.width(), image.height());
    let mut buf = Vec::new();

    let written = match format {
        OutputFormat::Jpeg => {
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, config.effective_jpeg_quality()).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        OutputFormat::Png => {
            let rgba = image.to_rgba8();
            PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive)
                .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        }
        OutputFormat::Bmp => {
            let rgba = image.to_rgba8();
            BmpEncoder::new(&mut buf).write_image(
                rgba.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )
        }
    };
    written.map_err(|source| ConvertError::Encode { format, source })?;

    Ok(EncodedImage::new(format, buf))
}

/// Convert one named input file.
///
/// Decodes `bytes`, encodes into `config.format`, and names the result
/// with [`naming::output_name`].
///
/// # Errors
///
/// Returns any [`ConvertError`] from [`decode`] or [`encode`].
pub fn convert(
    name: &str,
    bytes: &[u8],
    config: &ConvertConfig,
) -> Result<ConversionResult, ConvertError> {
    let decoded = decode(bytes)?;
    let encoded = encode(&decoded, config)?;
    let output = naming::output_name(name, config.format);
    debug!(
        input = name,
        output = %output,
        width = decoded.width(),
        height = decoded.height(),
        encoded_len = encoded.bytes().len(),
        "converted image"
    );
    Ok(ConversionResult::new(output, encoded))
}
