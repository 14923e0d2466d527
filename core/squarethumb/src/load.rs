use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::crop::center_square_region;
use crate::error::ThumbError;
use crate::sample::Dimensions;

/// Rescale filter used when a fixed output side length is requested.
///
/// Bilinear filtering has better image quality at the cost of worse
/// performance; nearest-neighbor is faster but blockier. The cost of
/// bilinear filtering is typically minimal, so it is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleFilter {
    /// Bilinear interpolation (default).
    #[default]
    Bilinear,
    /// Nearest-neighbor sampling.
    Nearest,
}

impl From<ScaleFilter> for FilterType {
    fn from(filter: ScaleFilter) -> Self {
        match filter {
            ScaleFilter::Bilinear => FilterType::Triangle,
            ScaleFilter::Nearest => FilterType::Nearest,
        }
    }
}

/// Validate that the input bytes carry a recognizable image container.
pub(crate) fn detect_format(input: &[u8]) -> Result<image::ImageFormat, ThumbError> {
    image::guess_format(input).map_err(|_| ThumbError::UnsupportedFormat)
}

/// Read the pixel dimensions of an encoded image without decoding pixels.
///
/// This is the first phase of the bounds-then-decode protocol: only the
/// container header is parsed, no pixel buffer is allocated.
pub fn image_bounds(input: &[u8]) -> Result<Dimensions, ThumbError> {
    let (width, height) = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| ThumbError::DecodeError(e.to_string()))?
        .into_dimensions()
        .map_err(|e| ThumbError::DecodeError(e.to_string()))?;

    Ok(Dimensions { width, height })
}

/// Decode an image at resolution reduced by `factor`.
///
/// Each dimension is divided by `factor` with floor division (minimum one
/// pixel per side) and the pixels decimated with nearest-neighbor sampling.
/// A factor of 1 (or 0) decodes at full resolution.
///
/// When `auto_orient` is set, the EXIF orientation reported by the decoder
/// is applied after decimation, so a rotated source comes out upright.
pub fn decode_sampled(
    input: &[u8],
    factor: u32,
    auto_orient: bool,
) -> Result<DynamicImage, ThumbError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| ThumbError::DecodeError(e.to_string()))?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| ThumbError::DecodeError(e.to_string()))?;
    let orientation = decoder
        .orientation()
        .map_err(|e| ThumbError::DecodeError(e.to_string()))?;
    let mut image = DynamicImage::from_decoder(decoder)
        .map_err(|e| ThumbError::DecodeError(e.to_string()))?;

    if factor > 1 {
        let width = (image.width() / factor).max(1);
        let height = (image.height() / factor).max(1);
        image = image.resize_exact(width, height, FilterType::Nearest);
    }

    if auto_orient {
        image.apply_orientation(orientation);
    }

    Ok(image)
}

/// Crop exactly the center square out of `source`.
///
/// The square side is `min(width, height)`. When `side_length` is given, the
/// cropped square is rescaled once to `side_length × side_length` with the
/// chosen filter. The source is never mutated; both crop and rescale produce
/// new buffers.
///
/// Fails with [`ThumbError::ZeroDimensions`] for a zero-sized source and
/// [`ThumbError::InvalidSideLength`] for `side_length == Some(0)`.
pub fn crop_center_square(
    source: &DynamicImage,
    side_length: Option<u32>,
    filter: ScaleFilter,
) -> Result<DynamicImage, ThumbError> {
    if source.width() == 0 || source.height() == 0 {
        return Err(ThumbError::ZeroDimensions);
    }
    if side_length == Some(0) {
        return Err(ThumbError::InvalidSideLength);
    }

    let region = center_square_region(source.width(), source.height());
    let mut square = source.crop_imm(region.left, region.top, region.side, region.side);

    if let Some(side) = side_length {
        square = square.resize_exact(side, side, filter.into());
    }

    Ok(square)
}
