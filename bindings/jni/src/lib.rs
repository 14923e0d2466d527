uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ThumbError {
    #[error("failed to decode image: {message}")]
    DecodeError { message: String },
    #[error("unsupported image format")]
    UnsupportedFormat,
    #[error("image dimensions are zero")]
    ZeroDimensions,
    #[error("side length must be > 0")]
    InvalidSideLength,
}

impl From<squarethumb::ThumbError> for ThumbError {
    fn from(e: squarethumb::ThumbError) -> Self {
        match e {
            squarethumb::ThumbError::DecodeError(msg) => ThumbError::DecodeError { message: msg },
            squarethumb::ThumbError::UnsupportedFormat => ThumbError::UnsupportedFormat,
            squarethumb::ThumbError::ZeroDimensions => ThumbError::ZeroDimensions,
            squarethumb::ThumbError::InvalidSideLength => ThumbError::InvalidSideLength,
        }
    }
}

#[derive(uniffi::Enum)]
pub enum ScaleFilter {
    Bilinear,
    Nearest,
}

impl From<ScaleFilter> for squarethumb::ScaleFilter {
    fn from(filter: ScaleFilter) -> Self {
        match filter {
            ScaleFilter::Bilinear => squarethumb::ScaleFilter::Bilinear,
            ScaleFilter::Nearest => squarethumb::ScaleFilter::Nearest,
        }
    }
}

/// Pixel dimensions of an encoded image.
#[derive(uniffi::Record)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

/// A loaded square thumbnail: RGBA8 row-major pixels plus source and
/// sampling metadata. The pixel buffer plugs straight into
/// `Bitmap.copyPixelsFromBuffer` on the Kotlin side.
#[derive(uniffi::Record)]
pub struct Thumbnail {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub source_width: u32,
    pub source_height: u32,
    pub sample_factor: u32,
}

fn convert_thumbnail(thumb: squarethumb::Thumbnail) -> Thumbnail {
    let source = thumb.source;
    let factor = thumb.sample_factor;
    let rgba = thumb.image.into_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    Thumbnail {
        pixels: rgba.into_raw(),
        width,
        height,
        source_width: source.width,
        source_height: source.height,
        sample_factor: factor,
    }
}

/// Load a square thumbnail sized to fit a view of `side × side` pixels.
#[uniffi::export]
pub fn load_square(input: Vec<u8>, side: u32) -> Result<Thumbnail, ThumbError> {
    let thumb = squarethumb::ThumbnailLoader::new(input)?
        .fit_within(side, side)
        .side_length(side)
        .load()?;

    Ok(convert_thumbnail(thumb))
}

/// Load a thumbnail with full control over all parameters.
///
/// `target_width`/`target_height` bound the sub-sampled decode; pass the
/// view's dimensions. A zero-sized target disables sub-sampling.
#[uniffi::export]
pub fn load_thumbnail(
    input: Vec<u8>,
    target_width: u32,
    target_height: u32,
    side_length: Option<u32>,
    filter: ScaleFilter,
    auto_orient: bool,
) -> Result<Thumbnail, ThumbError> {
    let mut loader = squarethumb::ThumbnailLoader::new(input)?
        .fit_within(target_width, target_height)
        .filter(filter.into())
        .auto_orient(auto_orient);
    if let Some(side) = side_length {
        loader = loader.side_length(side);
    }

    Ok(convert_thumbnail(loader.load()?))
}

/// Read the pixel dimensions of an encoded image without decoding pixels.
#[uniffi::export]
pub fn image_bounds(input: Vec<u8>) -> Result<Bounds, ThumbError> {
    let bounds = squarethumb::image_bounds(&input)?;
    Ok(Bounds {
        width: bounds.width,
        height: bounds.height,
    })
}

/// Compute the power-of-two sub-sampling factor for the given source and
/// target dimensions.
#[uniffi::export]
pub fn compute_sample_factor(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> u32 {
    squarethumb::sample_factor(
        squarethumb::Dimensions::new(source_width, source_height),
        target_width,
        target_height,
    )
}
