//! Memory-bounded image loading with center-square cropping.
//!
//! Loading a gallery-sized photo into a small view at full resolution wastes
//! memory; `squarethumb` runs the bounds-then-decode protocol instead: read
//! only the encoded image's dimensions, compute a power-of-two sub-sampling
//! factor against the target box, decode at the reduced resolution, then
//! crop the largest centered square (optionally rescaled to a fixed side).
//!
//! # Example
//!
//! ```no_run
//! use squarethumb::ThumbnailLoader;
//!
//! let raw_bytes = std::fs::read("photo.jpg").unwrap();
//! let thumb = ThumbnailLoader::new(raw_bytes)
//!     .unwrap()
//!     .fit_within(256, 256)
//!     .side_length(128)
//!     .load()
//!     .unwrap();
//! println!("{}x{} (sampled /{})", thumb.side(), thumb.side(), thumb.sample_factor);
//! ```
#![warn(missing_docs)]

mod crop;
mod error;
mod load;
mod sample;

use image::DynamicImage;

/// Center-square geometry: region type and calculator.
pub use crop::{center_square_region, SquareRegion};
/// Error type returned by squarethumb operations.
pub use error::ThumbError;
/// Bitmap operations: bounds decode, sampled decode, and the square crop.
pub use load::{crop_center_square, decode_sampled, image_bounds, ScaleFilter};
/// Sub-sampling factor computation and the dimensions value type.
pub use sample::{sample_factor, Dimensions};

/// Result of a single thumbnail load.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// The decoded, cropped (and possibly rescaled) square image.
    pub image: DynamicImage,

    /// True pixel dimensions of the encoded source, before sub-sampling.
    pub source: Dimensions,

    /// The power-of-two factor the source was decoded at.
    pub sample_factor: u32,
}

impl Thumbnail {
    /// Side length of the square output in pixels.
    pub fn side(&self) -> u32 {
        self.image.width()
    }
}

/// Builder for loading square thumbnails from encoded image bytes.
///
/// Validates the container format on construction, then runs the two-phase
/// decode with configurable target box, output side, and rescale filter.
pub struct ThumbnailLoader {
    input: Vec<u8>,
    bound: Option<Dimensions>,
    side_length: Option<u32>,
    filter: ScaleFilter,
    auto_orient: bool,
}

impl ThumbnailLoader {
    /// Create a new loader from raw image bytes (JPEG, PNG, or WebP).
    pub fn new(input: Vec<u8>) -> Result<Self, ThumbError> {
        // Validate that the input carries a recognizable container
        load::detect_format(&input)?;

        Ok(Self {
            input,
            bound: None,
            side_length: None,
            filter: ScaleFilter::default(),
            auto_orient: true,
        })
    }

    /// Set the target box the decoded image must cover.
    ///
    /// The decode is sub-sampled by the largest power of two that still
    /// leaves both dimensions covering this box. Unset means the image is
    /// decoded at full resolution.
    pub fn fit_within(mut self, width: u32, height: u32) -> Self {
        self.bound = Some(Dimensions { width, height });
        self
    }

    /// Rescale the cropped square to a fixed side length in pixels.
    pub fn side_length(mut self, side: u32) -> Self {
        self.side_length = Some(side);
        self
    }

    /// Set the rescale filter (default: [`ScaleFilter::Bilinear`]).
    ///
    /// Only applies when a side length is set.
    pub fn filter(mut self, filter: ScaleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Enable or disable the EXIF orientation fix (default: enabled).
    pub fn auto_orient(mut self, enable: bool) -> Self {
        self.auto_orient = enable;
        self
    }

    /// Decode, crop, and rescale with the configured settings.
    pub fn load(self) -> Result<Thumbnail, ThumbError> {
        if self.side_length == Some(0) {
            return Err(ThumbError::InvalidSideLength);
        }

        let source = load::image_bounds(&self.input)?;
        if source.width == 0 || source.height == 0 {
            return Err(ThumbError::ZeroDimensions);
        }

        let factor = match self.bound {
            Some(bound) => sample_factor(source, bound.width, bound.height),
            None => 1,
        };

        let decoded = load::decode_sampled(&self.input, factor, self.auto_orient)?;
        let image = load::crop_center_square(&decoded, self.side_length, self.filter)?;

        Ok(Thumbnail {
            image,
            source,
            sample_factor: factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_png(width: u32, height: u32) -> Vec<u8> {
        use image::codecs::png::PngEncoder;
        use image::ImageEncoder;
        use image::RgbImage;

        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
            ]);
        }
        let mut buffer = Vec::new();
        let encoder = PngEncoder::new(&mut buffer);
        encoder
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        buffer
    }

    #[test]
    fn loader_defaults_crop_at_full_resolution() {
        let png = make_test_png(400, 300);
        let thumb = ThumbnailLoader::new(png).unwrap().load().unwrap();
        assert_eq!(thumb.side(), 300);
        assert_eq!(thumb.image.height(), 300);
        assert_eq!(thumb.sample_factor, 1);
        assert_eq!(thumb.source, Dimensions::new(400, 300));
    }

    #[test]
    fn loader_with_target_box_sub_samples() {
        let png = make_test_png(400, 300);
        let thumb = ThumbnailLoader::new(png)
            .unwrap()
            .fit_within(100, 100)
            .load()
            .unwrap();
        // Halves are 200x150; factor 2 still covers 100x100, factor 4 does
        // not (75 < 100). Decoded at 200x150, the center square is 150.
        assert_eq!(thumb.sample_factor, 2);
        assert_eq!(thumb.side(), 150);
        // The reported source keeps the true encoded dimensions.
        assert_eq!(thumb.source, Dimensions::new(400, 300));
    }

    #[test]
    fn loader_with_side_length() {
        let png = make_test_png(400, 300);
        let thumb = ThumbnailLoader::new(png)
            .unwrap()
            .fit_within(100, 100)
            .side_length(64)
            .load()
            .unwrap();
        assert_eq!(thumb.side(), 64);
        assert_eq!(thumb.image.height(), 64);
    }

    #[test]
    fn loader_with_nearest_filter() {
        let png = make_test_png(400, 300);
        let thumb = ThumbnailLoader::new(png)
            .unwrap()
            .side_length(50)
            .filter(ScaleFilter::Nearest)
            .load()
            .unwrap();
        assert_eq!(thumb.side(), 50);
    }

    #[test]
    fn loader_without_orientation_fix() {
        // PNG carries no EXIF orientation, so the toggle must be a no-op.
        let png = make_test_png(120, 90);
        let thumb = ThumbnailLoader::new(png)
            .unwrap()
            .auto_orient(false)
            .load()
            .unwrap();
        assert_eq!(thumb.side(), 90);
    }

    #[test]
    fn loader_zero_side_length() {
        let png = make_test_png(100, 100);
        let result = ThumbnailLoader::new(png).unwrap().side_length(0).load();
        assert!(matches!(result, Err(ThumbError::InvalidSideLength)));
    }

    #[test]
    fn loader_zero_target_box_means_full_resolution() {
        let png = make_test_png(400, 300);
        let thumb = ThumbnailLoader::new(png)
            .unwrap()
            .fit_within(0, 0)
            .load()
            .unwrap();
        assert_eq!(thumb.sample_factor, 1);
        assert_eq!(thumb.side(), 300);
    }

    #[test]
    fn loader_invalid_input() {
        let result = ThumbnailLoader::new(b"not an image".to_vec());
        assert!(matches!(result, Err(ThumbError::UnsupportedFormat)));
    }
}
