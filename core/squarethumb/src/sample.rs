/// Pixel dimensions of an image or target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Construct from a width/height pair.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Compute the power-of-two sub-sampling factor for decoding `source` into
/// a buffer no larger than needed to fill `target_width` × `target_height`.
///
/// The factor is the largest power of two such that half the source, divided
/// by the factor, still covers the target in both dimensions (integer floor
/// division at every step). A source that already fits the target gives 1.
///
/// A zero-valued target dimension means there is no usable bound to sample
/// against; the factor degrades to 1 rather than dividing by zero.
pub fn sample_factor(source: Dimensions, target_width: u32, target_height: u32) -> u32 {
    let mut factor = 1;

    if source.height > target_height || source.width > target_width {
        if target_width == 0 || target_height == 0 {
            return factor;
        }

        let half_height = source.height / 2;
        let half_width = source.width / 2;

        while half_height / factor >= target_height && half_width / factor >= target_width {
            factor *= 2;
        }
    }

    factor
}
