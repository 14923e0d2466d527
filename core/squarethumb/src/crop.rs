/// Square region within a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRegion {
    /// X offset of the square's left edge (pixels).
    pub left: u32,
    /// Y offset of the square's top edge (pixels).
    pub top: u32,
    /// Side length of the square (pixels).
    pub side: u32,
}

/// Calculate the largest centered square region for the given source
/// dimensions.
///
/// The side is `min(width, height)`; the offsets are the floating-point
/// midpoint difference truncated toward zero, which places the square one
/// pixel toward the top-left when the leftover margin is odd.
pub fn center_square_region(width: u32, height: u32) -> SquareRegion {
    let side = width.min(height);
    let left = (width as f64 / 2.0 - side as f64 / 2.0) as u32;
    let top = (height as f64 / 2.0 - side as f64 / 2.0) as u32;

    SquareRegion { left, top, side }
}
