//! Pixel values and grid constructors.
//!
//! The crate's pixel record is [`rgb::Rgba<u8>`]: four 8-bit channels in
//! memory order r, g, b, a. Grids are [`imgref::ImgVec`] / [`imgref::ImgRef`],
//! so rectangularity is guaranteed by construction. The on-disk channel order
//! (b, g, r, a) is the bitmap encoder's business, never this module's.

use alloc::vec;

use imgref::ImgVec;
use rgb::Rgba;

use crate::error::VellumError;

/// Opaque white, the fill value for fresh grids.
pub const WHITE: Rgba<u8> = Rgba::new(255, 255, 255, 255);

/// Allocate a `width` x `height` grid with every pixel opaque white.
///
/// Returns [`VellumError::EmptyImage`] when either dimension is zero and
/// [`VellumError::ImageTooLarge`] when the pixel count overflows `usize`.
pub fn blank_image(width: usize, height: usize) -> Result<ImgVec<Rgba<u8>>, VellumError> {
    if width == 0 || height == 0 {
        return Err(VellumError::EmptyImage);
    }
    let len = width
        .checked_mul(height)
        .ok_or(VellumError::ImageTooLarge { width, height })?;
    Ok(ImgVec::new(vec![WHITE; len], width, height))
}

// ---------------------------------------------------------------------------
// f32 bit transport
// ---------------------------------------------------------------------------

/// Reinterpret a pixel's four bytes as an `f32` bit pattern.
///
/// For smuggling a color through a float-typed channel (vertex attribute,
/// uniform, record field). The result is a bit pattern, not a number: it may
/// be NaN, and it must not pass through float arithmetic on the way back.
#[inline]
#[must_use]
pub fn pixel_to_f32_bits(pixel: Rgba<u8>) -> f32 {
    bytemuck::cast(pixel)
}

/// Recover a pixel from an `f32` produced by [`pixel_to_f32_bits`].
#[inline]
#[must_use]
pub fn pixel_from_f32_bits(bits: f32) -> Rgba<u8> {
    bytemuck::cast(bits)
}
