//! The bitmap codec: turn a pixel grid into a finished `.bmp` artifact.
//!
//! The artifact is always the same shape: a fixed 138-byte header, then
//! `width * height` pixels at 32 bits each, stored b, g, r, a. There is no
//! palette, no compression, and no row padding (32-bit rows are always
//! 4-byte aligned). Orientation is carried entirely by the sign of the
//! header's height field, so the pixel stream itself never flips.
//!
//! ```rust
//! use vellum::{blank_image, bmp, Origin};
//!
//! let img = blank_image(4, 2)?;
//! let bytes = bmp::encode(img.as_ref(), Origin::TopLeft)?;
//! assert_eq!(bytes.len(), 4 * 2 * 4 + 138);
//! # Ok::<(), vellum::VellumError>(())
//! ```

mod encode;
mod header;

pub use encode::encode;
pub use header::{BmpHeader, HEADER_LEN};

/// Which scan line of the file grid row 0 becomes.
///
/// The format's native order is bottom-up; a negative header height flags
/// top-down storage. Encoding emits rows in grid order either way and lets
/// the header sign carry the difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Grid row 0 is the top scan line (negative height on the wire).
    #[default]
    TopLeft,
    /// Grid row 0 is the bottom scan line (positive height on the wire).
    BottomLeft,
}

/// Encode `img` and write it to `path` as one buffered write.
///
/// The destination is created or truncated. On error the file may be
/// absent or truncated, never silently wrong; the caller decides whether
/// to delete the remains.
#[cfg(feature = "std")]
pub fn save_bmp<P: AsRef<std::path::Path>>(
    path: P,
    img: imgref::ImgRef<'_, rgb::Rgba<u8>>,
    origin: Origin,
) -> Result<(), crate::error::VellumError> {
    let bytes = encode(img, origin)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
