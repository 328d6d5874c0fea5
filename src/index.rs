//! Row-major index collapsing.
//!
//! These helpers define the linear-memory convention the rest of the crate
//! obeys: within a row, `x` addresses adjacent elements; rows are `width`
//! elements apart. Nothing here checks bounds. Out-of-range coordinates
//! produce well-defined but meaningless offsets; the caller owns the range
//! check, the same as raw slice arithmetic.

/// Collapse an `(x, y)` coordinate into a row-major linear offset.
///
/// Row `y` starts at `y * width`, so `collapse_2d(0, 1, w) == w`.
#[inline]
#[must_use]
pub const fn collapse_2d(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Collapse an `(x, y, z)` coordinate into a linear offset.
///
/// `x` selects a `width * height` plane, `y` a row within the plane, and
/// `z` the element within the row.
#[inline]
#[must_use]
pub const fn collapse_3d(x: usize, y: usize, z: usize, width: usize, height: usize) -> usize {
    x * width * height + y * width + z
}
