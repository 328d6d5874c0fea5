//! # vellum
//!
//! *Put your pixels in writing.*
//!
//! A tiny binary persistence layer with two jobs it refuses to grow beyond:
//! turning a rectangular grid of RGBA pixels into a standard 32-bit `.bmp`
//! artifact any image viewer can open, and turning fixed-layout plain
//! records (and sequences of them) into raw native bytes and back.
//!
//! ## Bitmap codec
//!
//! [`bmp::encode`] builds the complete artifact in memory; [`save_bmp`]
//! lands it on disk in one buffered write. The header is a fixed 138 bytes,
//! pixels are stored b, g, r, a with no row padding, and orientation rides
//! exclusively on the sign of the header's height field ([`Origin`]).
//!
//! ## Plain records
//!
//! Any [`bytemuck::Pod`] type persists through [`record::write_record`] /
//! [`record::read_record`]; [`record::write_records`] prefixes a sequence
//! with an 8-byte native-endian count that readers honor exactly. These are
//! same-host memory images, not an interchange format.
//!
//! ## Feature flags
//!
//! - **`std`** (default) — file output ([`save_bmp`]) and the
//!   `std::io`-based record codec. Without it, the bitmap codec still
//!   encodes into `alloc` vectors.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bmp;
pub mod color;
pub mod error;
pub mod index;
pub mod pixel;
#[cfg(feature = "std")]
pub mod record;

#[cfg(feature = "std")]
pub use bmp::save_bmp;
pub use bmp::{BmpHeader, Origin};
pub use error::VellumError;
pub use index::{collapse_2d, collapse_3d};
pub use pixel::{WHITE, blank_image};
