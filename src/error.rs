//! The crate-wide error type.

/// Everything that can go wrong while encoding, parsing, or persisting.
///
/// Validation failures (`EmptyImage`, `ImageTooLarge`) are reported before
/// any byte is produced; decode failures (`TruncatedInput`, `NotABitmap`,
/// `UnsupportedBitmap`, `CountTooLarge`) are reported before any partial
/// value escapes. Nothing is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum VellumError {
    /// A pixel grid with zero width or zero height was supplied.
    #[error("image has zero width or height")]
    EmptyImage,

    /// The pixel payload would overflow the bitmap header's 32-bit fields.
    #[error("{width}x{height} pixels do not fit a 32-bit bitmap file size")]
    ImageTooLarge { width: usize, height: usize },

    /// The input ended before the declared content.
    #[error("truncated input: needed {needed} bytes, got {got}")]
    TruncatedInput { needed: usize, got: usize },

    /// A sequence prefix declared more elements than can be materialized.
    #[error("cannot materialize {count} elements of {element_size} bytes each")]
    CountTooLarge { count: u64, element_size: usize },

    /// The bytes do not start with the `BM` magic.
    #[error("not a bitmap file")]
    NotABitmap,

    /// A real bitmap header, but not the 32-bit uncompressed layout this
    /// crate writes.
    #[error("unsupported bitmap layout (expected 32-bit uncompressed BGRA)")]
    UnsupportedBitmap,

    /// The underlying sink, source, or filesystem failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
