//! The fixed 138-byte bitmap header.
//!
//! Three consecutive blocks: a 14-byte file header (`BM` magic, total file
//! size, pixel data offset), a 40-byte info header (dimensions, 32 bits per
//! pixel, uncompressed), and an 84-byte block carrying the BGRA channel
//! masks and the sRGB color-space tag. Every multi-byte field is written
//! little-endian, field by field, so the artifact is byte-identical on every
//! host.
//!
//! The height field is signed and does double duty: its magnitude is the
//! pixel height, its sign the scan direction (negative = rows run
//! top-to-bottom). That sign is the only place orientation lives.

use alloc::vec::Vec;

use crate::bmp::Origin;
use crate::error::VellumError;

/// Total header length: 14 + 40 + 84 bytes.
pub const HEADER_LEN: usize = 138;

const MAGIC: [u8; 2] = *b"BM";
const INFO_HEADER_LEN: u32 = 40;
const PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 32;
const COMPRESSION_NONE: u32 = 0;
const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;
const ALPHA_MASK: u32 = 0xFF00_0000;
const COLOR_SPACE_SRGB: u32 = 0x7352_4742;
const BYTES_PER_PIXEL: u32 = 4;

/// A validated bitmap header.
///
/// Construction checks the dimensions, so a value of this type always
/// describes a pixel stream that fits the format: the derived fields
/// ([`file_size`](Self::file_size), [`pixel_len`](Self::pixel_len)) are
/// recomputed from the dimensions and can never disagree with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    width: u32,
    height: u32,
    origin: Origin,
}

impl BmpHeader {
    /// Build a header for a `width` x `height` pixel stream.
    ///
    /// Fails with [`VellumError::EmptyImage`] on a zero dimension and with
    /// [`VellumError::ImageTooLarge`] when the total file size would not
    /// fit the header's 32-bit size field.
    pub fn new(width: usize, height: usize, origin: Origin) -> Result<Self, VellumError> {
        if width == 0 || height == 0 {
            return Err(VellumError::EmptyImage);
        }
        let total = (width as u64)
            .checked_mul(height as u64)
            .and_then(|px| px.checked_mul(u64::from(BYTES_PER_PIXEL)))
            .and_then(|bytes| bytes.checked_add(HEADER_LEN as u64))
            .filter(|&total| total <= u64::from(u32::MAX));
        if total.is_none() {
            return Err(VellumError::ImageTooLarge { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            origin,
        })
    }

    /// Pixel width.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Pixel height (always the magnitude, regardless of origin).
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Which corner grid row 0 maps to.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Total size of the finished artifact: header plus pixel stream.
    pub fn file_size(&self) -> u32 {
        self.width * self.height * BYTES_PER_PIXEL + HEADER_LEN as u32
    }

    /// Offset of the first pixel byte, which is always the header length.
    pub fn pixel_data_offset(&self) -> u32 {
        HEADER_LEN as u32
    }

    /// Byte length of the pixel stream that follows the header.
    pub fn pixel_len(&self) -> usize {
        (self.width * self.height * BYTES_PER_PIXEL) as usize
    }

    // The height field as written: magnitude plus scan-direction sign.
    fn wire_height(&self) -> i32 {
        match self.origin {
            Origin::TopLeft => -(self.height as i32),
            Origin::BottomLeft => self.height as i32,
        }
    }

    /// Append the 138 header bytes to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.reserve(HEADER_LEN);
        // File header.
        out.extend_from_slice(&MAGIC);
        push_u32(out, self.file_size());
        out.extend_from_slice(&[0; 4]); // reserved
        push_u32(out, self.pixel_data_offset());
        // Info header.
        push_u32(out, INFO_HEADER_LEN);
        push_i32(out, self.width as i32);
        push_i32(out, self.wire_height());
        push_u16(out, PLANES);
        push_u16(out, BITS_PER_PIXEL);
        push_u32(out, COMPRESSION_NONE);
        push_u32(out, 0); // image size, 0 for uncompressed
        out.extend_from_slice(&[0; 16]); // pixels-per-meter + palette counts
        // Channel masks and color space.
        push_u32(out, RED_MASK);
        push_u32(out, GREEN_MASK);
        push_u32(out, BLUE_MASK);
        push_u32(out, ALPHA_MASK);
        push_u32(out, COLOR_SPACE_SRGB);
        out.extend_from_slice(&[0; 64]); // sRGB block, unused
    }

    /// Parse the leading 138 bytes of `bytes` back into a header.
    ///
    /// This accepts exactly the layout [`encode_into`](Self::encode_into)
    /// produces: 32 bits per pixel, uncompressed, pixel data at byte 138,
    /// BGRA masks, consistent file size. Resolution and palette fields are
    /// ignored (other writers fill them in; they carry no meaning here).
    pub fn parse(bytes: &[u8]) -> Result<Self, VellumError> {
        if bytes.len() < MAGIC.len() {
            return Err(VellumError::TruncatedInput {
                needed: HEADER_LEN,
                got: bytes.len(),
            });
        }
        if bytes[..MAGIC.len()] != MAGIC {
            return Err(VellumError::NotABitmap);
        }
        if bytes.len() < HEADER_LEN {
            return Err(VellumError::TruncatedInput {
                needed: HEADER_LEN,
                got: bytes.len(),
            });
        }

        let layout_ok = u32_at(bytes, 10) == HEADER_LEN as u32
            && u32_at(bytes, 14) == INFO_HEADER_LEN
            && u16_at(bytes, 26) == PLANES
            && u16_at(bytes, 28) == BITS_PER_PIXEL
            && u32_at(bytes, 30) == COMPRESSION_NONE
            && u32_at(bytes, 54) == RED_MASK
            && u32_at(bytes, 58) == GREEN_MASK
            && u32_at(bytes, 62) == BLUE_MASK
            && u32_at(bytes, 66) == ALPHA_MASK
            && u32_at(bytes, 70) == COLOR_SPACE_SRGB;
        if !layout_ok {
            return Err(VellumError::UnsupportedBitmap);
        }

        let width = i32_at(bytes, 18);
        let wire_height = i32_at(bytes, 22);
        if width < 0 {
            return Err(VellumError::UnsupportedBitmap);
        }
        if width == 0 || wire_height == 0 {
            return Err(VellumError::EmptyImage);
        }
        let origin = if wire_height < 0 {
            Origin::TopLeft
        } else {
            Origin::BottomLeft
        };
        let header = Self {
            width: width as u32,
            height: wire_height.unsigned_abs(),
            origin,
        };

        let expected = u64::from(header.width) * u64::from(header.height) * 4 + HEADER_LEN as u64;
        if expected > u64::from(u32::MAX) || u32_at(bytes, 2) != expected as u32 {
            return Err(VellumError::UnsupportedBitmap);
        }
        Ok(header)
    }
}

// ---------------------------------------------------------------------------
// Little-endian field access
// ---------------------------------------------------------------------------

#[inline]
fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
fn push_i32(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn i32_at(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
