//! Whole-image encoding: header plus BGRA pixel stream.

use alloc::vec::Vec;

use imgref::ImgRef;
use rgb::Rgba;

use crate::bmp::Origin;
use crate::bmp::header::{BmpHeader, HEADER_LEN};
use crate::error::VellumError;

/// Encode `img` into a complete bitmap artifact.
///
/// The output is the 138-byte header followed by every pixel as b, g, r, a.
/// Rows are emitted in grid order (row 0 first) for both origins; the
/// header's height sign alone tells the consumer which end of the stream is
/// the top scan line. Strided views are fine: only the leading `width`
/// pixels of each stored row are image content, and only they are written.
pub fn encode(img: ImgRef<'_, Rgba<u8>>, origin: Origin) -> Result<Vec<u8>, VellumError> {
    let header = BmpHeader::new(img.width(), img.height(), origin)?;
    let mut out = Vec::with_capacity(HEADER_LEN + header.pixel_len());
    header.encode_into(&mut out);
    for row in img.rows() {
        for px in row {
            out.extend_from_slice(&[px.b, px.g, px.r, px.a]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use imgref::ImgVec;

    // Vertically asymmetric so an accidental row flip cannot cancel out.
    fn gradient(width: usize, height: usize) -> ImgVec<Rgba<u8>> {
        let mut buf = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                buf.push(Rgba::new(x as u8, y as u8, (x * y) as u8, 200));
            }
        }
        ImgVec::new(buf, width, height)
    }

    #[test]
    fn one_pixel_lands_as_bgra() {
        let img = ImgVec::new(vec![Rgba::new(10u8, 20, 30, 40)], 1, 1);
        let bytes = encode(img.as_ref(), Origin::TopLeft).unwrap();
        assert_eq!(bytes.len(), 138 + 4);
        assert_eq!(&bytes[138..], &[30, 20, 10, 40]);
    }

    #[test]
    fn origins_share_an_identical_pixel_stream() {
        let img = gradient(3, 5);
        let top = encode(img.as_ref(), Origin::TopLeft).unwrap();
        let bottom = encode(img.as_ref(), Origin::BottomLeft).unwrap();
        assert_eq!(top[HEADER_LEN..], bottom[HEADER_LEN..]);
        assert_eq!(
            i32::from_le_bytes([top[22], top[23], top[24], top[25]]),
            -i32::from_le_bytes([bottom[22], bottom[23], bottom[24], bottom[25]])
        );
    }

    #[test]
    fn length_matches_the_header_file_size() {
        for (w, h) in [(1, 1), (2, 3), (16, 9)] {
            let bytes = encode(gradient(w, h).as_ref(), Origin::TopLeft).unwrap();
            assert_eq!(bytes.len(), w * h * 4 + 138);
            let header = BmpHeader::parse(&bytes).unwrap();
            assert_eq!(header.file_size() as usize, bytes.len());
        }
    }

    #[test]
    fn rows_are_written_top_row_first() {
        // 1x2: row 0 red, row 1 blue
        let img = ImgVec::new(
            vec![Rgba::new(255u8, 0, 0, 255), Rgba::new(0u8, 0, 255, 255)],
            1,
            2,
        );
        let bytes = encode(img.as_ref(), Origin::TopLeft).unwrap();
        assert_eq!(&bytes[138..142], &[0, 0, 255, 255]); // red, as b,g,r,a
        assert_eq!(&bytes[142..146], &[255, 0, 0, 255]); // blue, as b,g,r,a
    }

    #[test]
    fn strided_views_emit_only_image_content() {
        // 2 pixels wide, stride 3: the third pixel of each stored row is
        // padding and must not reach the file.
        let buf = vec![
            Rgba::new(1u8, 1, 1, 1),
            Rgba::new(2u8, 2, 2, 2),
            Rgba::new(99u8, 99, 99, 99),
            Rgba::new(3u8, 3, 3, 3),
            Rgba::new(4u8, 4, 4, 4),
            Rgba::new(99u8, 99, 99, 99),
        ];
        let img = ImgVec::new_stride(buf, 2, 2, 3);
        let bytes = encode(img.as_ref(), Origin::TopLeft).unwrap();
        assert_eq!(bytes.len(), 138 + 2 * 2 * 4);
        assert!(!bytes[138..].contains(&99));
        assert_eq!(&bytes[138..142], &[1, 1, 1, 1]);
        assert_eq!(&bytes[150..154], &[4, 4, 4, 4]);
    }

    #[test]
    fn zero_height_views_are_rejected() {
        let img: ImgVec<Rgba<u8>> = ImgVec::new(Vec::new(), 5, 0);
        assert!(matches!(
            encode(img.as_ref(), Origin::TopLeft),
            Err(VellumError::EmptyImage)
        ));
    }
}
