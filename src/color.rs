//! A small color toolbox for filling grids.
//!
//! Everything here works in the byte domain and favors speed over
//! colorimetric accuracy: a seven-stop heatmap ramp for visualizing scalar
//! fields, per-channel linear blends, and the classic integer HSV
//! conversions where hue, saturation, and value each live in `0..=255`.

use bytemuck::{Pod, Zeroable};
use rgb::{Rgb, Rgba};

// ---------------------------------------------------------------------------
// Linear blends
// ---------------------------------------------------------------------------

#[inline]
fn lerp_channel(percent: f32, from: u8, to: u8) -> u8 {
    (from as f32 + (to as i32 - from as i32) as f32 * percent) as u8
}

/// Blend `percent` of the way from `from` to `to`, per channel.
///
/// `percent` is expected in `[0.0, 1.0]`. Channel math truncates toward
/// zero, so the midpoint of black and white is `(127, 127, 127)`.
#[must_use]
pub fn lerp_rgb(percent: f32, from: Rgb<u8>, to: Rgb<u8>) -> Rgb<u8> {
    Rgb::new(
        lerp_channel(percent, from.r, to.r),
        lerp_channel(percent, from.g, to.g),
        lerp_channel(percent, from.b, to.b),
    )
}

/// Blend `percent` of the way from `from` to `to`, alpha included.
#[must_use]
pub fn lerp_rgba(percent: f32, from: Rgba<u8>, to: Rgba<u8>) -> Rgba<u8> {
    Rgba::new(
        lerp_channel(percent, from.r, to.r),
        lerp_channel(percent, from.g, to.g),
        lerp_channel(percent, from.b, to.b),
        lerp_channel(percent, from.a, to.a),
    )
}

// ---------------------------------------------------------------------------
// Heatmap ramp
// ---------------------------------------------------------------------------

// Ramp stops: black, blue, cyan, green, yellow, red, white.
const HEAT_STOPS: [Rgb<u8>; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 255),
];

/// Map a value in `[0.0, 1.0]` onto the seven-stop heatmap ramp.
///
/// Values below the range yield the first stop, values at or above `1.0`
/// the last; in between, adjacent stops are blended linearly.
#[must_use]
pub fn heatmap(value: f32) -> Rgb<u8> {
    let last = HEAT_STOPS.len() - 1;
    let (i1, i2, frac) = if value < 0.0 {
        (0, 0, 0.0)
    } else if value >= 1.0 {
        (last, last, 0.0)
    } else {
        let scaled = value * last as f32;
        let i1 = scaled as usize;
        (i1, i1 + 1, scaled - i1 as f32)
    };
    let (from, to) = (HEAT_STOPS[i1], HEAT_STOPS[i2]);
    Rgb::new(
        lerp_channel(frac, from.r, to.r),
        lerp_channel(frac, from.g, to.g),
        lerp_channel(frac, from.b, to.b),
    )
}

// ---------------------------------------------------------------------------
// Integer HSV
// ---------------------------------------------------------------------------

/// A hue/saturation/value triple with every component in `0..=255`.
///
/// Hue is circular: 0 and 256 are the same angle, so arithmetic on `h`
/// wraps rather than clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert HSV to RGB with integer-only math.
///
/// Fast rather than accurate: the hue circle is split into six regions of
/// 43 points each and blended with 8-bit fixed-point arithmetic.
#[must_use]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb<u8> {
    if hsv.s == 0 {
        return Rgb::new(hsv.v, hsv.v, hsv.v);
    }

    let region = hsv.h / 43;
    let remainder = (hsv.h - region * 43) * 6;

    let v = hsv.v as u16;
    let s = hsv.s as u16;
    let rem = remainder as u16;
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * rem) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - rem)) >> 8))) >> 8) as u8;

    match region {
        0 => Rgb::new(hsv.v, t, p),
        1 => Rgb::new(q, hsv.v, p),
        2 => Rgb::new(p, hsv.v, t),
        3 => Rgb::new(p, q, hsv.v),
        4 => Rgb::new(t, p, hsv.v),
        _ => Rgb::new(hsv.v, p, q),
    }
}

/// Convert RGB to HSV with integer-only math.
///
/// The inverse of [`hsv_to_rgb`] up to its coarse 8-bit precision. Hue
/// regions start at 0, 85, and 171; a negative region offset folds around
/// the hue circle.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb<u8>) -> Hsv {
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let max = rgb.r.max(rgb.g).max(rgb.b);

    let v = max;
    if v == 0 {
        return Hsv { h: 0, s: 0, v: 0 };
    }

    let span = (max - min) as i32;
    let s = (255 * span / v as i32) as u8;
    if s == 0 {
        return Hsv { h: 0, s: 0, v };
    }

    let (r, g, b) = (rgb.r as i32, rgb.g as i32, rgb.b as i32);
    let h = if max == rgb.r {
        43 * (g - b) / span
    } else if max == rgb.g {
        85 + 43 * (b - r) / span
    } else {
        171 + 43 * (r - g) / span
    };

    // h may be negative; the cast wraps it onto the circle.
    Hsv { h: h as u8, s, v }
}
