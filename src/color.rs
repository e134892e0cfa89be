//! Integer HSV → RGB conversion over the 0..=255 colour wheel.
//!
//! Hue, saturation and value are all 8-bit.  The wheel is split into six
//! sectors of 43 hue units; within a sector the remainder is scaled by 6
//! and used to interpolate between the sector's endpoint colours.
//!
//! Only integer arithmetic is used, so a given `(h, s, v)` triple always
//! produces the same RGB output on every target.

pub use smart_leds::hsv::Hsv;
use smart_leds::RGB8;

/// Colour as an 8-bit RGB triple.
pub type Rgb = RGB8;

/// All channels off.
pub const BLACK: Rgb = RGB8 { r: 0, g: 0, b: 0 };

/// Width of one hue sector (255 / 6, rounded up).
const SECTOR_WIDTH: u8 = 43;

/// Convert an HSV triple to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { hue, sat, val } = hsv;

    if sat == 0 {
        return RGB8::new(val, val, val);
    }

    let region = hue / SECTOR_WIDTH;
    let remainder = u16::from(hue - region * SECTOR_WIDTH) * 6;

    let v = u16::from(val);
    let s = u16::from(sat);
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;

    match region {
        0 => RGB8::new(val, t, p),
        1 => RGB8::new(q, val, p),
        2 => RGB8::new(p, val, t),
        3 => RGB8::new(p, q, val),
        4 => RGB8::new(t, p, val),
        _ => RGB8::new(val, p, q),
    }
}

/// Convenience wrapper taking the three components directly.
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv_to_rgb(Hsv { hue, sat, val })
}
