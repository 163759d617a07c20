//! This module defines the two color representations the library works with. [`HsvColor`] is the
//! one all harmony math happens in; [`RgbColor`] is what leaves the library, for display and for
//! export.
//!
//! Unlike most color libraries, hue is stored as a *fraction of a turn* in `[0, 1)` rather than in
//! degrees. Harmony rules are written in degrees, so the conversion happens exactly once per rule
//! application, and everything else (pointer mapping, randomization, the wheel) works in the same
//! normalized units as saturation and value.

use std::fmt;

use regex::Regex;

use crate::bound::{normalize01, Bound, Edge};
use crate::error::HarmonyError;

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An HSV color with every component normalized: hue is a fraction of a full turn in `[0, 1)`,
/// saturation and value lie in `[0, 1]`. This is the sHSV derived from sRGB, which is what every
/// color picker means by HSV.
///
/// The fields are public for cheap reads and struct literals in trusted code; values coming from
/// outside should go through [`HsvColor::new`] or the setters, which validate.
/// # Example
/// ```
/// # use color_harmony::prelude::*;
/// let red = HsvColor::new(0., 1., 1.).unwrap();
/// assert_eq!(red.to_rgb().to_string(), "#FF0000");
/// assert!(HsvColor::new(0., 1.2, 1.).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    /// The hue as a fraction of a turn. 0 is red, 1/3 green, 2/3 blue.
    pub h: f64,
    /// The saturation: 0 is the gray of the same value, 1 the pure hue.
    pub s: f64,
    /// The value: the largest RGB primary of the color.
    pub v: f64,
}

impl HsvColor {
    /// Pure white, which is also what the wheel resets to.
    pub const WHITE: HsvColor = HsvColor {
        h: 0.,
        s: 0.,
        v: 1.,
    };

    /// Builds a color from raw components.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if hue is outside `[0, 1)` or saturation or value is
    /// outside `[0, 1]`.
    pub fn new(h: f64, s: f64, v: f64) -> Result<HsvColor, HarmonyError> {
        HsvColor::from_components(h, s, v)
    }

    /// Sets the hue.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if `h` is outside `[0, 1)`; the color is unchanged.
    pub fn set_hue(&mut self, h: f64) -> Result<(), HarmonyError> {
        self.h = HsvColor::check_component(0, h)?;
        Ok(())
    }

    /// Sets the saturation.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if `s` is outside `[0, 1]`; the color is unchanged.
    pub fn set_saturation(&mut self, s: f64) -> Result<(), HarmonyError> {
        self.s = HsvColor::check_component(1, s)?;
        Ok(())
    }

    /// Sets the value.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if `v` is outside `[0, 1]`; the color is unchanged.
    pub fn set_value(&mut self, v: f64) -> Result<(), HarmonyError> {
        self.v = HsvColor::check_component(2, v)?;
        Ok(())
    }

    /// The hue in degrees, in `[0, 360)`.
    pub fn hue_degrees(&self) -> f64 {
        self.h * 360.
    }

    /// Converts to RGB with components in `[0, 1]`.
    pub fn to_rgb(&self) -> RgbColor {
        let chroma = self.s * self.v;
        let hue = normalize01(self.h) * 360.;
        // second-largest component: the smallest is 0 before adding the offset
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = self.v - chroma;
        RgbColor::clamp(RgbColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        })
    }

    /// Converts from RGB. Grays get hue 0 and black gets saturation 0: both are undefined in HSV,
    /// so a round trip through RGB only preserves them when they already had those values.
    pub fn from_rgb(rgb: RgbColor) -> HsvColor {
        let components = [rgb.r, rgb.g, rgb.b];
        let max_c = components.iter().cloned().fold(std::f64::MIN, f64::max);
        let min_c = components.iter().cloned().fold(std::f64::MAX, f64::min);
        let chroma = max_c - min_c;

        let degrees = if chroma == 0.0 {
            0.0
        } else if max_c == rgb.r {
            ((rgb.g - rgb.b) / chroma).rem_euclid(6.0) * 60.0
        } else if max_c == rgb.g {
            ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
        } else {
            ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
        };
        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };

        HsvColor::clamp(HsvColor {
            h: degrees / 360.,
            s: saturation,
            v: max_c,
        })
    }
}

impl Default for HsvColor {
    fn default() -> HsvColor {
        HsvColor::WHITE
    }
}

impl Bound for HsvColor {
    const NAMES: [&'static str; 3] = ["hue", "saturation", "value"];

    fn bounds() -> [(f64, f64, Edge); 3] {
        [
            (0., 1., Edge::Cyclic),
            (0., 1., Edge::Clamped),
            (0., 1., Edge::Clamped),
        ]
    }

    fn components(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    fn from_components_unchecked(h: f64, s: f64, v: f64) -> HsvColor {
        HsvColor { h, s, v }
    }
}

impl From<RgbColor> for HsvColor {
    fn from(rgb: RgbColor) -> HsvColor {
        HsvColor::from_rgb(rgb)
    }
}

/// An sRGB color with floating point components in `[0, 1]` and no alpha. This is the form every
/// exporter writes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red, between 0 and 1.
    pub r: f64,
    /// Green, between 0 and 1.
    pub g: f64,
    /// Blue, between 0 and 1.
    pub b: f64,
}

impl RgbColor {
    /// Builds a color from raw components.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if any component is outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> Result<RgbColor, HarmonyError> {
        RgbColor::from_components(r, g, b)
    }

    /// Builds a color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> RgbColor {
        RgbColor {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
        }
    }

    /// Returns the components scaled to 0-255 and rounded.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let conv = |x: f64| (crate::bound::clamp01(x) * 255.).round() as u8;
        (conv(self.r), conv(self.g), conv(self.b))
    }

    /// The components as an `[r, g, b]` array, the shape exporters consume.
    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses a hex code of the form `#rrggbb`; the leading `#` is optional and case is ignored.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidHex` for anything else, including the short `#rgb` form.
    pub fn from_hex_code(hex: &str) -> Result<RgbColor, HarmonyError> {
        let caps = HEX_CODE
            .captures(hex)
            .ok_or_else(|| HarmonyError::InvalidHex(hex.to_string()))?;
        let byte = |i: usize| u8::from_str_radix(&caps[i], 16);
        match (byte(1), byte(2), byte(3)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(RgbColor::from_rgb8(r, g, b)),
            _ => Err(HarmonyError::InvalidHex(hex.to_string())),
        }
    }

    /// Converts to HSV.
    pub fn to_hsv(&self) -> HsvColor {
        HsvColor::from_rgb(*self)
    }
}

impl Bound for RgbColor {
    const NAMES: [&'static str; 3] = ["red", "green", "blue"];

    fn bounds() -> [(f64, f64, Edge); 3] {
        [
            (0., 1., Edge::Clamped),
            (0., 1., Edge::Clamped),
            (0., 1., Edge::Clamped),
        ]
    }

    fn components(&self) -> [f64; 3] {
        self.to_array()
    }

    fn from_components_unchecked(r: f64, g: f64, b: f64) -> RgbColor {
        RgbColor { r, g, b }
    }
}

impl From<HsvColor> for RgbColor {
    fn from(hsv: HsvColor) -> RgbColor {
        hsv.to_rgb()
    }
}

/// Prints the color as an uppercase `#RRGGBB` hex code.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsv_close(a: HsvColor, b: HsvColor) {
        assert!(approx_eq!(f64, a.h, b.h, epsilon = 1e-9), "{:?} != {:?}", a, b);
        assert!(approx_eq!(f64, a.s, b.s, epsilon = 1e-9), "{:?} != {:?}", a, b);
        assert!(approx_eq!(f64, a.v, b.v, epsilon = 1e-9), "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_hsv_rgb_conversion() {
        let red = RgbColor { r: 1., g: 0., b: 0. };
        let red_hsv = red.to_hsv();
        assert!(red_hsv.h.abs() <= 1e-12);
        assert!((red_hsv.s - 1.0).abs() <= 1e-12);
        assert!((red_hsv.v - 1.0).abs() <= 1e-12);

        let lavender = HsvColor {
            h: 243.5 / 360.,
            s: 0.568,
            v: 0.925,
        };
        assert_eq!(lavender.to_rgb().to_string(), "#6E66EC");

        let blue = HsvColor::new(2. / 3., 1., 1.).unwrap();
        assert_eq!(blue.to_rgb().to_string(), "#0000FF");
    }

    #[test]
    fn test_round_trip() {
        // stay away from s = 0 and v = 0, where hue is undefined
        for &h in &[0.0, 0.1, 0.25, 0.4, 0.5, 0.66, 0.8, 0.99] {
            for &s in &[0.2, 0.5, 1.0] {
                for &v in &[0.3, 0.75, 1.0] {
                    let hsv = HsvColor::new(h, s, v).unwrap();
                    assert_hsv_close(hsv.to_rgb().to_hsv(), hsv);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_round_trip() {
        // gray: hue is lost and reported as 0
        let gray = HsvColor::new(0.7, 0., 0.5).unwrap();
        let back = gray.to_rgb().to_hsv();
        assert_eq!(back.h, 0.);
        assert!((back.v - 0.5).abs() <= 1e-12);
        // black: saturation is lost as well
        let black = HsvColor::new(0.3, 0.8, 0.).unwrap().to_rgb().to_hsv();
        assert_eq!((black.s, black.v), (0., 0.));
    }

    #[test]
    fn test_validated_setters() {
        let mut color = HsvColor::WHITE;
        assert!(color.set_hue(0.5).is_ok());
        assert!(color.set_saturation(0.25).is_ok());
        assert!(color.set_value(1.01).is_err());
        assert!(color.set_hue(-0.1).is_err());
        // failed setters leave the color untouched
        assert_eq!(color, HsvColor { h: 0.5, s: 0.25, v: 1. });
    }

    #[test]
    fn test_hex_codes() {
        let color = RgbColor::from_hex_code("#11457c").unwrap();
        assert_eq!(color.to_rgb8(), (0x11, 0x45, 0x7c));
        assert_eq!(color.to_string(), "#11457C");
        assert_eq!(RgbColor::from_hex_code("FFffFF").unwrap().to_string(), "#FFFFFF");
        assert!(RgbColor::from_hex_code("#fff").is_err());
        assert!(RgbColor::from_hex_code("#12345g").is_err());
    }

    #[test]
    fn test_serialize_as_records() {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(HsvColor { h: 0.5, s: 0.25, v: 1. }).unwrap();
        wtr.serialize(HsvColor::WHITE).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(text, "h,s,v\n0.5,0.25,1.0\n0.0,0.0,1.0\n");

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let read: Vec<HsvColor> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(read, vec![HsvColor { h: 0.5, s: 0.25, v: 1. }, HsvColor::WHITE]);
    }

    #[test]
    fn test_rgb8() {
        let color = RgbColor::from_rgb8(255, 128, 0);
        assert!((color.g - 128. / 255.).abs() <= 1e-12);
        assert_eq!(color.to_rgb8(), (255, 128, 0));
        assert!(RgbColor::new(0.5, 1.5, 0.).is_err());
    }
}
