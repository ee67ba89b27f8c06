//! Color types and conversion functions for swatch.
//!
//! Provides the 8-bit `Rgb` sample parsed from hex strings and the chain of
//! pure conversions used for perceptual matching:
//! sRGB -> linear RGB -> CIE XYZ (D65, 2° observer) -> CIE Lab.
//! Uses `f64` throughout.
//!
//! The transfer-function and Lab boundary constants are fixed so that
//! results stay comparable with other implementations of the same pipeline.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB color sample.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear RGB color (gamma-decoded), components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ tristimulus values, scaled so that the D65 white has `y = 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* color.
///
/// `l` is nominally in [0, 100]; `a` and `b` are signed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// D65 reference white, 2° observer.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` unless the input is exactly six hex
    /// digits after an optional leading `#`. Shorthand forms like "#fff" are
    /// rejected.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {} in {hex:?}",
                digits.len()
            )));
        }
        // from_str_radix alone would accept a leading sign.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(format!(
                "non-hex character in {hex:?}"
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| ColorError::InvalidColor(format!("{hex:?}: {e}")))?;
        Ok(Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        })
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Lab {
    /// CIE76 color difference: Euclidean distance in Lab space.
    pub fn delta_e(self, other: Lab) -> f64 {
        delta_e(self, other)
    }
}

/// Applies inverse sRGB gamma to a single normalized component.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts an 8-bit sample to linear RGB by applying inverse sRGB gamma.
pub fn rgb_to_linear(c: Rgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r as f64 / 255.0),
        g: srgb_component_to_linear(c.g as f64 / 255.0),
        b: srgb_component_to_linear(c.b as f64 / 255.0),
    }
}

/// Converts linear RGB to XYZ with the sRGB primaries (D65), scaled by 100.
pub fn linear_to_xyz(c: LinearRgb) -> Xyz {
    Xyz {
        x: 100.0 * (c.r * 0.4124564 + c.g * 0.3575761 + c.b * 0.1804375),
        y: 100.0 * (c.r * 0.2126729 + c.g * 0.7151522 + c.b * 0.0721750),
        z: 100.0 * (c.r * 0.0193339 + c.g * 0.1191920 + c.b * 0.9503041),
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Converts XYZ to CIE Lab relative to the D65 reference white.
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_f(c.x / D65_WHITE.x);
    let fy = lab_f(c.y / D65_WHITE.y);
    let fz = lab_f(c.z / D65_WHITE.z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convenience: 8-bit sRGB to Lab via the chain sRGB -> linear -> XYZ -> Lab.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    xyz_to_lab(linear_to_xyz(rgb_to_linear(c)))
}

/// CIE76 color difference: `sqrt(dL² + da² + db²)`.
pub fn delta_e(lhs: Lab, rhs: Lab) -> f64 {
    let dl = lhs.l - rhs.l;
    let da = lhs.a - rhs.a;
    let db = lhs.b - rhs.b;
    (dl * dl + da * da + db * db).sqrt()
}
