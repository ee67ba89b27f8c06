#![deny(unsafe_code)]
//! Core types for swatch, the nearest-named-color matcher.
//!
//! Provides the `Rgb` color sample and the sRGB -> XYZ -> CIE Lab conversion
//! chain (`color`), ordered reference tables of named colors (`table`), and
//! `ColorMatcher`, which maps any hex color to the perceptually closest name
//! using the CIE76 distance (`matcher`).

pub mod color;
pub mod error;
pub mod matcher;
pub mod table;

pub use color::{Lab, LinearRgb, Rgb, Xyz};
pub use error::ColorError;
pub use matcher::{ColorMatcher, Match};
pub use table::{ColorTable, NamedColor};
