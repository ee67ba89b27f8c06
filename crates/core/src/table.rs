//! Named reference colors searched by the matcher.
//!
//! A [`ColorTable`] is an ordered list of `(name, hex)` entries. Order is
//! significant: when two entries are equally close to an input, the earlier
//! one wins. Tables are immutable once built; every entry's hex value is
//! validated at construction.

use crate::color::Rgb;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const CSS_COLORS_JSON: &str = include_str!("../data/css_colors.json");
const BASIC_COLORS_JSON: &str = include_str!("../data/basic_colors.json");

/// All built-in table names.
const TABLE_NAMES: &[&str] = &["css", "basic"];

/// A single named reference color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub hex: String,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Accepted JSON shapes for a table document.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    /// `[{"name": "red", "hex": "#ff0000"}, ...]`
    List(Vec<NamedColor>),
    /// `{"#ff0000": "red", ...}`, in document order.
    HexToName(Map<String, Value>),
}

/// An ordered, immutable table of named reference colors.
///
/// Keeps the parsed sample of every entry alongside it, in the same order.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: Vec<NamedColor>,
    samples: Vec<Rgb>,
}

impl ColorTable {
    /// Creates a table from entries in tie-break order.
    ///
    /// Returns `ColorError::InvalidTable` if any entry has an empty name or a
    /// hex value that `Rgb::from_hex` rejects. An empty vector is accepted.
    pub fn new(entries: Vec<NamedColor>) -> Result<Self, ColorError> {
        let samples = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if entry.name.trim().is_empty() {
                    return Err(ColorError::InvalidTable(format!("entry {i}: empty name")));
                }
                Rgb::from_hex(&entry.hex).map_err(|e| {
                    ColorError::InvalidTable(format!("entry {i} ({}): {e}", entry.name))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!(entries = entries.len(), "built color table");
        Ok(Self { entries, samples })
    }

    /// A table with no entries. Every lookup against it yields no match.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table from `(name, hex)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, ColorError> {
        Self::new(
            pairs
                .iter()
                .map(|(name, hex)| NamedColor::new(*name, *hex))
                .collect(),
        )
    }

    /// Parses a table from JSON.
    ///
    /// Accepts either an array of `{"name", "hex"}` objects or an object
    /// mapping hex strings to names. Object keys keep their document order.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let doc: TableDocument = serde_json::from_str(json)
            .map_err(|e| ColorError::InvalidTable(format!("malformed table JSON: {e}")))?;
        let entries = match doc {
            TableDocument::List(entries) => entries,
            TableDocument::HexToName(map) => map
                .into_iter()
                .map(|(hex, name)| match name {
                    Value::String(name) => Ok(NamedColor { name, hex }),
                    other => Err(ColorError::InvalidTable(format!(
                        "name for {hex} must be a string, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        Self::new(entries)
    }

    /// Reads and parses a JSON table file.
    ///
    /// Returns `ColorError::Io` if the file cannot be read; parse and
    /// validation errors are reported as by [`ColorTable::from_json`], with
    /// the path prepended.
    pub fn from_json_file(path: &Path) -> Result<Self, ColorError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ColorError::Io(format!("reading {}: {e}", path.display())))?;
        Self::from_json(&json).map_err(|e| match e {
            ColorError::InvalidTable(msg) => {
                ColorError::InvalidTable(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Parsed samples, index-aligned with [`ColorTable::entries`].
    pub fn samples(&self) -> &[Rgb] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedColor> {
        self.entries.iter()
    }

    /// Returns the first entry whose name matches (ASCII case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<&NamedColor> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    // -- Built-in tables --

    /// The 148 CSS named colors, alphabetical. Aliases (`aqua`/`cyan`,
    /// `gray`/`grey`, ...) are kept; the first alias wins ties.
    pub fn css() -> Self {
        Self::from_json(CSS_COLORS_JSON).expect("bundled CSS color table is valid")
    }

    /// The 16 HTML 4 basic colors.
    pub fn basic() -> Self {
        Self::from_json(BASIC_COLORS_JSON).expect("bundled basic color table is valid")
    }

    /// Constructs a built-in table by name.
    ///
    /// Returns `ColorError::UnknownTable` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "css" => Ok(Self::css()),
            "basic" => Ok(Self::basic()),
            _ => Err(ColorError::UnknownTable(name.to_string())),
        }
    }

    /// Returns a slice of all built-in table names.
    pub fn list_names() -> &'static [&'static str] {
        TABLE_NAMES
    }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
