//! Nearest named color lookup.
//!
//! [`ColorMatcher`] converts every table entry to CIE Lab once, at
//! construction, and answers queries with a linear scan using the CIE76
//! distance. The scan keeps the first entry seen among equal distances, so
//! results follow table order and never depend on hashing.
//!
//! Two APIs are offered:
//! - [`ColorMatcher::find_nearest`] returns a `Result` that tells malformed
//!   input, an empty table and numeric faults apart.
//! - [`ColorMatcher::find_nearest_color_name`] is the best-effort form for UI
//!   labels: every failure becomes an empty string.

use crate::color::{delta_e, rgb_to_lab, Lab, Rgb};
use crate::error::ColorError;
use crate::table::{ColorTable, NamedColor};
use serde::Serialize;

/// A table entry and its distance to the queried color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match<'a> {
    #[serde(flatten)]
    pub color: &'a NamedColor,
    pub distance: f64,
}

impl Match<'_> {
    pub fn name(&self) -> &str {
        &self.color.name
    }
}

/// Matches arbitrary colors against an immutable [`ColorTable`].
#[derive(Debug, Clone)]
pub struct ColorMatcher {
    table: ColorTable,
    labs: Vec<Lab>,
}

impl ColorMatcher {
    /// Builds a matcher, precomputing the Lab value of every entry.
    pub fn new(table: ColorTable) -> Self {
        let labs = table.samples().iter().map(|&rgb| rgb_to_lab(rgb)).collect();
        Self { table, labs }
    }

    /// A matcher over the built-in CSS named colors.
    pub fn css() -> Self {
        Self::new(ColorTable::css())
    }

    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Finds the entry nearest to a hex color string.
    ///
    /// Returns `ColorError::InvalidColor` for malformed input,
    /// `ColorError::EmptyTable` if there is nothing to match against, and
    /// `ColorError::NonFiniteDistance` if a distance could not be computed.
    pub fn find_nearest(&self, hex: &str) -> Result<Match<'_>, ColorError> {
        let rgb = Rgb::from_hex(hex)?;
        self.find_nearest_rgb(rgb)
    }

    /// Finds the entry nearest to an already-parsed sample.
    pub fn find_nearest_rgb(&self, rgb: Rgb) -> Result<Match<'_>, ColorError> {
        self.find_nearest_lab(rgb_to_lab(rgb))
    }

    /// Finds the entry nearest to a Lab color. Ties go to the earliest entry.
    pub fn find_nearest_lab(&self, lab: Lab) -> Result<Match<'_>, ColorError> {
        let mut best: Option<Match<'_>> = None;
        for candidate in self.distances(lab) {
            let candidate = candidate?;
            if best.map_or(true, |b| candidate.distance < b.distance) {
                best = Some(candidate);
            }
        }
        best.ok_or(ColorError::EmptyTable)
    }

    /// Returns the name of the entry nearest to `hex`, or an empty string if
    /// the input is malformed, the table is empty, or the computation fails.
    pub fn find_nearest_color_name(&self, hex: &str) -> String {
        match self.find_nearest(hex) {
            Ok(m) => m.color.name.clone(),
            Err(e) => {
                tracing::debug!(input = hex, error = %e, "no color name match");
                String::new()
            }
        }
    }

    /// Returns up to `k` entries ordered by ascending distance to `hex`.
    ///
    /// Entries at equal distance keep their table order.
    pub fn rank(&self, hex: &str, k: usize) -> Result<Vec<Match<'_>>, ColorError> {
        let lab = rgb_to_lab(Rgb::from_hex(hex)?);
        if self.table.is_empty() {
            return Err(ColorError::EmptyTable);
        }
        let mut matches = self.distances(lab).collect::<Result<Vec<_>, _>>()?;
        // Stable sort; distances are finite at this point.
        matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        matches.truncate(k);
        Ok(matches)
    }

    fn distances(&self, lab: Lab) -> impl Iterator<Item = Result<Match<'_>, ColorError>> + '_ {
        self.table
            .iter()
            .zip(&self.labs)
            .map(move |(color, &reference)| {
                let distance = delta_e(lab, reference);
                if distance.is_finite() {
                    Ok(Match { color, distance })
                } else {
                    Err(ColorError::NonFiniteDistance {
                        name: color.name.clone(),
                    })
                }
            })
    }
}

impl From<ColorTable> for ColorMatcher {
    fn from(table: ColorTable) -> Self {
        Self::new(table)
    }
}
