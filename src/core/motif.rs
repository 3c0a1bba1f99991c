use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::pattern::{OccurrenceIndex, Pattern};

/// A frequent pattern mapped back onto the real-valued series.
///
/// Produced once by `reconstruct` and read-only afterwards. Vectors of
/// `Option<f64>` mark positions where occurrences ran past the end of their
/// series with `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Motif {
    pub(crate) pattern: Pattern,
    pub(crate) seglen: usize,
    pub(crate) occurrences: OccurrenceIndex,
    pub(crate) average_occurrences: BTreeMap<usize, Vec<Option<f64>>>,
    pub(crate) representative: Vec<Option<f64>>,
    pub(crate) best_matches: BTreeMap<usize, usize>,
    pub(crate) naed: f64,
}

impl Motif {
    /// The symbolic pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Start positions in the symbol sequences, per series.
    pub fn occurrences(&self) -> &OccurrenceIndex {
        &self.occurrences
    }

    /// Element-wise mean of each series' occurrence windows.
    pub fn average_occurrences(&self) -> &BTreeMap<usize, Vec<Option<f64>>> {
        &self.average_occurrences
    }

    /// Mean of the per-series averages; length is `pattern.len() * seglen`.
    pub fn representative(&self) -> &[Option<f64>] {
        &self.representative
    }

    /// Representative with missing positions as `f64::NAN`.
    pub fn representative_values(&self) -> Vec<f64> {
        self.representative
            .iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect()
    }

    /// Raw-series offset of the closest occurrence, per series.
    pub fn best_matches(&self) -> &BTreeMap<usize, usize> {
        &self.best_matches
    }

    /// Normalized accumulated error distance. Lower is a tighter fit.
    pub fn naed(&self) -> f64 {
        self.naed
    }

    /// Length of the real-valued occurrence window.
    pub fn length(&self) -> usize {
        self.representative.len()
    }

    pub fn seglen(&self) -> usize {
        self.seglen
    }

    /// Number of series the motif occurs in.
    pub fn support(&self) -> usize {
        self.occurrences.support()
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Motif('{}')", self.pattern)
    }
}
