use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MiningError;

/// A discretized SAX value in `0..alphabet`.
pub type Symbol = u8;

/// An ordered sequence of symbols.
///
/// Used as a map key throughout mining: equality, ordering and hashing are
/// element-wise. Displays as lowercase letters (`[0, 1, 2]` → `"abc"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<Symbol>);

impl Pattern {
    /// Create a pattern from a symbol vector.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// The single-symbol pattern `[symbol]`.
    pub fn single(symbol: Symbol) -> Self {
        Self(vec![symbol])
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All symbols but the last.
    pub fn prefix(&self) -> Pattern {
        Self(self.0[..self.0.len().saturating_sub(1)].to_vec())
    }

    /// Whether `self[1..] == other[..len-1]`, i.e. the two (k-1)-patterns can be
    /// joined into a k-pattern.
    pub fn joins_with(&self, other: &Pattern) -> bool {
        if self.is_empty() || self.len() != other.len() {
            return false;
        }
        self.0[1..] == other.0[..other.0.len() - 1]
    }

    /// Candidate formed by appending the last symbol of `other`.
    pub fn join(&self, other: &Pattern) -> Pattern {
        let mut symbols = Vec::with_capacity(self.len() + 1);
        symbols.extend_from_slice(&self.0);
        symbols.extend(other.0.last().copied());
        Self(symbols)
    }

    /// Whether `sequence` continues with this pattern starting at `position`.
    ///
    /// Partial matches running past the end never match.
    #[inline]
    pub fn matches_at(&self, sequence: &[Symbol], position: usize) -> bool {
        position + self.len() <= sequence.len()
            && sequence[position..position + self.len()] == self.0[..]
    }
}

impl From<Vec<Symbol>> for Pattern {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.0 {
            write!(f, "{}", char::from(b'a'.saturating_add(s)))?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                'a'..='z' => Ok(c as u8 - b'a'),
                _ => Err(MiningError::InvalidParameter(format!(
                    "invalid pattern symbol '{c}'"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Where a pattern starts: series id → ascending symbol positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceIndex(BTreeMap<usize, Vec<usize>>);

impl OccurrenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the pattern starts at `position` of sequence `series`.
    pub fn record(&mut self, series: usize, position: usize) {
        self.0.entry(series).or_default().push(position);
    }

    /// Number of distinct series with at least one occurrence.
    pub fn support(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of recorded occurrences across all series.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn positions(&self, series: usize) -> Option<&[usize]> {
        self.0.get(&series).map(Vec::as_slice)
    }

    /// Iterate `(series, positions)` in ascending series order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.0.iter().map(|(&s, p)| (s, p.as_slice()))
    }
}

/// Frequent patterns and their occurrences, in pattern order.
pub type FrequentPatterns = BTreeMap<Pattern, OccurrenceIndex>;
