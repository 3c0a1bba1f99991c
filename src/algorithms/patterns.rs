use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::algorithms::redundancy::remove_redundant;
use crate::core::pattern::{FrequentPatterns, OccurrenceIndex, Pattern, Symbol};
use crate::error::{MiningError, Result};

/// Minimum number of candidates in a level before verification runs in parallel.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_CANDIDATES: usize = 64;

/// Frequent patterns of one length, with their occurrences.
type Level = BTreeMap<Pattern, OccurrenceIndex>;

/// Level-wise frequent sequential pattern miner (GSP style).
///
/// Grows patterns one symbol at a time: frequent 1-patterns come from a single
/// scan, k-patterns are joined from overlapping (k-1)-patterns and verified
/// only at the positions of their (k-1)-prefix. Support is anti-monotonic, so
/// mining stops at the first length without any frequent pattern.
///
/// # Examples
///
/// ```
/// use frm_rs::PatternMiner;
///
/// let sequences = vec![vec![0, 1, 2], vec![0, 1, 2], vec![2, 1, 0]];
/// let frequent = PatternMiner::new(0.6, 3, 0, 0.9).mine(&sequences).unwrap();
/// let patterns: Vec<String> = frequent.keys().map(|p| p.to_string()).collect();
/// assert_eq!(patterns, vec!["abc"]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternMiner {
    minsup: f64,
    min_len: usize,
    max_len: usize,
    max_overlap: f64,
}

impl PatternMiner {
    /// Create a miner.
    ///
    /// * `minsup` - fraction of sequences a pattern must occur in
    /// * `min_len` - shortest pattern kept after mining
    /// * `max_len` - longest pattern grown, 0 for unbounded
    /// * `max_overlap` - redundancy threshold on `LCS(L, S) / |S|`
    pub fn new(minsup: f64, min_len: usize, max_len: usize, max_overlap: f64) -> Self {
        Self {
            minsup,
            min_len,
            max_len,
            max_overlap,
        }
    }

    /// Mine frequent, non-redundant patterns from discretized sequences.
    pub fn mine(&self, sequences: &[Vec<Symbol>]) -> Result<FrequentPatterns> {
        let frequent = self.mine_frequent(sequences)?;
        Ok(remove_redundant(frequent, self.min_len, self.max_overlap))
    }

    /// Mine every frequent pattern, before length filtering and redundancy removal.
    pub fn mine_frequent(&self, sequences: &[Vec<Symbol>]) -> Result<FrequentPatterns> {
        let min_freq = self.minsup * sequences.len() as f64;

        // levels[k] holds the frequent k-patterns; levels[0] stays empty
        let mut levels: Vec<Level> = vec![Level::new()];
        levels.push(mine_1_patterns(sequences, min_freq));
        debug!(k = 1, frequent = levels[1].len(), "mined level");

        let mut k = 2;
        while !levels[k - 1].is_empty() && (self.max_len == 0 || k <= self.max_len) {
            let previous = &levels[k - 1];
            let candidates = get_candidates(previous);
            let n_candidates = candidates.len();

            let verified = verify_candidates(candidates, previous, sequences)?;
            let level: Level = verified
                .into_iter()
                .filter(|(_, occ)| occ.support() as f64 >= min_freq)
                .collect();

            debug!(k, candidates = n_candidates, frequent = level.len(), "mined level");
            levels.push(level);
            k += 1;
        }

        Ok(levels.into_iter().flatten().collect())
    }
}

/// Scan every sequence once, recording each symbol as a 1-pattern occurrence.
fn mine_1_patterns(sequences: &[Vec<Symbol>], min_freq: f64) -> Level {
    let mut level = Level::new();
    for (i, seq) in sequences.iter().enumerate() {
        for (j, &symbol) in seq.iter().enumerate() {
            level.entry(Pattern::single(symbol)).or_default().record(i, j);
        }
    }
    level.retain(|_, occ| occ.support() as f64 >= min_freq);
    level
}

/// Join frequent (k-1)-patterns `p1`, `p2` with `p1[1..] == p2[..k-2]` into
/// `p1 ++ [last(p2)]`. Candidates come back deduplicated and sorted.
fn get_candidates(previous: &Level) -> Vec<Pattern> {
    let mut candidates = BTreeSet::new();
    for p1 in previous.keys() {
        for p2 in previous.keys() {
            if p1.joins_with(p2) {
                candidates.insert(p1.join(p2));
            }
        }
    }
    candidates.into_iter().collect()
}

/// Find a candidate's occurrences among the occurrences of its prefix.
fn find_candidate(
    candidate: &Pattern,
    previous: &Level,
    sequences: &[Vec<Symbol>],
) -> Result<OccurrenceIndex> {
    let parent = candidate.prefix();
    let parent_occ = previous.get(&parent).ok_or_else(|| {
        MiningError::Internal(format!(
            "prefix '{parent}' of candidate '{candidate}' is not a frequent pattern"
        ))
    })?;

    let mut occ = OccurrenceIndex::new();
    for (seq, positions) in parent_occ.iter() {
        let sequence = sequences.get(seq).ok_or_else(|| {
            MiningError::Internal(format!("occurrence refers to missing sequence {seq}"))
        })?;
        for &pos in positions {
            if candidate.matches_at(sequence, pos) {
                occ.record(seq, pos);
            }
        }
    }
    Ok(occ)
}

/// Verify all candidates of one level. Output order follows `candidates`.
fn verify_candidates(
    candidates: Vec<Pattern>,
    previous: &Level,
    sequences: &[Vec<Symbol>],
) -> Result<Vec<(Pattern, OccurrenceIndex)>> {
    #[cfg(feature = "parallel")]
    if candidates.len() >= MIN_PARALLEL_CANDIDATES {
        use rayon::prelude::*;

        return candidates
            .into_par_iter()
            .map(|c| find_candidate(&c, previous, sequences).map(|occ| (c, occ)))
            .collect();
    }

    candidates
        .into_iter()
        .map(|c| find_candidate(&c, previous, sequences).map(|occ| (c, occ)))
        .collect()
}
