use std::collections::BTreeSet;

use tracing::debug;

use crate::core::pattern::{FrequentPatterns, Pattern, Symbol};

/// Length of the longest common subsequence of `a` and `b`.
///
/// Order-preserving but not necessarily contiguous. Standard O(|a|·|b|)
/// dynamic program, keeping one row at a time.
pub fn lcs(a: &[Symbol], b: &[Symbol]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &x in a {
        for (j, &y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Fraction of `shorter` covered by its LCS with `longer`.
#[inline]
fn overlap(longer: &Pattern, shorter: &Pattern) -> f64 {
    lcs(longer.symbols(), shorter.symbols()) as f64 / shorter.len() as f64
}

/// Drop patterns shorter than `min_len`, then patterns mostly contained in a
/// longer surviving pattern.
///
/// Patterns are visited longest first (ties in descending pattern order). For
/// each surviving `L`, every surviving `S != L` with `|S| <= |L|` is removed
/// when `LCS(L, S) / |S| > max_overlap`. A removed pattern never removes
/// others, which makes the pass idempotent.
pub fn remove_redundant(
    mut frequent: FrequentPatterns,
    min_len: usize,
    max_overlap: f64,
) -> FrequentPatterns {
    frequent.retain(|p, _| p.len() >= min_len);

    // The ratio never exceeds 1
    if max_overlap >= 1.0 {
        return frequent;
    }

    let mut ordered: Vec<&Pattern> = frequent.keys().collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));

    let mut removed: BTreeSet<&Pattern> = BTreeSet::new();
    for &longer in &ordered {
        if removed.contains(longer) {
            continue;
        }
        for &shorter in &ordered {
            if shorter.len() > longer.len() || shorter == longer || removed.contains(shorter) {
                continue;
            }
            if overlap(longer, shorter) > max_overlap {
                removed.insert(shorter);
            }
        }
    }

    debug!(
        kept = frequent.len() - removed.len(),
        removed = removed.len(),
        "removed redundant patterns"
    );

    let removed: BTreeSet<Pattern> = removed.into_iter().cloned().collect();
    frequent.retain(|p, _| !removed.contains(p));
    frequent
}
