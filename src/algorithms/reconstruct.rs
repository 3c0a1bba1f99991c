use std::collections::BTreeMap;

use crate::algorithms::common::{masked_euclidean, masked_mean};
use crate::core::motif::Motif;
use crate::core::pattern::{OccurrenceIndex, Pattern};
use crate::error::{MiningError, Result};

/// Extract the raw window `[start, start + len)` of `ts`.
///
/// Positions past the end of the series are `None`.
pub fn occurrence_window(ts: &[f64], start: usize, len: usize) -> Vec<Option<f64>> {
    (start..start + len).map(|i| ts.get(i).copied()).collect()
}

/// Map a frequent pattern back onto real-valued series.
///
/// Symbol position `p` starts at raw offset `p * seglen` and spans
/// `pattern.len() * seglen` points. Builds, in order:
/// 1. per-series average of all occurrence windows (missing-aware)
/// 2. the representative: mean of the per-series averages
/// 3. per series, the occurrence closest to the representative (Euclidean
///    over present positions); its raw offset is the best match
/// 4. NAED: summed best-match distances over `support * window length`
///
/// # Errors
/// `EmptyOccurrences` when the pattern never occurred, `Internal` when an
/// occurrence refers to a series outside `series`.
pub fn reconstruct<S: AsRef<[f64]>>(
    pattern: Pattern,
    occurrences: OccurrenceIndex,
    series: &[S],
    seglen: usize,
) -> Result<Motif> {
    if occurrences.is_empty() {
        return Err(MiningError::EmptyOccurrences {
            pattern: pattern.to_string(),
        });
    }
    let length = pattern.len() * seglen;

    // Occurrence windows per series, in raw coordinates
    let mut windows: BTreeMap<usize, Vec<(usize, Vec<Option<f64>>)>> = BTreeMap::new();
    for (s, positions) in occurrences.iter() {
        let ts = series
            .get(s)
            .ok_or_else(|| {
                MiningError::Internal(format!(
                    "occurrence of '{pattern}' refers to missing series {s}"
                ))
            })?
            .as_ref();
        let entry = windows.entry(s).or_default();
        for &pos in positions {
            let offset = pos * seglen;
            entry.push((offset, occurrence_window(ts, offset, length)));
        }
    }

    let average_occurrences: BTreeMap<usize, Vec<Option<f64>>> = windows
        .iter()
        .map(|(&s, ws)| (s, masked_mean(ws.iter().map(|(_, w)| w.as_slice()), length)))
        .collect();

    let representative = masked_mean(average_occurrences.values().map(Vec::as_slice), length);

    let mut best_matches = BTreeMap::new();
    let mut total = 0.0;
    for (&s, ws) in &windows {
        let mut best: Option<(usize, f64)> = None;
        for (offset, window) in ws {
            let dist = masked_euclidean(window, &representative);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((*offset, dist));
            }
        }
        if let Some((offset, dist)) = best {
            best_matches.insert(s, offset);
            total += dist;
        }
    }

    let denom = (windows.len() * length) as f64;
    let naed = if denom > 0.0 { total / denom } else { 0.0 };

    Ok(Motif {
        pattern,
        seglen,
        occurrences,
        average_occurrences,
        representative,
        best_matches,
        naed,
    })
}
