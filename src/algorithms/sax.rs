use crate::core::pattern::Symbol;
use crate::error::{MiningError, Result};

/// Smallest supported alphabet size.
pub const MIN_ALPHABET: usize = 2;
/// Largest supported alphabet size.
pub const MAX_ALPHABET: usize = 10;

/// Equiprobable standard normal breakpoints, indexed by `alphabet - MIN_ALPHABET`.
///
/// Lin, Keogh, Lonardi & Chiu, "A Symbolic Representation of Time Series, with
/// Implications for Streaming Algorithms", 2003, Table 3.
const BREAKPOINTS: [&[f64]; MAX_ALPHABET - MIN_ALPHABET + 1] = [
    &[0.0],
    &[-0.43, 0.43],
    &[-0.67, 0.0, 0.67],
    &[-0.84, -0.25, 0.25, 0.84],
    &[-0.97, -0.43, 0.0, 0.43, 0.97],
    &[-1.07, -0.57, -0.18, 0.18, 0.57, 1.07],
    &[-1.15, -0.67, -0.32, 0.0, 0.32, 0.67, 1.15],
    &[-1.22, -0.76, -0.43, -0.14, 0.14, 0.43, 0.76, 1.22],
    &[-1.28, -0.84, -0.52, -0.25, 0.0, 0.25, 0.52, 0.84, 1.28],
];

/// Breakpoints for an alphabet of size `alphabet`.
pub fn breakpoints(alphabet: usize) -> Result<&'static [f64]> {
    if !(MIN_ALPHABET..=MAX_ALPHABET).contains(&alphabet) {
        return Err(MiningError::UnsupportedAlphabet(alphabet));
    }
    Ok(BREAKPOINTS[alphabet - MIN_ALPHABET])
}

/// Number of breakpoints strictly below `value`.
#[inline]
pub fn symbol_for(value: f64, bins: &[f64]) -> Symbol {
    bins.partition_point(|&b| b < value) as Symbol
}

/// Piecewise aggregate approximation: mean of each `seglen`-wide segment.
///
/// A short trailing segment is averaged over the points it actually holds.
pub fn segment_means(series: &[f64], seglen: usize) -> Vec<f64> {
    series
        .chunks(seglen)
        .map(|seg| seg.iter().sum::<f64>() / seg.len() as f64)
        .collect()
}

/// Discretize one standardized series into `ceil(len / seglen)` symbols.
pub fn encode(series: &[f64], seglen: usize, alphabet: usize) -> Result<Vec<Symbol>> {
    if seglen == 0 {
        return Err(MiningError::InvalidParameter(
            "seglen must be > 0".to_string(),
        ));
    }
    let bins = breakpoints(alphabet)?;
    Ok(segment_means(series, seglen)
        .into_iter()
        .map(|mean| symbol_for(mean, bins))
        .collect())
}

/// Discretize every series of a collection, keeping order.
pub fn encode_all<S: AsRef<[f64]>>(
    series: &[S],
    seglen: usize,
    alphabet: usize,
) -> Result<Vec<Vec<Symbol>>> {
    series
        .iter()
        .map(|ts| encode(ts.as_ref(), seglen, alphabet))
        .collect()
}
