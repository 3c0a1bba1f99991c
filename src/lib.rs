pub mod algorithms;
pub mod core;
pub mod error;

pub use crate::algorithms::normalize::normalize;
pub use crate::algorithms::patterns::PatternMiner;
pub use crate::algorithms::reconstruct::reconstruct;
pub use crate::algorithms::redundancy::{lcs, remove_redundant};
pub use crate::algorithms::sax::{encode, encode_all};
pub use crate::core::config::{
    ConstantSeriesPolicy, MinerConfig, ReconstructionSource, Standardization,
};
pub use crate::core::motif::Motif;
pub use crate::core::pattern::{FrequentPatterns, OccurrenceIndex, Pattern, Symbol};
pub use crate::error::{MiningError, Result};

use tracing::{debug, info};

/// High-level facade for the motif mining pipeline.
///
/// Standardizes the series, discretizes them with SAX, mines frequent
/// non-redundant patterns, maps every pattern back onto the series and ranks
/// the resulting motifs by NAED (ascending).
///
/// # Examples
///
/// ```
/// use frm_rs::{Miner, MinerConfig};
///
/// let ramp: Vec<f64> = (0..10).map(|i| i as f64).collect();
/// let series = vec![ramp.clone(), ramp];
///
/// let miner = Miner::new(MinerConfig::new(1.0, 2, 3).with_min_len(2)).unwrap();
/// let motifs = miner.mine(&series).unwrap();
///
/// let top = &motifs[0];
/// assert_eq!(top.representative().len(), top.pattern().len() * 2);
/// assert!(top.naed() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    /// Create a miner, validating the configuration up front.
    pub fn new(config: MinerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Standardize and discretize every series.
    pub fn discretize<S: AsRef<[f64]>>(&self, series: &[S]) -> Result<Vec<Vec<Symbol>>> {
        let normalized = normalize(
            series,
            self.config.standardization,
            self.config.constant_series,
        )?;
        encode_all(&normalized, self.config.seglen, self.config.alphabet)
    }

    /// Run the full pipeline and return motifs ordered by NAED.
    ///
    /// Returns at most `k` motifs when `k > 0`. Ties keep pattern order.
    #[tracing::instrument(skip_all, fields(n_series = series.len()))]
    pub fn mine<S: AsRef<[f64]> + Sync>(&self, series: &[S]) -> Result<Vec<Motif>> {
        let config = &self.config;

        let normalized = normalize(series, config.standardization, config.constant_series)?;
        let sequences = encode_all(&normalized, config.seglen, config.alphabet)?;
        debug!(
            symbols = sequences.iter().map(Vec::len).sum::<usize>(),
            "discretized series"
        );

        let frequent = PatternMiner::new(
            config.minsup,
            config.min_len,
            config.max_len,
            config.max_overlap,
        )
        .mine(&sequences)?;
        debug!(patterns = frequent.len(), "mined frequent patterns");

        let mut motifs = match config.reconstruction {
            ReconstructionSource::Original => build_motifs(frequent, series, config.seglen)?,
            ReconstructionSource::Normalized => {
                build_motifs(frequent, &normalized, config.seglen)?
            }
        };

        // Stable: equal NAED keeps pattern order
        motifs.sort_by(|a, b| a.naed().total_cmp(&b.naed()));
        if config.k > 0 {
            motifs.truncate(config.k);
        }

        info!(motifs = motifs.len(), "mined motifs");
        Ok(motifs)
    }
}

/// Run the full pipeline with a one-off configuration.
pub fn mine_motifs<S: AsRef<[f64]> + Sync>(
    series: &[S],
    config: &MinerConfig,
) -> Result<Vec<Motif>> {
    Miner::new(config.clone())?.mine(series)
}

/// Reconstruct every frequent pattern, in pattern order.
#[cfg(feature = "parallel")]
fn build_motifs<S: AsRef<[f64]> + Sync>(
    frequent: FrequentPatterns,
    series: &[S],
    seglen: usize,
) -> Result<Vec<Motif>> {
    use rayon::prelude::*;

    let entries: Vec<(Pattern, OccurrenceIndex)> = frequent.into_iter().collect();
    entries
        .into_par_iter()
        .map(|(pattern, occ)| reconstruct(pattern, occ, series, seglen))
        .collect()
}

/// Reconstruct every frequent pattern, in pattern order.
#[cfg(not(feature = "parallel"))]
fn build_motifs<S: AsRef<[f64]> + Sync>(
    frequent: FrequentPatterns,
    series: &[S],
    seglen: usize,
) -> Result<Vec<Motif>> {
    frequent
        .into_iter()
        .map(|(pattern, occ)| reconstruct(pattern, occ, series, seglen))
        .collect()
}
