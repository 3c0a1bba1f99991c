use serde::{Deserialize, Serialize};

use crate::algorithms::sax::{MAX_ALPHABET, MIN_ALPHABET};
use crate::error::{MiningError, Result};

/// How series are standardized before discretization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standardization {
    /// Each series uses its own mean and standard deviation.
    #[default]
    Local,
    /// All series share the mean and standard deviation of the pooled points.
    Global,
}

/// What to do with a series whose standard deviation is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantSeriesPolicy {
    /// Fail with `MiningError::ConstantSeries`.
    #[default]
    Reject,
    /// Replace the standardized series with zeros.
    Zero,
}

/// Which values motif shapes, best matches and NAED are computed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconstructionSource {
    /// The series exactly as passed in.
    #[default]
    Original,
    /// The standardized series used for discretization.
    Normalized,
}

fn default_min_len() -> usize {
    3
}

fn default_max_overlap() -> f64 {
    0.9
}

/// Configuration for the motif mining pipeline.
///
/// # Examples
///
/// ```
/// use frm_rs::MinerConfig;
///
/// let config = MinerConfig::new(0.5, 4, 5).with_min_len(2).with_k(10);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_overlap, 0.9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Fraction of series a pattern must occur in, in `(0, 1]`.
    pub minsup: f64,
    /// SAX segment length.
    pub seglen: usize,
    /// SAX alphabet size, in `2..=10`.
    pub alphabet: usize,
    /// Minimum length of a retained pattern.
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    /// Maximum pattern length grown. 0 means unbounded.
    #[serde(default)]
    pub max_len: usize,
    /// Maximum `LCS(L, S) / |S|` before a shorter pattern is dropped as redundant.
    #[serde(default = "default_max_overlap")]
    pub max_overlap: f64,
    /// Number of motifs returned. 0 returns all.
    #[serde(default)]
    pub k: usize,
    #[serde(default)]
    pub standardization: Standardization,
    #[serde(default)]
    pub constant_series: ConstantSeriesPolicy,
    #[serde(default)]
    pub reconstruction: ReconstructionSource,
}

impl MinerConfig {
    pub fn new(minsup: f64, seglen: usize, alphabet: usize) -> Self {
        Self {
            minsup,
            seglen,
            alphabet,
            min_len: default_min_len(),
            max_len: 0,
            max_overlap: default_max_overlap(),
            k: 0,
            standardization: Standardization::default(),
            constant_series: ConstantSeriesPolicy::default(),
            reconstruction: ReconstructionSource::default(),
        }
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_max_overlap(mut self, max_overlap: f64) -> Self {
        self.max_overlap = max_overlap;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_standardization(mut self, standardization: Standardization) -> Self {
        self.standardization = standardization;
        self
    }

    pub fn with_constant_series(mut self, policy: ConstantSeriesPolicy) -> Self {
        self.constant_series = policy;
        self
    }

    pub fn with_reconstruction(mut self, source: ReconstructionSource) -> Self {
        self.reconstruction = source;
        self
    }

    /// Check every option against its allowed range.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        if !(self.minsup > 0.0 && self.minsup <= 1.0) {
            return Err(MiningError::InvalidParameter(format!(
                "minsup must be in (0, 1], got {}",
                self.minsup
            )));
        }
        if self.seglen == 0 {
            return Err(MiningError::InvalidParameter(
                "seglen must be > 0".to_string(),
            ));
        }
        if !(MIN_ALPHABET..=MAX_ALPHABET).contains(&self.alphabet) {
            return Err(MiningError::UnsupportedAlphabet(self.alphabet));
        }
        if self.min_len == 0 {
            return Err(MiningError::InvalidParameter(
                "min_len must be >= 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.max_overlap) {
            return Err(MiningError::InvalidParameter(format!(
                "max_overlap must be in [0, 1], got {}",
                self.max_overlap
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MinerConfig::new(0.5, 2, 4);
        assert_eq!(config.min_len, 3);
        assert_eq!(config.max_len, 0);
        assert!((config.max_overlap - 0.9).abs() < 1e-12);
        assert_eq!(config.k, 0);
        assert_eq!(config.standardization, Standardization::Local);
        assert_eq!(config.constant_series, ConstantSeriesPolicy::Reject);
        assert_eq!(config.reconstruction, ReconstructionSource::Original);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_minsup() {
        for minsup in [0.0, -0.1, 1.01, f64::NAN] {
            let err = MinerConfig::new(minsup, 2, 4).validate().unwrap_err();
            assert!(matches!(err, MiningError::InvalidParameter(_)), "{minsup}");
        }
        assert!(MinerConfig::new(1.0, 2, 4).validate().is_ok());
    }

    #[test]
    fn test_validate_seglen() {
        let err = MinerConfig::new(0.5, 0, 4).validate().unwrap_err();
        assert!(matches!(err, MiningError::InvalidParameter(_)));
    }

    #[test]
    fn test_validate_alphabet() {
        for alphabet in [0, 1, 11, 26] {
            let err = MinerConfig::new(0.5, 2, alphabet).validate().unwrap_err();
            assert_eq!(err, MiningError::UnsupportedAlphabet(alphabet));
        }
        for alphabet in 2..=10 {
            assert!(MinerConfig::new(0.5, 2, alphabet).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_min_len_and_overlap() {
        let err = MinerConfig::new(0.5, 2, 4)
            .with_min_len(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MiningError::InvalidParameter(_)));

        let err = MinerConfig::new(0.5, 2, 4)
            .with_max_overlap(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MiningError::InvalidParameter(_)));

        assert!(MinerConfig::new(0.5, 2, 4)
            .with_max_overlap(0.0)
            .validate()
            .is_ok());
    }
}
