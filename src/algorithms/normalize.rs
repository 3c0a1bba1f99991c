use tracing::warn;

use crate::core::config::{ConstantSeriesPolicy, Standardization};
use crate::error::{MiningError, Result};

/// A series is constant when its standard deviation is at most this fraction
/// of its largest magnitude. Relative, so small-unit series still standardize.
const REL_STD_TOLERANCE: f64 = 1e-12;

/// Location and spread of a series (or of pooled series).
#[derive(Debug, Clone, Copy)]
struct Moments {
    mean: f64,
    /// Population standard deviation.
    std: f64,
    /// Largest absolute value.
    scale: f64,
}

impl Moments {
    fn compute(data: impl Iterator<Item = f64> + Clone) -> Self {
        let (sum, n, scale) = data
            .clone()
            .fold((0.0, 0usize, 0.0_f64), |(s, n, m), x| (s + x, n + 1, m.max(x.abs())));
        let n = n as f64;
        let mean = sum / n;
        let var = data.map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std: var.sqrt(),
            scale,
        }
    }

    fn is_constant(&self) -> bool {
        self.std <= REL_STD_TOLERANCE * self.scale
    }
}

/// Reject empty series and NaN/infinite values.
fn check_finite<S: AsRef<[f64]>>(series: &[S]) -> Result<()> {
    for (index, ts) in series.iter().enumerate() {
        let ts = ts.as_ref();
        if ts.is_empty() {
            return Err(MiningError::EmptySeries { index });
        }
        if let Some(position) = ts.iter().position(|x| !x.is_finite()) {
            return Err(MiningError::NonFiniteValue {
                series: index,
                position,
            });
        }
    }
    Ok(())
}

/// Z-normalize one series with population statistics.
///
/// A series with zero standard deviation is rejected or mapped to zeros
/// depending on `policy`.
pub fn z_normalize(data: &[f64], index: usize, policy: ConstantSeriesPolicy) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(MiningError::EmptySeries { index });
    }
    standardize(data, Moments::compute(data.iter().copied()), index, policy)
}

fn standardize(
    data: &[f64],
    moments: Moments,
    index: usize,
    policy: ConstantSeriesPolicy,
) -> Result<Vec<f64>> {
    if moments.is_constant() {
        return match policy {
            ConstantSeriesPolicy::Reject => Err(MiningError::ConstantSeries { index }),
            ConstantSeriesPolicy::Zero => {
                warn!(series = index, "constant series standardized to zeros");
                Ok(vec![0.0; data.len()])
            }
        };
    }
    Ok(data
        .iter()
        .map(|&x| (x - moments.mean) / moments.std)
        .collect())
}

/// Standardize every series to mean 0 and population standard deviation 1.
///
/// With `Standardization::Global` the statistics come from all points pooled,
/// so individual series are only centered and scaled jointly.
pub fn normalize<S: AsRef<[f64]>>(
    series: &[S],
    standardization: Standardization,
    policy: ConstantSeriesPolicy,
) -> Result<Vec<Vec<f64>>> {
    check_finite(series)?;

    match standardization {
        Standardization::Local => series
            .iter()
            .enumerate()
            .map(|(i, ts)| z_normalize(ts.as_ref(), i, policy))
            .collect(),
        Standardization::Global => {
            if series.is_empty() {
                return Ok(Vec::new());
            }
            let pooled = series.iter().flat_map(|ts| ts.as_ref().iter().copied());
            let moments = Moments::compute(pooled);
            if moments.is_constant() && policy == ConstantSeriesPolicy::Reject {
                return Err(MiningError::ConstantSeries { index: 0 });
            }
            series
                .iter()
                .enumerate()
                .map(|(i, ts)| standardize(ts.as_ref(), moments, i, policy))
                .collect()
        }
    }
}
