use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::error::AbTestErr;
use crate::histogram::error::HistogramErr;

pub const DEFAULT_BINS: usize = 50;

/// Equal-width bins over `[lower, upper]`. Every bin is half-open except the
/// last, which also takes values equal to `upper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub lower: f64,
    pub upper: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_samples(samples: &[f64], n_bins: usize) -> Result<Self, AbTestErr> {
        //----------------------------------------
        // Check arguments
        if n_bins == 0 {
            return Err(HistogramErr::ZeroBins.into());
        }
        if let Some(&bad) = samples.iter().find(|x| !x.is_finite()) {
            return Err(HistogramErr::NonFiniteSample(bad).into());
        }
        let (lower, upper) = match samples.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => return Err(HistogramErr::EmptySamples.into()),
            MinMaxResult::OneElement(x) => (x - 0.5, x + 0.5),
            MinMaxResult::MinMax(lo, hi) if lo == hi => (lo - 0.5, hi + 0.5),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        //----------------------------------------
        // Count
        let mut counts = vec![0_usize; n_bins];
        let scale = n_bins as f64 / (upper - lower);
        for &x in samples {
            let index = (((x - lower) * scale) as usize).min(n_bins - 1);
            counts[index] += 1;
        }

        Ok(Histogram {
            lower,
            upper,
            counts,
        })
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.n_bins() as f64
    }

    /// Left edge of bin `i`.
    pub fn bin_start(&self, i: usize) -> f64 {
        self.lower + i as f64 * self.bin_width()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
