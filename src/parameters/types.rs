//----------------------------------------
// parameters mod types
//----------------------------------------
use crate::parameters::bounds::{
    DEFAULT_ALPHA, DEFAULT_MEAN_1, DEFAULT_MEAN_2_OFFSET, DEFAULT_SAMPLE_SIZE,
    DEFAULT_STANDARD_DEVIATION,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParameters {
    pub mean: f64,
    pub standard_deviation: f64,
    pub sample_size: usize,
}

impl DistributionParameters {
    pub fn new(mean: f64, standard_deviation: f64, sample_size: usize) -> Self {
        Self {
            mean,
            standard_deviation,
            sample_size,
        }
    }
}

/// Everything one run of the demo needs: threshold, both distributions and
/// an optional seed for the histogram draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    pub alpha: f64,
    pub distribution_1: DistributionParameters,
    pub distribution_2: DistributionParameters,
    pub seed: Option<u64>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            distribution_1: DistributionParameters::new(
                DEFAULT_MEAN_1,
                DEFAULT_STANDARD_DEVIATION,
                DEFAULT_SAMPLE_SIZE,
            ),
            distribution_2: DistributionParameters::new(
                DEFAULT_MEAN_1 + DEFAULT_MEAN_2_OFFSET,
                DEFAULT_STANDARD_DEVIATION,
                DEFAULT_SAMPLE_SIZE,
            ),
            seed: None,
        }
    }
}

impl DemoSettings {
    /// Sets mean 1 and moves mean 2 to its default position above it.
    pub fn with_mean_1(mut self, mean_1: f64) -> Self {
        self.distribution_1.mean = mean_1;
        self.distribution_2.mean = mean_1 + DEFAULT_MEAN_2_OFFSET;
        self
    }
}
