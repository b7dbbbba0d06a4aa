use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::config::error::ConfigErr;
use crate::error::AbTestErr;
use crate::parameters::types::{DemoSettings, DistributionParameters};

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistributionOverrides {
    pub mean: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub sample_size: Option<usize>,
}

impl DistributionOverrides {
    fn merge(self, other: Self) -> Self {
        Self {
            mean: other.mean.or(self.mean),
            standard_deviation: other.standard_deviation.or(self.standard_deviation),
            sample_size: other.sample_size.or(self.sample_size),
        }
    }

    fn apply_spread(self, params: &mut DistributionParameters) {
        if let Some(standard_deviation) = self.standard_deviation {
            params.standard_deviation = standard_deviation;
        }
        if let Some(sample_size) = self.sample_size {
            params.sample_size = sample_size;
        }
    }
}

/// A partial set of demo settings. Both the settings file and the command
/// line produce one; unset fields fall through to the next layer.
///
/// ```toml
/// alpha = 0.01
/// seed = 42
///
/// [distribution_1]
/// mean = 5.0
///
/// [distribution_2]
/// standard_deviation = 0.5
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverrides {
    pub alpha: Option<f64>,
    pub seed: Option<u64>,
    #[serde(default)]
    pub distribution_1: DistributionOverrides,
    #[serde(default)]
    pub distribution_2: DistributionOverrides,
}

impl SettingsOverrides {
    pub fn from_toml(toml_str: &str) -> Result<Self, AbTestErr> {
        toml::from_str(toml_str).map_err(|e| ConfigErr::Parse(e).into())
    }

    pub fn load(path: &Path) -> Result<Self, AbTestErr> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigErr::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings file");
        Self::from_toml(&content)
    }

    /// Layers `other` on top of `self`.
    pub fn merge(self, other: Self) -> Self {
        Self {
            alpha: other.alpha.or(self.alpha),
            seed: other.seed.or(self.seed),
            distribution_1: self.distribution_1.merge(other.distribution_1),
            distribution_2: self.distribution_2.merge(other.distribution_2),
        }
    }

    /// Applies the overrides to the defaults. A new mean 1 drags the default
    /// mean 2 along unless mean 2 is set explicitly.
    pub fn resolve(self) -> DemoSettings {
        let mut settings = DemoSettings::default();
        if let Some(mean_1) = self.distribution_1.mean {
            settings = settings.with_mean_1(mean_1);
        }
        if let Some(mean_2) = self.distribution_2.mean {
            settings.distribution_2.mean = mean_2;
        }
        if let Some(alpha) = self.alpha {
            settings.alpha = alpha;
        }
        settings.seed = self.seed;
        self.distribution_1.apply_spread(&mut settings.distribution_1);
        self.distribution_2.apply_spread(&mut settings.distribution_2);
        settings
    }
}
