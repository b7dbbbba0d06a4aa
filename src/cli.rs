//! CLI argument parsing for abtest-demo

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::overrides::{DistributionOverrides, SettingsOverrides};

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "abtest-demo")]
#[command(version)]
#[command(
    about = "One-sided A/B test demo: z-score, p-value and a histogram of two Gaussian samples",
    long_about = None
)]
pub struct Cli {
    /// Significance threshold (default: 0.05)
    #[arg(long, value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Mean of distribution 1, in [0, 20] (default: 10.0)
    #[arg(long = "mean-1", value_name = "MEAN")]
    pub mean_1: Option<f64>,

    /// Standard deviation of distribution 1, in [0.02, 2.0] (default: 0.1)
    #[arg(long = "std-1", value_name = "SD")]
    pub std_1: Option<f64>,

    /// Number of samples drawn for distribution 1, in [100, 10000] (default: 1000)
    #[arg(long = "size-1", value_name = "N")]
    pub size_1: Option<usize>,

    /// Mean of distribution 2, in [mean-1, mean-1 + 3] (default: mean-1 + 1)
    #[arg(long = "mean-2", value_name = "MEAN")]
    pub mean_2: Option<f64>,

    /// Standard deviation of distribution 2, in [0.02, 2.0] (default: 0.1)
    #[arg(long = "std-2", value_name = "SD")]
    pub std_2: Option<f64>,

    /// Number of samples drawn for distribution 2, in [100, 10000] (default: 1000)
    #[arg(long = "size-2", value_name = "N")]
    pub size_2: Option<usize>,

    /// Seed for the histogram samples (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// TOML settings file; command-line values take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the histogram overlay
    #[arg(short, long, value_name = "FILE", default_value = "ab_test.svg")]
    pub output: PathBuf,

    /// Skip sampling and the histogram
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            alpha: self.alpha,
            seed: self.seed,
            distribution_1: DistributionOverrides {
                mean: self.mean_1,
                standard_deviation: self.std_1,
                sample_size: self.size_1,
            },
            distribution_2: DistributionOverrides {
                mean: self.mean_2,
                standard_deviation: self.std_2,
                sample_size: self.size_2,
            },
        }
    }

    pub fn plot_path(&self) -> Option<&std::path::Path> {
        (!self.no_plot).then_some(self.output.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["abtest-demo"]);
        assert_eq!(cli.overrides(), SettingsOverrides::default());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.plot_path(), Some(std::path::Path::new("ab_test.svg")));
    }

    #[test]
    fn slider_flags() {
        let cli = Cli::parse_from([
            "abtest-demo",
            "--alpha",
            "0.01",
            "--mean-1",
            "5",
            "--std-2",
            "0.4",
            "--size-2",
            "500",
            "--seed",
            "3",
            "--format",
            "json",
            "--no-plot",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.alpha, Some(0.01));
        assert_eq!(overrides.distribution_1.mean, Some(5.0));
        assert_eq!(overrides.distribution_2.standard_deviation, Some(0.4));
        assert_eq!(overrides.distribution_2.sample_size, Some(500));
        assert_eq!(overrides.seed, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.plot_path(), None);
    }
}
