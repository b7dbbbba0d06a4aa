use rand::{Rng, SeedableRng, distributions::Distribution, rngs};
use statrs::distribution::Normal;
use tracing::debug;

use crate::error::AbTestErr;
use crate::parameters::types::{DemoSettings, DistributionParameters};
use crate::sampling::error::SamplingErr;

/// Raw draws behind the histogram overlay. Never used by the test itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair {
    pub distribution_1: Vec<f64>,
    pub distribution_2: Vec<f64>,
}

pub fn draw_samples<R: Rng + ?Sized>(
    params: &DistributionParameters,
    rng: &mut R,
) -> Result<Vec<f64>, AbTestErr> {
    let normal = Normal::new(params.mean, params.standard_deviation).map_err(|_| {
        SamplingErr::InvalidNormal {
            mean: params.mean,
            standard_deviation: params.standard_deviation,
        }
    })?;
    Ok(normal.sample_iter(rng).take(params.sample_size).collect())
}

pub fn draw_sample_pair(settings: &DemoSettings) -> Result<SamplePair, AbTestErr> {
    //----------------------------------------
    // One rng per distribution so each set is reproducible on its own
    let (mut rng_1, mut rng_2) = match settings.seed {
        Some(seed) => (
            rngs::StdRng::seed_from_u64(seed),
            rngs::StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (rngs::StdRng::from_entropy(), rngs::StdRng::from_entropy()),
    };
    debug!(seed = ?settings.seed, "drawing histogram samples");

    Ok(SamplePair {
        distribution_1: draw_samples(&settings.distribution_1, &mut rng_1)?,
        distribution_2: draw_samples(&settings.distribution_2, &mut rng_2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::statistics::Statistics;

    #[test]
    fn draws_requested_count() {
        let mut rng = rngs::StdRng::seed_from_u64(24601);
        let params = DistributionParameters::new(10.0, 0.1, 1234);
        assert_eq!(draw_samples(&params, &mut rng).unwrap().len(), 1234);
    }

    #[test]
    fn sample_moments_close_to_parameters() {
        let mut rng = rngs::StdRng::seed_from_u64(24601);
        let params = DistributionParameters::new(10.0, 2.0, 10000);
        let samples = draw_samples(&params, &mut rng).unwrap();
        assert!((samples.iter().mean() - 10.0).abs() < 0.1);
        assert!((samples.iter().std_dev() - 2.0).abs() < 0.1);
    }

    #[test]
    fn seeded_pair_is_reproducible() {
        let settings = DemoSettings {
            seed: Some(7),
            ..DemoSettings::default()
        };
        assert_eq!(
            draw_sample_pair(&settings).unwrap(),
            draw_sample_pair(&settings).unwrap()
        );
    }

    #[test]
    fn different_seeds_differ() {
        let first = DemoSettings {
            seed: Some(7),
            ..DemoSettings::default()
        };
        let second = DemoSettings {
            seed: Some(8),
            ..DemoSettings::default()
        };
        assert_ne!(
            draw_sample_pair(&first).unwrap().distribution_1,
            draw_sample_pair(&second).unwrap().distribution_1
        );
    }

    #[test]
    fn negative_standard_deviation_error() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let params = DistributionParameters::new(10.0, -1.0, 100);
        assert!(matches!(
            draw_samples(&params, &mut rng),
            Err(AbTestErr::Sampling(SamplingErr::InvalidNormal { .. }))
        ));
    }
}
