use crate::error::AbTestErr;
use crate::statistics::error::NormalDistErr;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

// Upper tail computed directly; 1 - cdf(z) loses everything past z ~ 8
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}

pub fn std_normal_quantile(p: f64) -> Result<f64, AbTestErr> {
    if !(0.0..=1.0).contains(&p) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_normal_cdf_at_zero() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-15)
    }

    #[test]
    fn standard_normal_cdf_1_96() {
        assert!((std_normal_cdf(1.959964) - 0.975).abs() < 0.000001)
    }

    #[test]
    fn standard_normal_sf_far_tail() {
        // 1 - cdf would round to 0 here
        let sf = std_normal_sf(10.0);
        assert!(sf > 0.0);
        assert!((sf - 7.619853e-24).abs() / 7.619853e-24 < 1e-5)
    }

    #[test]
    fn cdf_plus_sf_is_one() {
        for z in [-4.0, -1.3, 0.0, 0.0354, 2.5, 7.071] {
            assert!((std_normal_cdf(z) + std_normal_sf(z) - 1.0).abs() < 1e-12)
        }
    }

    #[test]
    fn std_normal_quantile_err() {
        if let Err(e) = std_normal_quantile(1.1) {
            assert_eq!(
                String::from(
                    "while evaluating normal distribution: arguments to \
                    quantile function should be in [0, 1]; got 1.1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn std_normal_quantile_value() {
        assert!((std_normal_quantile(0.975).unwrap() - 1.96).abs() < 0.0001)
    }

    #[test]
    fn std_normal_quantile_one_sided_005() {
        assert!((std_normal_quantile(0.95).unwrap() - 1.644854).abs() < 0.00001)
    }

    #[test]
    fn std_normal_quantile_symmetric() {
        let upper = std_normal_quantile(0.975).unwrap();
        let lower = std_normal_quantile(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-12)
    }

    #[test]
    fn std_normal_quantile_edges() {
        assert_eq!(std_normal_quantile(1.0).unwrap(), f64::INFINITY);
        assert_eq!(std_normal_quantile(0.0).unwrap(), f64::NEG_INFINITY);
    }
}
