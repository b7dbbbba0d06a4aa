use crate::error::AbTestErr;
use crate::parameters::{
    bounds::{
        ALPHA_MAX, ALPHA_MIN, MEAN_1_MAX, MEAN_1_MIN, MEAN_2_MAX_OFFSET, SAMPLE_SIZE_MAX,
        SAMPLE_SIZE_MIN, STANDARD_DEVIATION_MAX, STANDARD_DEVIATION_MIN,
    },
    error::ParameterErr,
    types::DemoSettings,
};

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), AbTestErr> {
    // NaN fails `contains`, so it is rejected here too
    if !(min..=max).contains(&value) {
        return Err(ParameterErr::OutOfRange {
            name,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

fn check_sample_size(name: &'static str, value: usize) -> Result<(), AbTestErr> {
    if !(SAMPLE_SIZE_MIN..=SAMPLE_SIZE_MAX).contains(&value) {
        return Err(ParameterErr::SampleSizeOutOfRange {
            name,
            value,
            min: SAMPLE_SIZE_MIN,
            max: SAMPLE_SIZE_MAX,
        }
        .into());
    }
    Ok(())
}

impl DemoSettings {
    /// Checks every value against its slider range, in slider order.
    pub fn validate(&self) -> Result<(), AbTestErr> {
        let dist_1 = &self.distribution_1;
        let dist_2 = &self.distribution_2;

        check_range("alpha", self.alpha, ALPHA_MIN, ALPHA_MAX)?;
        check_range("mean_1", dist_1.mean, MEAN_1_MIN, MEAN_1_MAX)?;
        check_range(
            "std_1",
            dist_1.standard_deviation,
            STANDARD_DEVIATION_MIN,
            STANDARD_DEVIATION_MAX,
        )?;
        check_sample_size("size_1", dist_1.sample_size)?;
        check_range(
            "mean_2",
            dist_2.mean,
            dist_1.mean,
            dist_1.mean + MEAN_2_MAX_OFFSET,
        )?;
        check_range(
            "std_2",
            dist_2.standard_deviation,
            STANDARD_DEVIATION_MIN,
            STANDARD_DEVIATION_MAX,
        )?;
        check_sample_size("size_2", dist_2.sample_size)?;
        Ok(())
    }
}
