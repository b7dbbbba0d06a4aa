//----------------------------------------
// Slider defaults and ranges
//----------------------------------------

pub const DEFAULT_ALPHA: f64 = 0.05;
pub const ALPHA_MIN: f64 = 0.0;
pub const ALPHA_MAX: f64 = 1.0;

pub const DEFAULT_MEAN_1: f64 = 10.0;
pub const MEAN_1_MIN: f64 = 0.0;
pub const MEAN_1_MAX: f64 = 20.0;

// mean 2 lives in [mean_1, mean_1 + MEAN_2_MAX_OFFSET]
pub const DEFAULT_MEAN_2_OFFSET: f64 = 1.0;
pub const MEAN_2_MAX_OFFSET: f64 = 3.0;

pub const DEFAULT_STANDARD_DEVIATION: f64 = 0.1;
pub const STANDARD_DEVIATION_MIN: f64 = 0.02;
pub const STANDARD_DEVIATION_MAX: f64 = 2.0;

pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
pub const SAMPLE_SIZE_MIN: usize = 100;
pub const SAMPLE_SIZE_MAX: usize = 10000;
