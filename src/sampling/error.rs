//----------------------------------------
// sampling errors
//----------------------------------------
use crate::error::AbTestErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SamplingErr {
    #[error("cannot build normal distribution with mean {mean} and standard deviation {standard_deviation}")]
    InvalidNormal { mean: f64, standard_deviation: f64 },
}

impl From<SamplingErr> for AbTestErr {
    fn from(err: SamplingErr) -> AbTestErr {
        AbTestErr::Sampling(err)
    }
}
