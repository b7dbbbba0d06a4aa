//----------------------------------------
// statistics errors
//----------------------------------------
use crate::error::AbTestErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StatisticsErr {
    #[error("combined standard deviation is zero; z-score is undefined")]
    ZeroSpread,
    #[error("combined standard deviation is not finite; got {0}")]
    NonFiniteSpread(f64),
}

impl From<StatisticsErr> for AbTestErr {
    fn from(err: StatisticsErr) -> AbTestErr {
        AbTestErr::Statistics(err)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in [0, 1]; got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for AbTestErr {
    fn from(err: NormalDistErr) -> AbTestErr {
        AbTestErr::NormalDist(err)
    }
}
