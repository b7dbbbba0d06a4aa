//----------------------------------------
// Crate error type
//----------------------------------------
use crate::config::error::ConfigErr;
use crate::histogram::error::HistogramErr;
use crate::parameters::error::ParameterErr;
use crate::sampling::error::SamplingErr;
use crate::statistics::error::{NormalDistErr, StatisticsErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbTestErr {
    #[error("while computing test statistic: {0}")]
    Statistics(StatisticsErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while validating parameters: {0}")]
    Parameter(ParameterErr),
    #[error("while drawing samples: {0}")]
    Sampling(SamplingErr),
    #[error("while building histogram: {0}")]
    Histogram(HistogramErr),
    #[error("while loading settings: {0}")]
    Config(ConfigErr),
}
