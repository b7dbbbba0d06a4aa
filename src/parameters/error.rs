//----------------------------------------
// parameter errors
//----------------------------------------
use crate::error::AbTestErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParameterErr {
    #[error("{name} should be in [{min}, {max}]; got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} should be in [{min}, {max}]; got {value}")]
    SampleSizeOutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl From<ParameterErr> for AbTestErr {
    fn from(err: ParameterErr) -> AbTestErr {
        AbTestErr::Parameter(err)
    }
}
