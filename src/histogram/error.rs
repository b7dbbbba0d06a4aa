//----------------------------------------
// histogram errors
//----------------------------------------
use crate::error::AbTestErr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramErr {
    #[error("sample set was empty")]
    EmptySamples,
    #[error("number of bins should be positive")]
    ZeroBins,
    #[error("sample set contains a non-finite value ({0})")]
    NonFiniteSample(f64),
    #[error("failed to format svg")]
    Format(#[from] std::fmt::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<HistogramErr> for AbTestErr {
    fn from(err: HistogramErr) -> AbTestErr {
        AbTestErr::Histogram(err)
    }
}
