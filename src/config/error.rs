//----------------------------------------
// config errors
//----------------------------------------
use crate::error::AbTestErr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl From<ConfigErr> for AbTestErr {
    fn from(err: ConfigErr) -> AbTestErr {
        AbTestErr::Config(err)
    }
}
