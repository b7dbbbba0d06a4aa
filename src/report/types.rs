//----------------------------------------
// report mod types
//----------------------------------------
use serde::Serialize;
use std::path::PathBuf;

use crate::parameters::types::DemoSettings;
use crate::statistics::types::{TestResult, Verdict};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub settings: DemoSettings,
    pub result: TestResult,
    pub verdict: Verdict,
    /// One-sided critical z at `settings.alpha`.
    pub critical_z: f64,
    /// `(1 - p_value) * 100`
    pub percent_greater: f64,
    pub title: String,
    pub plot_path: Option<PathBuf>,
}
