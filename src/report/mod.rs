//----------------------------------------
// report mod
//----------------------------------------
pub mod text;
pub mod types;

use std::path::PathBuf;

use crate::error::AbTestErr;
use crate::parameters::types::DemoSettings;
use crate::statistics::{types::TestResult, z_test::one_sided_critical_z};
use types::Report;

pub fn build_report(
    settings: &DemoSettings,
    result: TestResult,
    plot_path: Option<PathBuf>,
) -> Result<Report, AbTestErr> {
    Ok(Report {
        settings: settings.clone(),
        result,
        verdict: result.verdict(settings.alpha),
        critical_z: one_sided_critical_z(settings.alpha)?,
        percent_greater: (1.0 - result.p_value) * 100.0,
        title: text::plot_title(&result),
        plot_path,
    })
}
