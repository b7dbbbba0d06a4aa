//----------------------------------------
// compute mod
//----------------------------------------
use std::path::Path;
use tracing::{debug, info};

use crate::error::AbTestErr;
use crate::histogram::{
    bins::{DEFAULT_BINS, Histogram},
    svg::{render_overlay, write_svg},
};
use crate::parameters::types::DemoSettings;
use crate::report::{build_report, types::Report};
use crate::sampling::draw::draw_sample_pair;
use crate::statistics::z_test::compare_distributions;

pub use crate::sampling::draw::draw_samples;
pub use crate::statistics::z_test::{ab_test_stats, one_sided_critical_z};

/// Runs one full recomputation: validate, test, and, when `plot_path` is
/// given, draw samples and write the histogram overlay.
pub fn run_demo(settings: &DemoSettings, plot_path: Option<&Path>) -> Result<Report, AbTestErr> {
    //----------------------------------------
    // Statistics
    settings.validate()?;
    let result = compare_distributions(&settings.distribution_1, &settings.distribution_2)?;
    info!(
        z_score = result.z_score,
        p_value = result.p_value,
        alpha = settings.alpha,
        "computed one-sided z-test"
    );

    //----------------------------------------
    // Histogram
    let report = build_report(settings, result, plot_path.map(Path::to_path_buf))?;
    if let Some(path) = plot_path {
        let svg = render_demo_svg(settings, &report.title)?;
        write_svg(path, &svg)?;
        debug!(path = %path.display(), "wrote histogram");
    }
    Ok(report)
}

pub fn render_demo_svg(settings: &DemoSettings, title: &str) -> Result<String, AbTestErr> {
    let samples = draw_sample_pair(settings)?;
    let histogram_1 = Histogram::from_samples(&samples.distribution_1, DEFAULT_BINS)?;
    let histogram_2 = Histogram::from_samples(&samples.distribution_2, DEFAULT_BINS)?;
    render_overlay(&histogram_1, &histogram_2, title)
}
