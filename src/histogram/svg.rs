//! Standalone SVG rendering of two overlapping histograms.
//!
//! The figure mirrors a default matplotlib overlay: 640x480, blue bars for
//! distribution 1 and red bars for distribution 2 at 0.7 opacity, a legend,
//! "Value" / "Count" axis labels and a title line.
use std::fmt::Write;
use std::path::Path;

use crate::error::AbTestErr;
use crate::histogram::{bins::Histogram, error::HistogramErr};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const PLOT_LEFT: f64 = 70.0;
const PLOT_RIGHT: f64 = WIDTH - 20.0;
const PLOT_TOP: f64 = 40.0;
const PLOT_BOTTOM: f64 = HEIGHT - 55.0;
const BAR_OPACITY: f64 = 0.7;
// Axis padding, as a fraction of the data span
const X_MARGIN: f64 = 0.05;

const SERIES: [(&str, &str); 2] = [("Dist. 1", "#0000ff"), ("Dist. 2", "#ff0000")];

struct Frame {
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Frame {
    fn covering(histograms: &[&Histogram]) -> Self {
        let lower = histograms.iter().map(|h| h.lower).fold(f64::INFINITY, f64::min);
        let upper = histograms.iter().map(|h| h.upper).fold(f64::NEG_INFINITY, f64::max);
        let pad = (upper - lower) * X_MARGIN;
        let max_count = histograms.iter().map(|h| h.max_count()).max().unwrap_or(0);
        Frame {
            x_min: lower - pad,
            x_max: upper + pad,
            y_max: (max_count as f64 * 1.05).max(1.0),
        }
    }

    fn x(&self, value: f64) -> f64 {
        PLOT_LEFT + (value - self.x_min) / (self.x_max - self.x_min) * (PLOT_RIGHT - PLOT_LEFT)
    }

    fn y(&self, count: f64) -> f64 {
        PLOT_BOTTOM - count / self.y_max * (PLOT_BOTTOM - PLOT_TOP)
    }
}

fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let nice = match raw / magnitude {
        r if r <= 1.0 => 1.0,
        r if r <= 2.0 => 2.0,
        r if r <= 5.0 => 5.0,
        _ => 10.0,
    };
    nice * magnitude
}

fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn tick_decimals(step: f64) -> usize {
    (-step.log10().floor()).max(0.0) as usize
}

fn write_bars(
    out: &mut String,
    frame: &Frame,
    histogram: &Histogram,
    label: &str,
    color: &str,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"<g class="bars" data-label="{label}" fill="{color}" fill-opacity="{BAR_OPACITY}">"#
    )?;
    for (i, &count) in histogram.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let start = histogram.bin_start(i);
        let x0 = frame.x(start);
        let x1 = frame.x(start + histogram.bin_width());
        let top = frame.y(count as f64);
        writeln!(
            out,
            r#"<rect x="{x0:.2}" y="{top:.2}" width="{:.2}" height="{:.2}"/>"#,
            x1 - x0,
            PLOT_BOTTOM - top
        )?;
    }
    writeln!(out, "</g>")
}

fn write_axes(out: &mut String, frame: &Frame) -> std::fmt::Result {
    writeln!(
        out,
        r#"<rect x="{PLOT_LEFT}" y="{PLOT_TOP}" width="{}" height="{}" fill="none" stroke="black"/>"#,
        PLOT_RIGHT - PLOT_LEFT,
        PLOT_BOTTOM - PLOT_TOP
    )?;

    //----------------------------------------
    // x ticks
    let x_step = nice_step(frame.x_max - frame.x_min, 6);
    let x_decimals = tick_decimals(x_step);
    for value in ticks(frame.x_min, frame.x_max, x_step) {
        let x = frame.x(value);
        writeln!(
            out,
            r#"<line x1="{x:.2}" y1="{PLOT_BOTTOM}" x2="{x:.2}" y2="{}" stroke="black"/>"#,
            PLOT_BOTTOM + 4.0
        )?;
        writeln!(
            out,
            r#"<text x="{x:.2}" y="{}" font-size="11" text-anchor="middle">{value:.x_decimals$}</text>"#,
            PLOT_BOTTOM + 17.0
        )?;
    }

    //----------------------------------------
    // y ticks; counts are integers
    let y_step = nice_step(frame.y_max, 5).max(1.0);
    for value in ticks(0.0, frame.y_max, y_step) {
        let y = frame.y(value);
        writeln!(
            out,
            r#"<line x1="{}" y1="{y:.2}" x2="{PLOT_LEFT}" y2="{y:.2}" stroke="black"/>"#,
            PLOT_LEFT - 4.0
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{:.2}" font-size="11" text-anchor="end">{value:.0}</text>"#,
            PLOT_LEFT - 7.0,
            y + 4.0
        )?;
    }

    //----------------------------------------
    // Labels
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="13" text-anchor="middle">Value</text>"#,
        (PLOT_LEFT + PLOT_RIGHT) / 2.0,
        HEIGHT - 15.0
    )?;
    writeln!(
        out,
        r#"<text x="18" y="{y}" font-size="13" text-anchor="middle" transform="rotate(-90 18 {y})">Count</text>"#,
        y = (PLOT_TOP + PLOT_BOTTOM) / 2.0
    )
}

fn write_legend(out: &mut String) -> std::fmt::Result {
    let left = PLOT_RIGHT - 90.0;
    for (row, (label, color)) in SERIES.iter().enumerate() {
        let y = PLOT_TOP + 12.0 + row as f64 * 20.0;
        writeln!(
            out,
            r#"<rect x="{left}" y="{y}" width="20" height="10" fill="{color}" fill-opacity="{BAR_OPACITY}"/>"#
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="12">{label}</text>"#,
            left + 26.0,
            y + 9.5
        )?;
    }
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn overlay(
    histogram_1: &Histogram,
    histogram_2: &Histogram,
    title: &str,
) -> Result<String, std::fmt::Error> {
    let frame = Frame::covering(&[histogram_1, histogram_2]);
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    for (histogram, (label, color)) in [histogram_1, histogram_2].into_iter().zip(SERIES) {
        write_bars(&mut out, &frame, histogram, label, color)?;
    }
    write_axes(&mut out, &frame)?;
    write_legend(&mut out)?;
    writeln!(
        out,
        r#"<text x="{}" y="25" font-size="14" text-anchor="middle">{}</text>"#,
        (PLOT_LEFT + PLOT_RIGHT) / 2.0,
        escape(title)
    )?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

/// Renders both histograms on shared axes; distribution 2 is drawn on top.
pub fn render_overlay(
    histogram_1: &Histogram,
    histogram_2: &Histogram,
    title: &str,
) -> Result<String, AbTestErr> {
    overlay(histogram_1, histogram_2, title).map_err(|e| HistogramErr::Format(e).into())
}

pub fn write_svg(path: &Path, svg: &str) -> Result<(), AbTestErr> {
    std::fs::write(path, svg).map_err(|source| {
        HistogramErr::Io {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
