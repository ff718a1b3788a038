//! Histogram rendering to SVG markup.

use super::{SampleReport, SampleSink};
use crate::OutputError;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use traffic_core::stats::{summarise, Histogram, DEFAULT_BIN_COUNT};

const CANVAS_W: f64 = 640.0;
const CANVAS_H: f64 = 480.0;
const PLOT_LEFT: f64 = 64.0;
const PLOT_RIGHT: f64 = 616.0;
const PLOT_TOP: f64 = 48.0;
const PLOT_BOTTOM: f64 = 416.0;

/// Fraction of each bin slot occupied by its bar.
const BAR_WIDTH_RATIO: f64 = 0.85;

/// Renders a sample's histogram to `<dir>/<stem>.svg`.
///
/// The figure carries the title, axis labels and an annotation box with the
/// sample's mean, variance and standard deviation rounded to five decimal
/// places. The markup is assembled as plain text and written in one shot,
/// so the output for a given sequence is reproducible.
///
/// # Examples
///
/// ```no_run
/// use traffic_output::sample_sink::{SampleReport, SampleSink, SvgHistogramPlotter};
///
/// let plotter = SvgHistogramPlotter::new("./out").with_bin_count(20);
/// let report = SampleReport {
///     title: "Linear Congruential Random Number Generation",
///     stem: "2022-12-03_14.03.22.123",
///     values: &[0.1, 0.4, 0.4, 0.9],
/// };
/// plotter.publish(&report).unwrap();
/// ```
pub struct SvgHistogramPlotter {
    output_dir: PathBuf,
    bin_count: usize,
}

impl SvgHistogramPlotter {
    /// Creates a plotter targeting `output_dir` with the default bin count,
    /// creating the directory if it does not exist.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        let output_dir = output_dir.as_ref().to_path_buf();
        if !output_dir.exists() {
            fs::create_dir_all(&output_dir).ok();
        }
        Self {
            output_dir,
            bin_count: DEFAULT_BIN_COUNT,
        }
    }

    /// Overrides the number of histogram bins.
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Renders the SVG document for a sample.
    fn render(&self, report: &SampleReport<'_>) -> Result<String, OutputError> {
        let histogram = Histogram::from_sample(report.values, self.bin_count)?;
        let summary = summarise(report.values);

        let plot_w = PLOT_RIGHT - PLOT_LEFT;
        let plot_h = PLOT_BOTTOM - PLOT_TOP;
        let slot = plot_w / histogram.bin_count() as f64;
        let max_count = histogram.max_count() as f64;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = CANVAS_W,
            h = CANVAS_H
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="{}" height="{}" fill="white"/>"#,
            CANVAS_W, CANVAS_H
        );

        // Title
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="30" text-anchor="middle" font-family="sans-serif" font-size="16">{}</text>"#,
            CANVAS_W / 2.0,
            escape_text(report.title)
        );

        // Bars
        for (i, &count) in histogram.counts().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar_h = count as f64 / max_count * plot_h;
            let x = PLOT_LEFT + i as f64 * slot + slot * (1.0 - BAR_WIDTH_RATIO) / 2.0;
            let _ = writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="cornflowerblue"/>"#,
                x,
                PLOT_BOTTOM - bar_h,
                slot * BAR_WIDTH_RATIO,
                bar_h
            );
        }

        // Axes
        let _ = writeln!(
            svg,
            r#"  <line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="gray"/>"#,
            l = PLOT_LEFT,
            r = PLOT_RIGHT,
            b = PLOT_BOTTOM
        );
        let _ = writeln!(
            svg,
            r#"  <line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="gray"/>"#,
            l = PLOT_LEFT,
            t = PLOT_TOP,
            b = PLOT_BOTTOM
        );

        // Tick labels: sample range on x, peak occurrence on y
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="11">{}</text>"#,
            PLOT_LEFT,
            PLOT_BOTTOM + 16.0,
            format_tick(histogram.lower())
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="11">{}</text>"#,
            PLOT_RIGHT,
            PLOT_BOTTOM + 16.0,
            format_tick(histogram.upper())
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="end" font-family="sans-serif" font-size="11">{}</text>"#,
            PLOT_LEFT - 6.0,
            PLOT_TOP + 4.0,
            histogram.max_count()
        );

        // Axis titles
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="13">Numerical Value</text>"#,
            CANVAS_W / 2.0,
            CANVAS_H - 24.0
        );
        let mid_y = (PLOT_TOP + PLOT_BOTTOM) / 2.0;
        let _ = writeln!(
            svg,
            r#"  <text x="20" y="{mid}" text-anchor="middle" font-family="sans-serif" font-size="13" transform="rotate(-90 20 {mid})">Occurrence</text>"#,
            mid = mid_y
        );

        // Stats annotation box
        let box_x = PLOT_RIGHT - 178.0;
        let box_y = PLOT_TOP + 8.0;
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="170" height="58" fill="white" fill-opacity="0.85" stroke="gray"/>"#,
            box_x, box_y
        );
        for (line, text) in [
            format!("Mean: {:.5}", summary.mean),
            format!("Variance: {:.5}", summary.variance),
            format!("St.d: {:.5}", summary.std_dev),
        ]
        .iter()
        .enumerate()
        {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="12">{}</text>"#,
                box_x + 8.0,
                box_y + 18.0 + line as f64 * 16.0,
                text
            );
        }

        let _ = writeln!(svg, "</svg>");
        Ok(svg)
    }
}

impl SampleSink for SvgHistogramPlotter {
    fn publish(&self, report: &SampleReport<'_>) -> Result<PathBuf, OutputError> {
        let svg = self.render(report)?;
        let path = self.output_dir.join(format!("{}.svg", report.stem));

        fs::write(&path, svg).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            values = report.values.len(),
            bins = self.bin_count,
            "histogram written to SVG file"
        );

        Ok(path)
    }
}

/// Escape the XML special characters that can appear in a chart title.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Compact tick rendering: whole numbers stay whole, fractions keep
/// four significant decimals.
fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use traffic_core::types::InvalidParameter;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join("trafgen_tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_renders_well_formed_document() {
        let plotter = SvgHistogramPlotter::new(temp_dir("svg_doc")).with_bin_count(10);
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let report = SampleReport {
            title: "Uniform sample",
            stem: "histogram",
            values: &values,
        };

        let path = plotter.publish(&report).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.starts_with("<svg"));
        assert!(content.trim_end().ends_with("</svg>"));
        assert!(content.contains("Uniform sample"));
        assert!(content.contains("Occurrence"));
        assert!(content.contains("Numerical Value"));
        assert!(content.contains("Mean:"));
        assert_eq!(content.matches("cornflowerblue").count(), 10);
    }

    #[test]
    fn test_title_is_escaped() {
        let plotter = SvgHistogramPlotter::new(temp_dir("svg_escape")).with_bin_count(4);
        let report = SampleReport {
            title: "a < b & c",
            stem: "escaped",
            values: &[0.0, 1.0],
        };

        let path = plotter.publish(&report).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_empty_sample_rejected() {
        let plotter = SvgHistogramPlotter::new(temp_dir("svg_empty"));
        let report = SampleReport {
            title: "empty",
            stem: "empty",
            values: &[],
        };

        let err = plotter.publish(&report).unwrap_err();
        assert!(matches!(
            err,
            OutputError::InvalidSample(InvalidParameter::EmptySample)
        ));
    }
}
