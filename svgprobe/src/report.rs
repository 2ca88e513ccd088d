// src/report.rs
use std::fmt::Write as _;

use crate::models::{AnalysisReport, PathAnalysis};

/// The transform string the analysis explains. Kept as a constant: the
/// explanation below it describes this exact potrace header, not whatever
/// the attribute extractor happened to capture.
const ORIGINAL_TRANSFORM: &str = "translate(0.000000,1024.000000) scale(0.100000,-0.100000)";

/// At most this many moveto positions are listed.
const MOVE_POSITIONS_SHOWN: usize = 5;

/// Renders the full labeled report, one section per analysis stage.
///
/// Sections that depend on coordinate data are omitted entirely when the
/// report carries no path analysis; everything else prints unconditionally.
#[must_use]
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    let attrs = &report.attributes;

    writeln!(out, "=== SVG Analysis ===")?;
    writeln!(out, "Width: {}", attrs.width.as_deref().unwrap_or("Not found"))?;
    writeln!(out, "Height: {}", attrs.height.as_deref().unwrap_or("Not found"))?;
    writeln!(out, "ViewBox: {}", attrs.view_box.as_deref().unwrap_or("Not found"))?;
    writeln!(out, "Transform: {}", attrs.translate.as_deref().unwrap_or("Not found"))?;
    writeln!(out, "Scale: {}", attrs.scale.as_deref().unwrap_or("Not found"))?;

    writeln!(out)?;
    writeln!(out, "Number of paths: {}", report.path_count)?;

    if let Some(path) = &report.first_path {
        write_path_section(out, path)?;
    }

    writeln!(out)?;
    let flag = if report.preserves_aspect_ratio { "True" } else { "False" };
    writeln!(out, "Preserve aspect ratio: {flag}")?;

    writeln!(out)?;
    writeln!(out, "=== Transform Analysis ===")?;
    writeln!(out, "Original transform: {ORIGINAL_TRANSFORM}")?;
    writeln!(out, "This means:")?;
    writeln!(out, "- Translate: (0, 1024) - moves content down by 1024 units")?;
    writeln!(out, "- Scale: (0.1, -0.1) - scales down to 10% and flips vertically")?;

    if let Some(path) = &report.first_path {
        write_bounds_section(out, path)?;
    }

    Ok(())
}

fn write_path_section(out: &mut String, path: &PathAnalysis) -> std::fmt::Result {
    let shown = path
        .move_positions
        .get(..MOVE_POSITIONS_SHOWN)
        .unwrap_or(&path.move_positions);

    writeln!(out)?;
    writeln!(out, "Path 1 coordinate analysis:")?;
    writeln!(out, "Total coordinates: {}", path.stats.count)?;
    writeln!(out, "Min coordinate: {}", path.stats.min)?;
    writeln!(out, "Max coordinate: {}", path.stats.max)?;
    writeln!(out, "Coordinate range: {}", path.stats.range())?;
    writeln!(out, "Move commands at positions: {shown:?}...")?;

    Ok(())
}

fn write_bounds_section(out: &mut String, path: &PathAnalysis) -> std::fmt::Result {
    let raw = &path.raw;
    let transformed = &path.transformed;

    writeln!(out)?;
    writeln!(out, "Raw coordinate bounds:")?;
    writeln!(
        out,
        "X: {} to {} (range: {})",
        raw.min_x,
        raw.max_x,
        raw.x_range()
    )?;
    writeln!(
        out,
        "Y: {} to {} (range: {})",
        raw.min_y,
        raw.max_y,
        raw.y_range()
    )?;

    writeln!(out)?;
    writeln!(out, "Transformed coordinate bounds:")?;
    writeln!(
        out,
        "X: {} to {} (range: {})",
        transformed.min_x,
        transformed.max_x,
        transformed.x_range()
    )?;
    writeln!(
        out,
        "Y: {} to {} (range: {})",
        transformed.min_y,
        transformed.max_y,
        transformed.y_range()
    )?;

    writeln!(out)?;
    writeln!(out, "ViewBox usage percentage:")?;
    writeln!(out, "X-axis usage: {:.2}%", transformed.x_usage())?;
    writeln!(out, "Y-axis usage: {:.2}%", transformed.y_usage())?;

    Ok(())
}
