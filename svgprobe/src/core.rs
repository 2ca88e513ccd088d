// src/core.rs
pub mod extract;
pub mod path_data;

use crate::models::{AnalysisReport, CoordBounds, CoordStats, PathAnalysis, TransformedBounds};

/// Runs the whole analysis over one SVG source text.
///
/// Only the first collected path is analyzed numerically; later paths
/// contribute to the count alone. A first path that yields no coordinate
/// pairs produces a report without a path section.
///
/// # Arguments
///
/// * `svg` - The raw SVG source text
///
/// # Returns
///
/// * `AnalysisReport` - Header attributes, path count, aspect-ratio flag,
///   and the first path's coordinate analysis when one exists
#[must_use]
pub fn analyze(svg: &str) -> AnalysisReport {
    let attributes = extract::extract_attributes(svg);
    let paths = extract::collect_path_data(svg);
    let first_path = paths.first().and_then(|data| analyze_path(data));

    AnalysisReport {
        attributes,
        path_count: paths.len(),
        preserves_aspect_ratio: extract::preserves_aspect_ratio(svg),
        first_path,
    }
}

fn analyze_path(data: &str) -> Option<PathAnalysis> {
    let coords = path_data::tokenize(data);
    let stats = CoordStats::from_coords(&coords)?;
    let raw = CoordBounds::from_coords(&coords)?;
    let transformed = TransformedBounds::from_raw(&raw);

    Some(PathAnalysis {
        stats,
        move_positions: path_data::move_positions(data),
        raw,
        transformed,
    })
}
