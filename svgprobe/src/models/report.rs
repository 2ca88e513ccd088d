// src/models/report.rs
use serde::Serialize;

use super::attributes::SvgAttributes;
use super::bounds::{CoordBounds, CoordStats, TransformedBounds};

/// Everything one analysis pass derives from an SVG source.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub attributes: SvgAttributes,
    pub path_count: usize,
    pub preserves_aspect_ratio: bool,
    /// Coordinate analysis of the first path, when it yields any pairs.
    /// `None` both for a path-less source and for a first path whose data
    /// tokenizes to nothing; either way the numeric report sections are
    /// skipped silently.
    pub first_path: Option<PathAnalysis>,
}

/// Numeric breakdown of a single path-data string.
#[derive(Debug, Serialize)]
pub struct PathAnalysis {
    pub stats: CoordStats,
    /// Flat token index of the first coordinate of each moveto command.
    pub move_positions: Vec<usize>,
    pub raw: CoordBounds,
    pub transformed: TransformedBounds,
}
