// src/models/attributes.rs
use serde::Serialize;

/// Header attributes captured from the SVG source text.
///
/// Each field holds the first textual match of its pattern, or `None` when
/// the pattern never occurs. Absence is a valid terminal state, rendered as
/// `Not found` in the report.
#[derive(Debug, Default, Serialize)]
pub struct SvgAttributes {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
    pub translate: Option<String>,
    pub scale: Option<String>,
}
