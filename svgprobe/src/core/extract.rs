// src/core/extract.rs
use regex::Regex;
use std::sync::OnceLock;

use crate::models::SvgAttributes;

/// The aspect-ratio declaration is matched verbatim; any other value (or a
/// reformatted one) counts as absent.
pub const ASPECT_RATIO_DECL: &str = r#"preserveAspectRatio="xMidYMid meet""#;

fn width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"width="([^"]+)""#).expect("valid regex"))
}

fn height_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"height="([^"]+)""#).expect("valid regex"))
}

fn view_box_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"viewBox="([^"]+)""#).expect("valid regex"))
}

fn translate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"translate\(([^)]+)\)").expect("valid regex"))
}

fn scale_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"scale\(([^)]+)\)").expect("valid regex"))
}

fn path_data_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"d="([^"]+)""#).expect("valid regex"))
}

/// Pulls the declared header attributes out of the raw SVG text.
///
/// Matching is purely textual: the first occurrence of each pattern wins
/// and no well-formedness is checked. Absent patterns stay `None`.
///
/// # Arguments
///
/// * `svg` - The raw SVG source text
///
/// # Returns
///
/// * `SvgAttributes` - The five captured values, `None` where a pattern
///   never occurs
#[must_use]
pub fn extract_attributes(svg: &str) -> SvgAttributes {
    SvgAttributes {
        width: first_capture(width_regex(), svg),
        height: first_capture(height_regex(), svg),
        view_box: first_capture(view_box_regex(), svg),
        translate: first_capture(translate_regex(), svg),
        scale: first_capture(scale_regex(), svg),
    }
}

/// Collects every `d="..."` attribute value in source order.
///
/// Any tag carrying a `d` attribute matches, not just `<path>` elements.
#[must_use]
pub fn collect_path_data(svg: &str) -> Vec<String> {
    path_data_regex()
        .captures_iter(svg)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// True when the source carries the verbatim `xMidYMid meet` declaration.
#[must_use]
pub fn preserves_aspect_ratio(svg: &str) -> bool {
    svg.contains(ASPECT_RATIO_DECL)
}

fn first_capture(re: &Regex, svg: &str) -> Option<String> {
    re.captures(svg)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}
