// tests/integration_tests/extraction_test.rs
use super::common::svg_with_paths;
use svgprobe::core::extract::{collect_path_data, extract_attributes, preserves_aspect_ratio};

#[test]
fn test_attributes_from_generated_svg() {
    let svg = svg_with_paths(&["M1 2"]);
    let attrs = extract_attributes(&svg);

    assert_eq!(attrs.width.as_deref(), Some("100.000000pt"));
    assert_eq!(attrs.height.as_deref(), Some("100.000000pt"));
    assert_eq!(attrs.view_box.as_deref(), Some("0 0 100.000000 100.000000"));
    assert_eq!(attrs.translate.as_deref(), Some("0.000000,100.000000"));
    assert_eq!(attrs.scale.as_deref(), Some("0.100000,-0.100000"));
}

#[test]
fn test_extraction_is_textual_not_structural() {
    // A transform buried in a comment still matches: first occurrence wins,
    // no XML awareness.
    let svg = "<!-- translate(9,9) --><g transform=\"translate(1,2)\"/>";
    let attrs = extract_attributes(svg);
    assert_eq!(attrs.translate.as_deref(), Some("9,9"));
}

#[test]
fn test_path_collection_counts_every_d_attribute() {
    let svg = svg_with_paths(&["M1 2", "M3 4", "M5 6"]);
    assert_eq!(collect_path_data(&svg).len(), 3);
}

#[test]
fn test_path_collection_ignores_element_names() {
    let svg = r#"<glyph d="M0 0"/><path d="M1 1"/>"#;
    assert_eq!(collect_path_data(svg), vec!["M0 0", "M1 1"]);
}

#[test]
fn test_aspect_ratio_requires_exact_substring() {
    assert!(preserves_aspect_ratio(&svg_with_paths(&[])));
    assert!(!preserves_aspect_ratio(
        r#"<svg preserveAspectRatio="xMidYMid  meet">"#
    ));
    assert!(!preserves_aspect_ratio("<svg>"));
}
