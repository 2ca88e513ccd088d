// tests/integration_tests/report_test.rs
use super::common::svg_with_paths;
use svgprobe::core::analyze;
use svgprobe::report::render;

#[test]
fn test_report_on_generated_svg() {
    let svg = svg_with_paths(&["M0 0 l512 0 l0 512 z", "M9 9"]);
    let rendered = render(&analyze(&svg));

    assert!(rendered.contains("Width: 100.000000pt"));
    assert!(rendered.contains("Number of paths: 2"));
    assert!(rendered.contains("Total coordinates: 6"));
    assert!(rendered.contains("Preserve aspect ratio: True"));
    // Raw x extent 0..512, scaled to 51.2 of 1024.
    assert!(rendered.contains("X-axis usage: 5.00%"));
}

#[test]
fn test_pathless_source_keeps_static_sections() {
    let svg = svg_with_paths(&[]);
    let rendered = render(&analyze(&svg));

    assert!(rendered.contains("Number of paths: 0"));
    assert!(!rendered.contains("Path 1 coordinate analysis:"));
    assert!(!rendered.contains("Raw coordinate bounds:"));
    assert!(rendered.contains("Preserve aspect ratio: True"));
    assert!(rendered.contains("=== Transform Analysis ==="));
    assert!(rendered.contains("- Scale: (0.1, -0.1) - scales down to 10% and flips vertically"));
}

#[test]
fn test_second_path_never_analyzed() {
    // First path has no numbers at all; the numeric sections stay silent
    // even though the second path is rich.
    let svg = svg_with_paths(&["m z", "M0 0 l100 100"]);
    let rendered = render(&analyze(&svg));

    assert!(rendered.contains("Number of paths: 2"));
    assert!(!rendered.contains("Total coordinates:"));
    assert!(!rendered.contains("ViewBox usage percentage:"));
}

#[test]
fn test_json_view_round_trips_key_fields() {
    let svg = svg_with_paths(&["M0 0 l10 20"]);
    let report = analyze(&svg);
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["path_count"], 1);
    assert_eq!(value["attributes"]["width"], "100.000000pt");
    assert_eq!(value["preserves_aspect_ratio"], true);
    assert_eq!(value["first_path"]["stats"]["count"], 4);
    assert_eq!(value["first_path"]["raw"]["max_x"], 10.0);
}
