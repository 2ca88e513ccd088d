// tests/integration_tests/common.rs

/// Builds a minimal potrace-shaped SVG wrapping the given path data
/// strings, one `<path>` element per entry.
pub fn svg_with_paths(paths: &[&str]) -> String {
    let mut svg = String::from(
        r#"<svg width="100.000000pt" height="100.000000pt" viewBox="0 0 100.000000 100.000000"
  preserveAspectRatio="xMidYMid meet">
<g transform="translate(0.000000,100.000000) scale(0.100000,-0.100000)">"#,
    );
    for data in paths {
        svg.push_str("\n<path d=\"");
        svg.push_str(data);
        svg.push_str("\"/>");
    }
    svg.push_str("\n</g>\n</svg>");
    svg
}
