use journeydoc_core::JourneyGraph;
use journeydoc_render::{layout_flowchart, render_flowchart_svg};

fn svg() -> String {
    let graph = JourneyGraph::fertility_ai();
    let layout = layout_flowchart(&graph).expect("layout ok");
    render_flowchart_svg(&layout)
}

#[test]
fn svg_document_has_expected_frame() {
    let svg = svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"width="1200""#));
    assert!(svg.contains(r#"height="800""#));
    assert!(svg.contains(r#"viewBox="0 0 1200 800""#));
    assert!(svg.contains(r#"<rect width="1200" height="800" fill="white"/>"#));
}

#[test]
fn svg_contains_one_arrow_line_per_interaction() {
    let svg = svg();
    assert_eq!(svg.matches("<line ").count(), 13);
    assert_eq!(svg.matches(r##"marker-end="url(#arrowhead)""##).count(), 13);
    assert!(svg.contains(r#"<marker id="arrowhead""#));
}

#[test]
fn svg_labels_use_display_abbreviations() {
    let svg = svg();
    assert!(svg.contains(">Feature Select</text>"));
    assert!(svg.contains(">Booking</text>"));
    assert!(svg.contains(">Education</text>"));
    // 15-character names are within the label budget and stay unabbreviated.
    assert!(svg.contains(">Document Upload</text>"));
    assert!(svg.contains(">Cost Calculator</text>"));
}

#[test]
fn svg_contains_title_and_legend() {
    let svg = svg();
    assert!(svg.contains(">FertilityAI User Flow</text>"));
    for label in [
        "Entry Point",
        "Bot Response",
        "Decision",
        "Feature/Tool",
        "AI Process",
        "User Action",
    ] {
        assert!(svg.contains(&format!(">{label}</text>")), "missing legend: {label}");
    }
}

#[test]
fn svg_uses_each_marker_shape() {
    let svg = svg();
    // Entry is the only circle node.
    assert_eq!(svg.matches("<circle ").count(), 1);
    assert!(svg.contains(r##"fill="#1FB8CD""##));
    // Decision diamond, feature hexagons and AI-process star are polygons.
    assert!(svg.contains(r##"fill="#2E8B57""##));
    assert!(svg.contains(r##"fill="#D2BA4C""##));
    assert!(svg.matches("<polygon ").count() >= 8);
}
