//! String-emitted SVG for the flowchart layout: white background, one
//! styled marker + label per node, one arrow line per interaction, the
//! manually positioned legend, and the centered title.

use crate::layout::{CanvasPoint, FlowchartLayout};
use journeydoc_core::MarkerSymbol;
use std::fmt::Write as _;

const ARROW_COLOR: &str = "#666666";
const LABEL_FONT: &str = "Arial Black, Arial, sans-serif";
const TEXT_COLOR: &str = "#333333";
const LEGEND_MARKER_SIZE: f64 = 18.0;

fn fmt_px(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn polygon_points(center: CanvasPoint, radius: f64, sides: usize, start_deg: f64) -> String {
    let mut points = Vec::with_capacity(sides);
    for k in 0..sides {
        let angle = (start_deg + k as f64 * 360.0 / sides as f64).to_radians();
        points.push(format!(
            "{},{}",
            fmt_px(center.x + radius * angle.cos()),
            fmt_px(center.y + radius * angle.sin())
        ));
    }
    points.join(" ")
}

fn star_points(center: CanvasPoint, outer: f64, inner: f64) -> String {
    let mut points = Vec::with_capacity(10);
    for k in 0..10 {
        let radius = if k % 2 == 0 { outer } else { inner };
        let angle = (-90.0 + k as f64 * 36.0).to_radians();
        points.push(format!(
            "{},{}",
            fmt_px(center.x + radius * angle.cos()),
            fmt_px(center.y + radius * angle.sin())
        ));
    }
    points.join(" ")
}

fn write_marker(out: &mut String, center: CanvasPoint, symbol: MarkerSymbol, size: f64, fill: &str) {
    let half = size / 2.0;
    let outline = r#" stroke="white" stroke-width="2""#;
    match symbol {
        MarkerSymbol::Circle => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"{outline}/>"#,
                fmt_px(center.x),
                fmt_px(center.y),
                fmt_px(half),
            );
        }
        MarkerSymbol::Square => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"{outline}/>"#,
                fmt_px(center.x - half),
                fmt_px(center.y - half),
                fmt_px(size),
                fmt_px(size),
            );
        }
        MarkerSymbol::Diamond => {
            // Square of side `size` rotated 45 degrees.
            let _ = write!(
                out,
                r#"<polygon points="{}" fill="{fill}"{outline}/>"#,
                polygon_points(center, half * std::f64::consts::SQRT_2, 4, -90.0),
            );
        }
        MarkerSymbol::Hexagon => {
            let _ = write!(
                out,
                r#"<polygon points="{}" fill="{fill}"{outline}/>"#,
                polygon_points(center, half, 6, -90.0),
            );
        }
        MarkerSymbol::Star => {
            let _ = write!(
                out,
                r#"<polygon points="{}" fill="{fill}"{outline}/>"#,
                star_points(center, half * 1.3, half * 0.55),
            );
        }
    }
}

/// Emits the full standalone SVG document for a computed layout.
pub fn render_flowchart_svg(layout: &FlowchartLayout) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let (w, h) = (fmt_px(layout.width), fmt_px(layout.height));

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Arial, sans-serif">"#,
    );
    let _ = write!(
        out,
        r##"<defs><marker id="arrowhead" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="7.5" markerHeight="7.5" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{ARROW_COLOR}"/></marker></defs>"##,
    );
    let _ = write!(out, r#"<rect width="{w}" height="{h}" fill="white"/>"#);

    // Arrows go under the node markers.
    for arrow in &layout.arrows {
        let _ = write!(
            out,
            r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{ARROW_COLOR}" stroke-width="2" opacity="0.8" marker-end="url(#arrowhead)"/>"##,
            fmt_px(arrow.start.x),
            fmt_px(arrow.start.y),
            fmt_px(arrow.end.x),
            fmt_px(arrow.end.y),
        );
    }

    for node in &layout.nodes {
        write_marker(
            &mut out,
            node.center,
            node.style.symbol,
            node.style.size,
            node.style.color,
        );
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" fill="white" font-size="11" font-family="{LABEL_FONT}">{}</text>"#,
            fmt_px(node.center.x),
            fmt_px(node.center.y),
            escape_xml_text(&node.label),
        );
    }

    for row in &layout.legend {
        let half = LEGEND_MARKER_SIZE / 2.0;
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_px(row.marker.x - half),
            fmt_px(row.marker.y - half),
            fmt_px(LEGEND_MARKER_SIZE),
            fmt_px(LEGEND_MARKER_SIZE),
            row.color,
        );
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" dominant-baseline="central" fill="{TEXT_COLOR}" font-size="11">{}</text>"#,
            fmt_px(row.marker.x + half + 6.0),
            fmt_px(row.marker.y),
            escape_xml_text(&row.label),
        );
    }

    let _ = write!(
        out,
        r#"<text x="{}" y="28" text-anchor="middle" fill="{TEXT_COLOR}" font-size="17" font-weight="bold">{}</text>"#,
        fmt_px(layout.width / 2.0),
        escape_xml_text(&layout.title),
    );

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_px_trims_trailing_zeros() {
        assert_eq!(fmt_px(600.0), "600");
        assert_eq!(fmt_px(66.666_666), "66.667");
        assert_eq!(fmt_px(-0.0001), "0");
    }

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape_xml_text("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_xml_text("Español"), "Español");
    }
}
