//! Fixed-coordinate layout for the user-journey flowchart.
//!
//! Step positions are authored in an abstract data space (x in [-10, 8],
//! y in [-1, 11], y pointing up); layout maps them onto the 1200x800 canvas
//! and computes the trimmed arrow segments and legend rows.

use crate::Result;
use journeydoc_core::geom::{ARROW_INSET, Point, trim_segment};
use journeydoc_core::{InteractionKind, JourneyGraph, LEGEND_ITEMS, NodeStyle};
use serde::Serialize;

pub const CANVAS_WIDTH: f64 = 1200.0;
pub const CANVAS_HEIGHT: f64 = 800.0;

const DATA_X_MIN: f64 = -10.0;
const DATA_X_MAX: f64 = 8.0;
const DATA_Y_MIN: f64 = -1.0;
const DATA_Y_MAX: f64 = 11.0;

const LEGEND_X: f64 = -8.0;
const LEGEND_TOP_Y: f64 = 9.0;
const LEGEND_ROW_STEP: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps a data-space point to canvas pixels (y inverted).
fn to_canvas(p: Point) -> CanvasPoint {
    CanvasPoint {
        x: (p.x - DATA_X_MIN) / (DATA_X_MAX - DATA_X_MIN) * CANVAS_WIDTH,
        y: (DATA_Y_MAX - p.y) / (DATA_Y_MAX - DATA_Y_MIN) * CANVAS_HEIGHT,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeLayout {
    pub name: String,
    pub label: String,
    pub description: String,
    pub center: CanvasPoint,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrowLayout {
    pub from: String,
    pub to: String,
    pub kind: InteractionKind,
    pub start: CanvasPoint,
    pub end: CanvasPoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendRowLayout {
    pub label: String,
    pub color: String,
    pub marker: CanvasPoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowchartLayout {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<NodeLayout>,
    pub arrows: Vec<ArrowLayout>,
    pub legend: Vec<LegendRowLayout>,
}

/// Lays out the journey graph on the fixed canvas. Fails if an interaction
/// references an undeclared step.
pub fn layout_flowchart(graph: &JourneyGraph) -> Result<FlowchartLayout> {
    graph.validate()?;

    let nodes = graph
        .steps
        .iter()
        .map(|step| NodeLayout {
            name: step.name.clone(),
            label: step.display_label().to_string(),
            description: step.description.clone(),
            center: to_canvas(step.position()),
            style: step.step_type.style(),
        })
        .collect();

    let arrows = graph
        .interactions
        .iter()
        .map(|interaction| {
            // validate() guarantees both lookups succeed.
            let from = graph
                .step(&interaction.from)
                .map_or_else(Point::origin, |s| s.position());
            let to = graph
                .step(&interaction.to)
                .map_or_else(Point::origin, |s| s.position());
            let (start, end) = trim_segment(from, to, ARROW_INSET);
            ArrowLayout {
                from: interaction.from.clone(),
                to: interaction.to.clone(),
                kind: interaction.kind,
                start: to_canvas(start),
                end: to_canvas(end),
            }
        })
        .collect();

    let legend = LEGEND_ITEMS
        .iter()
        .enumerate()
        .map(|(i, ty)| LegendRowLayout {
            label: ty.legend_label().to_string(),
            color: ty.style().color.to_string(),
            marker: to_canvas(journeydoc_core::geom::point(
                LEGEND_X,
                LEGEND_TOP_Y - i as f64 * LEGEND_ROW_STEP,
            )),
        })
        .collect();

    tracing::debug!(title = %graph.title, "flowchart layout computed");

    Ok(FlowchartLayout {
        title: graph.title.clone(),
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        nodes,
        arrows,
        legend,
    })
}
