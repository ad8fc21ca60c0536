#![forbid(unsafe_code)]

//! Headless renderer for the FertilityAI user-journey flowchart: fixed
//! layout, SVG emission, PNG rasterization.

pub mod layout;
pub mod raster;
pub mod svg;

pub use layout::{FlowchartLayout, layout_flowchart};
pub use raster::{RasterOptions, png_from_svg};
pub use svg::render_flowchart_svg;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] journeydoc_core::Error),
    #[error(transparent)]
    Raster(#[from] raster::RasterError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders the journey graph straight to PNG bytes at the given raster
/// options. Convenience over layout + SVG + raster.
pub fn render_flowchart_png(
    graph: &journeydoc_core::JourneyGraph,
    options: &RasterOptions,
) -> Result<Vec<u8>> {
    let layout = layout_flowchart(graph)?;
    let svg = render_flowchart_svg(&layout);
    Ok(png_from_svg(&svg, options)?)
}
