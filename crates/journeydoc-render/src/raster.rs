//! SVG to PNG rasterization via `usvg`/`resvg` into a `tiny-skia` pixmap.

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG for PNG rendering")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    /// Optional solid fill painted before the SVG; the flowchart SVG already
    /// carries a white background rect, so this is normally `None`.
    pub background: Option<tiny_skia::Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

/// Rasterizes an SVG document to PNG bytes. Output dimensions are the SVG's
/// intrinsic size multiplied by `options.scale`.
pub fn png_from_svg(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    // Keep output stable-ish across environments while still using system fonts.
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;
    let size = tree.size();

    let scale = options.scale;
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;
    if let Some(color) = options.background {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    tracing::debug!(width_px, height_px, scale, "flowchart rasterized");
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}
