use journeydoc_core::JourneyGraph;
use journeydoc_render::{RasterOptions, render_flowchart_png};

fn ihdr_dimensions(png: &[u8]) -> (u32, u32) {
    // IHDR width/height are the first two big-endian u32s after the
    // 8-byte signature and the chunk length/type.
    let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
    let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
    (w, h)
}

#[test]
fn renders_a_1200x800_png() {
    let graph = JourneyGraph::fertility_ai();
    let bytes =
        render_flowchart_png(&graph, &RasterOptions::default()).expect("png render ok");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
    assert_eq!(ihdr_dimensions(&bytes), (1200, 800));
}

#[test]
fn scale_multiplies_output_dimensions() {
    let graph = JourneyGraph::fertility_ai();
    let options = RasterOptions {
        scale: 2.0,
        ..Default::default()
    };
    let bytes = render_flowchart_png(&graph, &options).expect("png render ok");
    assert_eq!(ihdr_dimensions(&bytes), (2400, 1600));
}
