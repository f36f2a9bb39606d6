// File: crates/linechart-core/tests/svg_output.rs
// Purpose: Paint a built chart through the SVG backend and check the emitted document.

use linechart_core::{normalize, Chart, Metadata, RenderOptions, Row, SvgBackend, Theme, Viewport};
use serde_json::json;

fn input() -> (Metadata, Vec<Row>) {
    let metadata: Metadata = serde_json::from_value(json!({
        "dimensions": { "region": {}, "year": {} },
        "mainStructureMembers": { "sales": {}, "cost": {} }
    }))
    .expect("metadata");
    let rows: Vec<Row> = serde_json::from_value(json!([
        { "region": {"label": "East", "raw": "E"}, "year": {"label": "2023", "raw": "2023"},
          "sales": {"label": "10", "raw": 10}, "cost": {"label": "4", "raw": 4} },
        { "region": {"label": "R&D", "raw": "R"}, "year": {"label": "2024", "raw": "2024"},
          "sales": {"label": "0", "raw": 0}, "cost": {"label": "0", "raw": 0} }
    ]))
    .expect("rows");
    (metadata, rows)
}

#[test]
fn document_has_axes_and_one_path_per_measure() {
    let (metadata, rows) = input();
    let n = normalize(&metadata);
    let opts = RenderOptions { viewport: Viewport::new(400.0, 300.0), ..RenderOptions::default() };
    let mut svg = SvgBackend::new();
    Chart::new(&n, &rows).render(&opts, &mut svg).expect("render");

    let doc = svg.document();
    assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300""#));
    assert!(doc.contains(r#"class="x-axis" transform="translate(50,270)""#));
    assert!(doc.contains(r#"class="y-axis" transform="translate(50,20)""#));
    assert_eq!(doc.matches(r#"<path class="line""#).count(), 2);
    assert!(doc.contains(r#"data-key="sales""#));
    assert!(doc.contains(r#"data-key="cost""#));
    assert!(doc.contains("East/2023"));
    assert!(doc.contains("R&amp;D/2024"));
    assert!(doc.ends_with("</svg>\n"));
}

#[test]
fn repainting_does_not_accumulate() {
    let (metadata, rows) = input();
    let n = normalize(&metadata);
    let chart = Chart::new(&n, &rows);
    let mut svg = SvgBackend::new();
    let mut opts = RenderOptions { theme: Theme::dark(), ..RenderOptions::default() };
    chart.render(&opts, &mut svg).expect("first render");
    let first = svg.document().to_string();
    opts.viewport = Viewport::new(1024.0, 640.0);
    chart.render(&opts, &mut svg).expect("second render");
    assert_eq!(svg.document().matches(r#"<path class="line""#).count(), 2);
    assert_eq!(svg.document().matches(r#"class="x-axis""#).count(), 1);
    assert_ne!(first, svg.document());
    assert!(svg.document().contains(r#"class="background""#));
}
