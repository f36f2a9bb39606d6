// File: crates/linechart-core/tests/scenario.rs
// Purpose: End-to-end transform checks: metadata + rows → categories, series, scales, paths.

use linechart_core::{build, normalize, Cell, ChartError, KeyKind, Metadata, Row, Viewport};
use serde_json::json;

fn east_west() -> (Metadata, Vec<Row>) {
    let binding = json!({
        "metadata": {
            "dimensions": { "region": { "description": "Region" } },
            "mainStructureMembers": { "sales": { "label": "Sales" } }
        },
        "data": [
            { "region": { "label": "East", "raw": 0 }, "sales": { "label": "10", "raw": 10 } },
            { "region": { "label": "West", "raw": 0 }, "sales": { "label": "20", "raw": 20 } }
        ]
    });
    let metadata: Metadata = serde_json::from_value(binding["metadata"].clone()).expect("metadata");
    let rows: Vec<Row> = serde_json::from_value(binding["data"].clone()).expect("rows");
    (metadata, rows)
}

#[test]
fn east_west_scenario() {
    let (metadata, rows) = east_west();
    let n = normalize(&metadata);
    let g = build(&n.dimensions, &n.measures, &rows, Viewport::new(400.0, 300.0)).expect("build");

    assert_eq!(g.categories, ["East", "West"]);
    assert_eq!(g.series.len(), 1);
    assert_eq!(g.series[0].key, "sales");
    assert_eq!(g.series[0].data, vec![10.0, 20.0]);
    assert_eq!(g.value.domain(), (0.0, 20.0));
    assert_eq!(g.plot.width, 330.0);
    assert_eq!(g.plot.height, 250.0);
    assert_eq!(g.band.range(), (0.0, 330.0));
    assert_eq!(g.value.range(), (250.0, 0.0));

    let path = g.path("sales").expect("sales path");
    let xs: Vec<f64> = path.points.iter().map(|p| p.x).collect();
    assert!(xs[0] < xs[1]);
    assert!((xs[0] + xs[1] - 330.0).abs() < 1e-9, "bands are centered in the plot");
    assert_eq!(path.points[1].y, 0.0);
}

#[test]
fn multi_dimension_categories_join_with_slash() {
    let metadata: Metadata = serde_json::from_value(json!({
        "dimensions": { "d1": {}, "d2": {} },
        "mainStructureMembers": { "m": {} }
    }))
    .expect("metadata");
    let row = Row::new()
        .with("d1", Cell::new("A", "a"))
        .with("d2", Cell::new("B", "b"))
        .with("m", Cell::new("1", 1));
    let n = normalize(&metadata);
    let g = build(&n.dimensions, &n.measures, &[row], Viewport::new(400.0, 300.0)).expect("build");
    assert_eq!(g.categories, ["A/B"]);
}

#[test]
fn value_domain_uses_max_across_measures() {
    let metadata: Metadata = serde_json::from_value(json!({
        "dimensions": { "d": {} },
        "mainStructureMembers": { "a": {}, "b": {} }
    }))
    .expect("metadata");
    let rows: Vec<Row> = (0..4)
        .map(|i| {
            Row::new()
                .with("d", Cell::new(format!("c{i}"), i))
                .with("a", Cell::new("", i as f64))
                .with("b", Cell::new("", 10.0 - i as f64 * 3.5))
        })
        .collect();
    let n = normalize(&metadata);
    let g = build(&n.dimensions, &n.measures, &rows, Viewport::new(640.0, 480.0)).expect("build");
    assert_eq!(g.value.vmax, 10.0);
    assert_eq!(g.paths.len(), 2);
    assert!(g.paths.iter().all(|p| p.points.len() == 4));
}

#[test]
fn empty_rows_give_flat_scale() {
    let (metadata, _) = east_west();
    let n = normalize(&metadata);
    let g = build(&n.dimensions, &n.measures, &[], Viewport::new(400.0, 300.0)).expect("build");
    assert!(g.categories.is_empty());
    assert_eq!(g.value.domain(), (0.0, 0.0));
    assert_eq!(g.paths.len(), 1);
    assert!(g.paths[0].points.is_empty());
}

#[test]
fn tiny_viewport_degenerates_without_error() {
    let (metadata, rows) = east_west();
    let n = normalize(&metadata);
    let g = build(&n.dimensions, &n.measures, &rows, Viewport::new(20.0, 10.0)).expect("build");
    assert!(g.plot.is_degenerate());
    assert_eq!(g.paths[0].points.len(), 2);
}

#[test]
fn missing_cell_fails_whole_build() {
    let (metadata, mut rows) = east_west();
    rows[1].0.remove("sales");
    let n = normalize(&metadata);
    let err = build(&n.dimensions, &n.measures, &rows, Viewport::new(400.0, 300.0)).unwrap_err();
    match err {
        ChartError::MissingCell { row, kind, key } => {
            assert_eq!((row, kind, key.as_str()), (1, KeyKind::Measure, "sales"));
        }
        other => panic!("expected MissingCell, got {other}"),
    }
}
