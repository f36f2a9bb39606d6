// File: crates/linechart-core/src/geometry.rs
// Summary: Pixel-space geometry emitted by the chart builder.

use std::fmt::Write as _;

use crate::axis::Axis;
use crate::scale::{BandScale, ValueScale};
use crate::series::Series;
use crate::types::{PlotRect, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Polyline for one measure, in plot coordinates (origin at the plot's top-left).
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub key: String,
    pub points: Vec<Point>,
}

impl SeriesPath {
    /// SVG path data with straight segments: `M x,y L x,y ...`.
    /// Empty for a series without points.
    pub fn to_path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{},{}", fmt_coord(p.x), fmt_coord(p.y));
        }
        d
    }
}

/// Shortest round-trippable form, with NaN written as 0 so path data stays parseable.
pub fn fmt_coord(v: f64) -> String {
    if v.is_finite() { format!("{v}") } else { "0".to_string() }
}

/// One render's worth of derived chart state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub plot: PlotRect,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub band: BandScale,
    pub value: ValueScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub paths: Vec<SeriesPath>,
}

impl ChartGeometry {
    pub fn path(&self, key: &str) -> Option<&SeriesPath> {
        self.paths.iter().find(|p| p.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_data_uses_straight_segments() {
        let path = SeriesPath {
            key: "m".into(),
            points: vec![Point::new(0.0, 10.0), Point::new(5.5, 2.0), Point::new(11.0, 0.25)],
        };
        assert_eq!(path.to_path_data(), "M0,10L5.5,2L11,0.25");
    }

    #[test]
    fn empty_path_has_no_data() {
        let path = SeriesPath { key: "m".into(), points: Vec::new() };
        assert_eq!(path.to_path_data(), "");
    }
}
