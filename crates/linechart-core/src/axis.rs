// File: crates/linechart-core/src/axis.rs
// Summary: Axis model: orientation, placement and tick positions/labels.

use crate::grid::{format_tick, nice_ticks, tick_step, DEFAULT_TICK_COUNT};
use crate::scale::{BandScale, ValueScale};
use crate::types::PlotRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Category axis under the plot, ticks pointing down.
    Bottom,
    /// Value axis left of the plot, ticks pointing left.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis, relative to the axis origin.
    pub offset: f64,
    pub label: String,
}

/// Everything a backend needs to draw one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Translation of the axis origin inside the viewport.
    pub translate: (f64, f64),
    /// Extent of the axis line, relative to the origin.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Category axis: one tick per band center, placed at the bottom edge of the plot.
    pub fn bottom(band: &BandScale, categories: &[String], plot: &PlotRect) -> Self {
        let ticks = categories
            .iter()
            .enumerate()
            .filter_map(|(i, label)| band.center_px(i).map(|offset| Tick { offset, label: label.clone() }))
            .collect();
        Self {
            orient: AxisOrient::Bottom,
            translate: (plot.left, plot.top + plot.height),
            range: band.range(),
            ticks,
        }
    }

    /// Value axis: "nice" ticks over the scale domain, placed at the left edge of the plot.
    pub fn left(scale: &ValueScale, plot: &PlotRect) -> Self {
        let (vmin, vmax) = scale.domain();
        let values = nice_ticks(vmin, vmax, DEFAULT_TICK_COUNT);
        let step = tick_step(&values);
        let ticks = values
            .iter()
            .map(|&v| Tick { offset: scale.to_px(v), label: format_tick(v, step) })
            .collect();
        Self {
            orient: AxisOrient::Left,
            translate: (plot.left, plot.top),
            range: scale.range(),
            ticks,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().map(|t| t.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Viewport, MARGINS};

    #[test]
    fn bottom_axis_sits_under_plot() {
        let plot = Viewport::new(400.0, 300.0).plot_rect(&MARGINS);
        let categories = vec!["East".to_string(), "West".to_string()];
        let band = BandScale::new(2, (0.0, plot.width));
        let axis = Axis::bottom(&band, &categories, &plot);
        assert_eq!(axis.translate, (50.0, 270.0));
        assert_eq!(axis.labels().collect::<Vec<_>>(), ["East", "West"]);
        assert_eq!(axis.ticks[0].offset, band.center_px(0).unwrap());
    }

    #[test]
    fn left_axis_ticks_span_domain() {
        let plot = Viewport::new(400.0, 300.0).plot_rect(&MARGINS);
        let scale = ValueScale::new_linear(0.0, plot.height, 0.0, 20.0);
        let axis = Axis::left(&scale, &plot);
        assert_eq!(axis.translate, (50.0, 20.0));
        assert_eq!(axis.ticks.first().map(|t| t.offset), Some(250.0));
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("20"));
        assert_eq!(axis.ticks.last().map(|t| t.offset), Some(0.0));
    }

    #[test]
    fn flat_value_axis_has_one_tick() {
        let plot = Viewport::new(400.0, 300.0).plot_rect(&MARGINS);
        let scale = ValueScale::new_linear(0.0, plot.height, 0.0, 0.0);
        let axis = Axis::left(&scale, &plot);
        assert_eq!(axis.ticks.len(), 1);
        assert_eq!(axis.ticks[0].label, "0");
        assert_eq!(axis.ticks[0].offset, 125.0);
    }
}
