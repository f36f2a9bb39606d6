// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the data-to-geometry pipeline and drawing seam.

pub mod axis;
pub mod backend;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod normalize;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use backend::DrawingBackend;
pub use chart::{build, paint, Chart, RenderOptions};
pub use error::{ChartError, KeyKind};
pub use geometry::{ChartGeometry, Point, SeriesPath};
pub use model::{Cell, Descriptor, Metadata, Row};
pub use normalize::{normalize, Normalized};
pub use scale::{BandScale, ValueScale};
pub use series::{extract, Series};
pub use svg::SvgBackend;
pub use theme::{Rgba, Theme};
pub use types::{Insets, PlotRect, Viewport, MARGINS};
