// File: crates/linechart-widget/src/lifecycle.rs
// Summary: Host-driven lifecycle capability and the outcome of a render.

use linechart_core::ChartGeometry;

use crate::error::Result;

/// Why a render did not paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No data binding has been attached yet.
    Unbound,
    /// The binding's state is something other than `success`.
    NotReady(String),
}

#[derive(Debug)]
pub enum RenderOutcome {
    /// A full frame was painted from this geometry.
    Painted(Box<ChartGeometry>),
    /// Nothing was touched; the previous frame stays on screen.
    Skipped(SkipReason),
}

impl RenderOutcome {
    pub fn is_painted(&self) -> bool {
        matches!(self, RenderOutcome::Painted(_))
    }

    pub fn geometry(&self) -> Option<&ChartGeometry> {
        match self {
            RenderOutcome::Painted(g) => Some(g),
            RenderOutcome::Skipped(_) => None,
        }
    }
}

/// Callbacks the host scheduler invokes; each one re-renders from scratch.
pub trait LifecycleHooks {
    fn on_resize(&mut self, width: f64, height: f64) -> Result<RenderOutcome>;
    /// `changed` names the properties the host updated.
    fn on_data_change(&mut self, changed: &[String]) -> Result<RenderOutcome>;
}
