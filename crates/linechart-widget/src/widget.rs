// File: crates/linechart-widget/src/widget.rs
// Summary: Line chart widget: binds host data and repaints the whole chart on every trigger.

use linechart_core::{normalize, paint, Chart, RenderOptions, Theme, Viewport, MARGINS};
use tracing::{debug, warn};

use crate::binding::DataBinding;
use crate::error::Result;
use crate::handle::{BackendHandle, BackendLoader};
use crate::lifecycle::{LifecycleHooks, RenderOutcome, SkipReason};

pub struct LineChartWidget<L: BackendLoader> {
    binding: Option<DataBinding>,
    viewport: Viewport,
    theme: Theme,
    backend: BackendHandle<L>,
}

impl<L: BackendLoader> LineChartWidget<L> {
    pub fn new(loader: L) -> Self {
        Self {
            binding: None,
            viewport: Viewport::default(),
            theme: Theme::default(),
            backend: BackendHandle::new(loader),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Attach host data. Takes effect on the next trigger.
    pub fn set_data_binding(&mut self, binding: DataBinding) {
        self.binding = Some(binding);
    }

    pub fn data_binding(&self) -> Option<&DataBinding> {
        self.binding.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn backend(&self) -> Option<&L::Backend> {
        self.backend.get()
    }

    pub fn backend_mut(&mut self) -> Option<&mut L::Backend> {
        self.backend.get_mut()
    }

    /// Number of times the backend has been loaded.
    pub fn backend_loads(&self) -> usize {
        self.backend.loads()
    }

    /// Rebuild and repaint everything from the current binding and viewport.
    ///
    /// A binding that is absent or not `success` is a no-op. Rows are fully
    /// validated before the backend sees anything, so a bad row leaves the
    /// previous frame in place.
    pub fn render(&mut self) -> Result<RenderOutcome> {
        let outcome = self.render_frame();
        if let Err(err) = &outcome {
            warn!(error = %err, "render failed");
        }
        outcome
    }

    fn render_frame(&mut self) -> Result<RenderOutcome> {
        let Some(binding) = &self.binding else {
            debug!("render skipped: no data binding");
            return Ok(RenderOutcome::Skipped(SkipReason::Unbound));
        };
        if !binding.is_success() {
            debug!(state = %binding.state, "render skipped: binding not ready");
            return Ok(RenderOutcome::Skipped(SkipReason::NotReady(binding.state.clone())));
        }

        let normalized = normalize(&binding.metadata);
        let opts = RenderOptions { viewport: self.viewport, insets: MARGINS, theme: self.theme };
        let geometry = Chart::new(&normalized, &binding.data).build(&opts)?;

        let backend = self.backend.acquire()?;
        paint(&geometry, backend, &opts.theme)?;
        debug!(
            rows = binding.data.len(),
            series = geometry.paths.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            "chart painted"
        );
        Ok(RenderOutcome::Painted(Box::new(geometry)))
    }

    /// Release the backend; a later trigger loads a fresh one.
    pub fn teardown(&mut self) {
        self.backend.release();
    }
}

impl<L: BackendLoader> LifecycleHooks for LineChartWidget<L> {
    fn on_resize(&mut self, width: f64, height: f64) -> Result<RenderOutcome> {
        self.viewport = Viewport::new(width, height);
        self.render()
    }

    fn on_data_change(&mut self, changed: &[String]) -> Result<RenderOutcome> {
        debug!(?changed, "properties changed");
        self.render()
    }
}

impl<L: BackendLoader> Drop for LineChartWidget<L> {
    fn drop(&mut self) {
        self.teardown();
    }
}
