// File: crates/linechart-widget/src/lib.rs
// Summary: Host-facing line chart widget: binding, lifecycle hooks, backend handle and registry.

pub mod binding;
pub mod error;
pub mod handle;
pub mod lifecycle;
pub mod registry;
pub mod widget;

pub use binding::{DataBinding, SUCCESS};
pub use error::{Result, WidgetError};
pub use handle::{BackendHandle, BackendLoader};
pub use lifecycle::{LifecycleHooks, RenderOutcome, SkipReason};
pub use registry::{register_widgets, Registry, ELEMENT_NAME};
pub use widget::LineChartWidget;
