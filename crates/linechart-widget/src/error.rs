// File: crates/linechart-widget/src/error.rs
// Summary: Widget-level errors: chart failures, backend bootstrap, registry misuse, bad bindings.

use linechart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// Building or painting the chart failed; nothing was painted.
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to load drawing backend: {0:#}")]
    BackendLoad(anyhow::Error),

    #[error("element name `{0}` is already defined")]
    AlreadyDefined(String),

    #[error("`{0}` is not a valid element name")]
    InvalidName(String),

    #[error("no element registered as `{0}`")]
    UnknownElement(String),

    #[error("invalid data binding: {0}")]
    Binding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
