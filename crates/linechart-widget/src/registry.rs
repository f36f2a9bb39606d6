// File: crates/linechart-widget/src/registry.rs
// Summary: Element registry keyed by custom-element name; each name may be defined once.

use std::collections::BTreeMap;

use tracing::info;

use crate::error::{Result, WidgetError};
use crate::handle::BackendLoader;
use crate::widget::LineChartWidget;

/// Name under which the line chart widget is registered.
pub const ELEMENT_NAME: &str = "com-sap-sample-echarts-line_chart";

type Factory<T> = Box<dyn Fn() -> T>;

pub struct Registry<T> {
    factories: BTreeMap<String, Factory<T>>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// Register `factory` under `name`.
    ///
    /// Names must start with a lowercase ASCII letter and contain a hyphen.
    pub fn define(&mut self, name: &str, factory: impl Fn() -> T + 'static) -> Result<()> {
        if !is_valid_name(name) {
            return Err(WidgetError::InvalidName(name.to_string()));
        }
        if self.factories.contains_key(name) {
            return Err(WidgetError::AlreadyDefined(name.to_string()));
        }
        self.factories.insert(name.to_string(), Box::new(factory));
        info!(element = name, "element defined");
        Ok(())
    }

    /// New instance of the element registered as `name`.
    pub fn create(&self, name: &str) -> Result<T> {
        self.factories
            .get(name)
            .map(|f| f())
            .ok_or_else(|| WidgetError::UnknownElement(name.to_string()))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase()) && name.contains('-')
}

/// Define the line chart widget under [`ELEMENT_NAME`].
///
/// `loader` is called once per created widget to produce its backend loader.
pub fn register_widgets<L, F>(registry: &mut Registry<LineChartWidget<L>>, loader: F) -> Result<()>
where
    L: BackendLoader,
    F: Fn() -> L + 'static,
{
    registry.define(ELEMENT_NAME, move || LineChartWidget::new(loader()))
}
