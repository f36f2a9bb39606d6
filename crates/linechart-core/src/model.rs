// File: crates/linechart-core/src/model.rs
// Summary: Result-set model: metadata descriptors, rows and cells as supplied by the host.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata block of a data binding: two key → descriptor mappings.
///
/// Maps are `serde_json::Map` with `preserve_order`, so iteration follows the
/// order the host wrote them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub dimensions: Map<String, Value>,
    #[serde(default, rename = "mainStructureMembers")]
    pub main_structure_members: Map<String, Value>,
}

/// One dimension or measure, with its key attached.
///
/// Fields other than `key` are opaque and passed through unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub key: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Descriptor {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), fields: Map::new() }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// `label` if present, else `description`, else the key.
    pub fn display_name(&self) -> &str {
        ["label", "description"]
            .iter()
            .find_map(|f| self.fields.get(*f).and_then(Value::as_str))
            .unwrap_or(self.key.as_str())
    }
}

/// A single result cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub raw: Value,
}

impl Cell {
    pub fn new(label: impl Into<String>, raw: impl Into<Value>) -> Self {
        Self { label: label.into(), raw: raw.into() }
    }

    /// Numeric raw value, if the cell holds a JSON number.
    pub fn number(&self) -> Option<f64> {
        self.raw.as_f64()
    }
}

/// One result row: key → cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub HashMap<String, Cell>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, cell: Cell) -> Self {
        self.0.insert(key.into(), cell);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl FromIterator<(String, Cell)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}
