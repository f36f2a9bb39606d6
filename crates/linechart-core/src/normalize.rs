// File: crates/linechart-core/src/normalize.rs
// Summary: Metadata normalizer; turns key → descriptor mappings into ordered descriptor lists.

use serde_json::{Map, Value};

use crate::model::{Descriptor, Metadata};

/// Ordered dimension and measure lists derived from [`Metadata`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Normalized {
    pub dimensions: Vec<Descriptor>,
    pub measures: Vec<Descriptor>,
}

impl Normalized {
    pub fn dimension(&self, key: &str) -> Option<&Descriptor> {
        self.dimensions.iter().find(|d| d.key == key)
    }

    pub fn measure(&self, key: &str) -> Option<&Descriptor> {
        self.measures.iter().find(|m| m.key == key)
    }
}

/// Normalize metadata into ordered lists.
///
/// Output order follows the mapping iteration order. Every entry carries the
/// mapping key; other fields pass through untouched. Empty mappings give empty
/// lists, nothing else can fail.
pub fn normalize(metadata: &Metadata) -> Normalized {
    Normalized {
        dimensions: descriptors(&metadata.dimensions),
        measures: descriptors(&metadata.main_structure_members),
    }
}

fn descriptors(map: &Map<String, Value>) -> Vec<Descriptor> {
    map.iter()
        .map(|(key, value)| {
            let mut fields = match value {
                Value::Object(obj) => obj.clone(),
                _ => Map::new(),
            };
            // the mapping key is authoritative
            fields.remove("key");
            Descriptor { key: key.clone(), fields }
        })
        .collect()
}
