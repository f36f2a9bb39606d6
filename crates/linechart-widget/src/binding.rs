// File: crates/linechart-widget/src/binding.rs
// Summary: Host data binding: query state, result rows and their metadata.

use linechart_core::{Metadata, Row};
use serde::{Deserialize, Serialize};

/// The only binding state that renders.
pub const SUCCESS: &str = "success";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataBinding {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub data: Vec<Row>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl DataBinding {
    /// A binding in the `success` state.
    pub fn success(metadata: Metadata, data: Vec<Row>) -> Self {
        Self { state: SUCCESS.to_string(), data, metadata }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn is_success(&self) -> bool {
        self.state == SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_document() {
        let b = DataBinding::from_json(
            r#"{
                "state": "success",
                "data": [{ "d": {"label": "A", "raw": "a"}, "m": {"label": "1", "raw": 1} }],
                "metadata": { "dimensions": {"d": {}}, "mainStructureMembers": {"m": {}} }
            }"#,
        )
        .unwrap();
        assert!(b.is_success());
        assert_eq!(b.data.len(), 1);
        assert_eq!(b.data[0].get("m").and_then(|c| c.number()), Some(1.0));
    }

    #[test]
    fn loading_state_is_not_success() {
        let b = DataBinding::from_json(r#"{ "state": "loading" }"#).unwrap();
        assert!(!b.is_success());
        assert!(b.data.is_empty());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(DataBinding::from_json(r#"{ "state": "success", "data": [{ "m": 5 }] }"#).is_err());
    }
}
