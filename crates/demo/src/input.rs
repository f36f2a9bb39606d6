// File: crates/demo/src/input.rs
// Summary: Load a data binding from a host JSON document or a headed CSV file.

use std::path::Path;

use anyhow::{Context, Result};
use linechart_core::{Cell, Metadata, Row};
use linechart_widget::DataBinding;
use serde_json::{Map, Value};

pub fn load_binding(path: &Path, dims: Option<&[String]>) -> Result<DataBinding> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            DataBinding::from_json(&text).with_context(|| format!("parsing {}", path.display()))
        }
        "csv" => {
            let rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_path(path)
                .with_context(|| format!("opening {}", path.display()))?;
            binding_from_csv(rdr, dims)
        }
        other => anyhow::bail!("unsupported input extension `{other}` (expected .json or .csv)"),
    }
}

/// Columns named in `dims` become dimensions; without `dims`, all-numeric
/// columns become measures and the rest dimensions.
pub fn binding_from_csv<R: std::io::Read>(mut rdr: csv::Reader<R>, dims: Option<&[String]>) -> Result<DataBinding> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

    let numeric = |col: usize| records.iter().all(|r| r.get(col).and_then(number).is_some());
    let is_dimension: Vec<bool> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| match dims {
            Some(d) => d.iter().any(|name| name == h),
            None => !numeric(i),
        })
        .collect();

    let mut metadata = Metadata::default();
    for (h, &dim) in headers.iter().zip(&is_dimension) {
        let target = if dim { &mut metadata.dimensions } else { &mut metadata.main_structure_members };
        target.insert(h.clone(), Value::Object(Map::new()));
    }

    let data = records
        .iter()
        .map(|rec| {
            headers
                .iter()
                .zip(rec.iter())
                .map(|(h, text)| (h.clone(), cell(text)))
                .collect::<Row>()
        })
        .collect::<Vec<_>>();

    tracing::info!(
        rows = data.len(),
        dimensions = metadata.dimensions.len(),
        measures = metadata.main_structure_members.len(),
        "loaded CSV"
    );
    Ok(DataBinding::success(metadata, data))
}

/// Finite numbers only; `NaN` and `inf` parse as `f64` but have no JSON form.
fn number(text: &str) -> Option<serde_json::Number> {
    text.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
}

fn cell(text: &str) -> Cell {
    match number(text) {
        Some(n) => Cell::new(text, Value::Number(n)),
        None => Cell::new(text, text),
    }
}
