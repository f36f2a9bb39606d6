// File: crates/linechart-core/src/series.rs
// Summary: Category and series extraction from result rows.
// Notes:
// - `data[i]` of every series and `categories[i]` always refer to row `i`.
// - Rows are validated up front so a broken row aborts before any geometry exists.

use crate::error::{ChartError, KeyKind, Result};
use crate::model::{Descriptor, Row};

/// Separator between dimension labels in a category label.
pub const CATEGORY_SEPARATOR: &str = "/";

/// One line: the raw values of a measure, in row order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub key: String,
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), data: Vec::new() }
    }

    pub fn with_data(key: impl Into<String>, data: Vec<f64>) -> Self {
        Self { key: key.into(), data }
    }

    /// Largest value, or `None` for an empty series.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }
}

/// Categories and series extracted from one row set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extracted {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

/// Check every row holds a cell for every dimension and measure key.
///
/// Reports the first gap in row order, dimensions before measures.
pub fn validate_rows(dimensions: &[Descriptor], measures: &[Descriptor], rows: &[Row]) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        let declared = dimensions
            .iter()
            .map(|d| (KeyKind::Dimension, d))
            .chain(measures.iter().map(|m| (KeyKind::Measure, m)));
        for (kind, desc) in declared {
            if !row.contains(&desc.key) {
                return Err(ChartError::MissingCell { row: i, kind, key: desc.key.clone() });
            }
        }
    }
    Ok(())
}

/// Category label of every row: dimension labels joined with `/`.
pub fn extract_categories(dimensions: &[Descriptor], rows: &[Row]) -> Result<Vec<String>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let labels = dimensions
                .iter()
                .map(|d| {
                    row.get(&d.key).map(|c| c.label.as_str()).ok_or_else(|| ChartError::MissingCell {
                        row: i,
                        kind: KeyKind::Dimension,
                        key: d.key.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(labels.join(CATEGORY_SEPARATOR))
        })
        .collect()
}

/// One series per measure, values read from each cell's `raw` without coercion.
pub fn extract_series(measures: &[Descriptor], rows: &[Row]) -> Result<Vec<Series>> {
    measures
        .iter()
        .map(|m| {
            let mut series = Series::new(m.key.clone());
            series.data.reserve(rows.len());
            for (i, row) in rows.iter().enumerate() {
                let cell = row.get(&m.key).ok_or_else(|| ChartError::MissingCell {
                    row: i,
                    kind: KeyKind::Measure,
                    key: m.key.clone(),
                })?;
                let value = cell.number().ok_or_else(|| ChartError::NonNumericCell {
                    row: i,
                    key: m.key.clone(),
                    raw: cell.raw.to_string(),
                })?;
                series.data.push(value);
            }
            Ok(series)
        })
        .collect()
}

/// Validate, then extract categories and series.
pub fn extract(dimensions: &[Descriptor], measures: &[Descriptor], rows: &[Row]) -> Result<Extracted> {
    validate_rows(dimensions, measures, rows)?;
    Ok(Extracted {
        categories: extract_categories(dimensions, rows)?,
        series: extract_series(measures, rows)?,
    })
}

/// Upper bound of the value domain: max over all series, never below 0.
pub fn value_max(series: &[Series]) -> f64 {
    series.iter().filter_map(Series::max).fold(0.0, f64::max)
}
