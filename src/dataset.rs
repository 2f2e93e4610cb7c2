//! Query results handed over by the host and the single measurement a tile grades.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{Result, TileError};

/// A field (dimension or measure) described by the query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fields {
    #[serde(default)]
    pub measures: Vec<Field>,
    #[serde(default)]
    pub dimensions: Vec<Field>,
}

/// A single data cell. A missing `value` decodes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
}

/// One row of the result, keyed by field name.
pub type Row = HashMap<String, Cell>;

/// Field metadata plus data rows, as supplied by the host query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub fields: Fields,
    #[serde(default)]
    pub data: Vec<Row>,
}

/// The value a tile grades, with the measure it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub measure: String,
    pub value: f64,
    /// `true` when the cell was missing or null and 0 was used instead.
    pub substituted: bool,
}

impl Measurement {
    /// Reads the first measure of the first row.
    ///
    /// A missing row, missing cell or `null` value grades as 0.
    ///
    /// # Errors
    ///
    /// - [`TileError::InsufficientData`] when the result has no measure at all.
    /// - [`TileError::InvalidInput`] when the cell holds a non-numeric value.
    pub fn from_response(response: &QueryResponse) -> Result<Self> {
        let field = response
            .fields
            .measures
            .first()
            .ok_or(TileError::InsufficientData)?;

        let value = response
            .data
            .first()
            .and_then(|row| row.get(&field.name))
            .map(|cell| &cell.value);

        match value {
            None | Some(Value::Null) => {
                warn!(measure = %field.name, "Measure value missing, substituting 0");
                Ok(Self {
                    measure: field.name.clone(),
                    value: 0.0,
                    substituted: true,
                })
            }
            Some(Value::Number(n)) => {
                let value = n.as_f64().ok_or_else(|| {
                    TileError::InvalidInput(format!(
                        "measure {} holds a number outside f64 range: {}",
                        field.name, n
                    ))
                })?;
                debug!(measure = %field.name, value, "Measure value read");
                Ok(Self {
                    measure: field.name.clone(),
                    value,
                    substituted: false,
                })
            }
            Some(other) => Err(TileError::InvalidInput(format!(
                "measure {} holds a non-numeric value: {}",
                field.name, other
            ))),
        }
    }
}
