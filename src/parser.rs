//! JSON decoding of host payloads.

use serde_json::{Map, Value};
use std::path::Path;

use crate::dataset::QueryResponse;
use crate::error::{Result, TileError};
use crate::tile::RawConfig;
use crate::tile::options::OptionKey;

/// Decodes a host configuration mapping from raw JSON bytes.
///
/// # Errors
///
/// Returns [`TileError::Parse`] if the bytes are not a JSON object and
/// [`TileError::InvalidInput`], naming the option, if a recognized option
/// holds a value of the wrong type.
pub fn parse_config(bytes: &[u8]) -> Result<RawConfig> {
    let map: Map<String, Value> = serde_json::from_slice(bytes)?;

    for key in OptionKey::ALL {
        if let Some(value) = map.get(key.name()) {
            if !key.kind().accepts(value) {
                return Err(TileError::InvalidInput(format!(
                    "option {} expects a {} value, got {}",
                    key.name(),
                    key.kind().as_str(),
                    value
                )));
            }
        }
    }

    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Decodes a query result from raw JSON bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON for a [`QueryResponse`].
pub fn parse_response(bytes: &[u8]) -> Result<QueryResponse> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads and decodes a configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<RawConfig> {
    parse_config(&std::fs::read(path)?)
}

/// Reads and decodes a query result file.
pub fn load_response(path: impl AsRef<Path>) -> Result<QueryResponse> {
    parse_response(&std::fs::read(path)?)
}
