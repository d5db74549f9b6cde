use std::collections::BTreeMap;

use unkey_client::models::Meta;
use unkey_tfsdk::{Attr, TfList, TfString};

use crate::error::{Error, Result};

/// Known list elements, or `None` when the list is null or unknown.
#[must_use]
pub fn string_list_to_vec(list: &TfList<String>) -> Option<Vec<String>> {
    list.known().cloned()
}

/// List attribute from API values. An empty slice becomes null.
#[must_use]
pub fn vec_to_string_list(values: &[String]) -> TfList<String> {
    if values.is_empty() {
        Attr::Null
    } else {
        Attr::Known(values.to_vec())
    }
}

/// Parses a JSON object string.
///
/// Null and unknown yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`Error::Decoding`] when the string is not valid JSON or is JSON
/// but not an object.
pub fn string_to_map(value: &TfString) -> Result<Option<Meta>> {
    let Some(raw) = value.known_str() else {
        return Ok(None);
    };
    serde_json::from_str::<Meta>(raw)
        .map(Some)
        .map_err(Error::Decoding)
}

/// Serialises metadata into a JSON string attribute.
///
/// Absent or empty maps become null, never `"{}"`. Top-level keys are
/// written in sorted order so equal maps always produce equal strings.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if serialisation fails.
pub fn map_to_string(map: Option<&Meta>) -> Result<TfString> {
    match map {
        Some(map) if !map.is_empty() => {
            let sorted: BTreeMap<&String, &serde_json::Value> = map.iter().collect();
            serde_json::to_string(&sorted)
                .map(Attr::Known)
                .map_err(Error::Encoding)
        }
        _ => Ok(Attr::Null),
    }
}
