//! List-shape guard for collection responses.
//!
//! Every list implementation funnels its decoded body through
//! [`decode_list`], so a payload that is not an array of records never
//! reaches the controller as a partial result.

use crate::{error::Result, Error, UserRecord};
use serde_json::Value;

/// Decode a list response body.
///
/// Fails with [`Error::InvalidResponseShape`] unless `value` is an array whose
/// every element decodes as a [`UserRecord`].
pub fn decode_list(value: Value) -> Result<Vec<UserRecord>> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(Error::InvalidResponseShape(format!(
                "expected an array, got {}",
                describe(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let record = serde_json::from_value(element).map_err(|e| {
            Error::InvalidResponseShape(format!("element {index} is not a user record: {e}"))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Decode raw body bytes, treating non-JSON as a shape failure.
pub fn decode_list_bytes(body: &[u8]) -> Result<Vec<UserRecord>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::InvalidResponseShape(format!("body is not valid JSON: {e}")))?;
    decode_list(value)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
