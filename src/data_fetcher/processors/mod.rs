//! Reshapes upstream JSON documents into the flattened rows served to clients.

mod scorers;
mod standings;

pub use scorers::to_scorers;
pub use standings::to_standings;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Looks up a list-valued field of a JSON object.
///
/// A missing or null field is an empty list. Anything else that is not a list,
/// or a document that is not an object, is malformed.
fn list_field<'a>(document: &'a Value, key: &str, context: &str) -> Result<&'a [Value], AppError> {
    let object = document.as_object().ok_or_else(|| {
        AppError::malformed_upstream_data(format!(
            "{context}: expected an object, found {}",
            describe(document)
        ))
    })?;

    match object.get(key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(AppError::malformed_upstream_data(format!(
            "{context}.{key}: expected a list, found {}",
            describe(other)
        ))),
    }
}

/// Deserializes every row and converts it, keeping upstream order.
/// The first row that does not match `T` fails the whole document.
fn map_rows<T, R>(rows: &[Value], context: &str) -> Result<Vec<R>, AppError>
where
    T: DeserializeOwned,
    R: From<T>,
{
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            T::deserialize(row).map(R::from).map_err(|e| {
                AppError::malformed_upstream_data(format!("{context}[{index}]: {e}"))
            })
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
