//! Dynamically typed input
//!
//! Times arriving as `serde_json::Value` (`hmscalc sum --from-json`, other
//! tools) are checked here. The static API cannot be handed a non-string or a
//! non-sequence, so these are the paths that report those mistakes.

use serde_json::Value;

use crate::domain::value_objects::HmsTime;
use crate::error::{HmsError, HmsResult};

/// JSON type name used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Sum a JSON array of time strings.
///
/// A non-array input is [`HmsError::NotIterable`]; a non-string element is
/// [`HmsError::NotHmsTime`]; a malformed string element is
/// [`HmsError::InvalidTimeFormat`]; a total outside the `i64` range is
/// [`HmsError::Overflow`].
pub fn sum(input: &Value) -> HmsResult<HmsTime> {
    let items = input.as_array().ok_or_else(|| HmsError::NotIterable {
        type_name: type_name(input).to_string(),
    })?;

    let times = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) => HmsTime::parse(text),
            other => Err(HmsError::NotHmsTime {
                index,
                type_name: type_name(other).to_string(),
            }),
        })
        .collect::<HmsResult<Vec<_>>>()?;

    HmsTime::checked_sum(times)
}
