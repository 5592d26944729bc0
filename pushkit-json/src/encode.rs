//! Value tree to JSON text

use serde_json::{Map, Number, Value};

use crate::error::EncodeError;
use crate::options::{EncodeOptions, MAX_DEPTH};
use crate::value::{JsonNumber, JsonValue};

/// Encode `value` as JSON text.
///
/// The root must be an array or object unless `options.accept_fragments`
/// is set. NaN and the infinities are rejected wherever they appear, as is
/// nesting deeper than [`MAX_DEPTH`]; no partial output is ever returned.
pub fn encode(value: &JsonValue, options: EncodeOptions) -> Result<String, EncodeError> {
    let tree = prepare(value, options)?;
    let text = if options.writing.pretty_print {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    Ok(text)
}

/// Same as [`encode`], returning the UTF-8 bytes of the text.
pub fn encode_to_vec(value: &JsonValue, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let tree = prepare(value, options)?;
    let bytes = if options.writing.pretty_print {
        serde_json::to_vec_pretty(&tree)?
    } else {
        serde_json::to_vec(&tree)?
    };
    Ok(bytes)
}

fn prepare(value: &JsonValue, options: EncodeOptions) -> Result<Value, EncodeError> {
    if !options.accept_fragments && !value.is_collection() {
        return Err(EncodeError::FragmentNotAllowed { kind: value.kind() });
    }
    let mut path = Vec::new();
    to_serde(value, options.writing.sorted_keys, &mut path, 0)
}

/// `depth` counts the collections enclosing `value`.
fn to_serde(
    value: &JsonValue,
    sorted_keys: bool,
    path: &mut Vec<String>,
    depth: usize,
) -> Result<Value, EncodeError> {
    if value.is_collection() && depth >= MAX_DEPTH {
        return Err(EncodeError::DepthLimitExceeded {
            path: pointer(path),
            limit: MAX_DEPTH,
        });
    }
    let converted = match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(JsonNumber::Int(i)) => Value::from(*i),
        JsonValue::Number(JsonNumber::Float(f)) => match Number::from_f64(*f) {
            Some(n) => Value::Number(n),
            None => {
                return Err(EncodeError::NonFiniteNumber {
                    path: pointer(path),
                    value: *f,
                })
            }
        },
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                out.push(to_serde(item, sorted_keys, path, depth + 1)?);
                path.pop();
            }
            Value::Array(out)
        }
        JsonValue::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            if sorted_keys {
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            }
            let mut out = Map::with_capacity(entries.len());
            for (key, item) in entries {
                path.push(key.clone());
                let converted = to_serde(item, sorted_keys, path, depth + 1)?;
                path.pop();
                out.insert(key.clone(), converted);
            }
            Value::Object(out)
        }
    };
    Ok(converted)
}

/// RFC 6901 pointer for error reporting.
fn pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    path.iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        acc
    })
}
