//! Lenient deserializers for fields older UI builds send with loose types

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field that also accepts numbers and booleans (`55` becomes `"55"`).
///
/// Objects and arrays are not text and are dropped.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
