//! Value enum for dynamic field values

use super::Record;

/// A dynamic value decoded from an IGDB response.
///
/// Every JSON object becomes a [`Record`], arrays stay ordered sequences and
/// scalars are kept as-is.
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true/false | `Bool` |
/// | integer fitting `i64` | `Int` |
/// | any other number | `Float` |
/// | string | `String` |
/// | object | `Record` |
/// | array | `Array` |
///
/// # Example
///
/// ```
/// use igdb_lib::model::Value;
///
/// let name = Value::from("Zelda");
/// let rating = Value::from(86.5);
/// let empty = Value::Null;
/// assert_eq!(name.as_str(), Some("Zelda"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
    /// Nested object.
    Record(Record),
    /// Ordered sequence of values.
    Array(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Record(_) => "record",
            Value::Array(_) => "array",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Consumes the value and returns the record, if this is one.
    pub fn into_record(self) -> Option<Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Looks up a field when this value is a record.
    ///
    /// Returns `None` for missing fields and for non-record values, so lookups
    /// can be chained: `value.get("cover").and_then(|c| c.get("url"))`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_record().and_then(|r| r.get(field))
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Converts parsed JSON, turning every object into a [`Record`].
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Record(Record::from_json_map(obj)),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::from(n),
            Value::Float(n) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
            Value::Record(r) => serde_json::Value::Object(
                r.fields
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(Value::from(serde_json::json!(true)), Value::Bool(true));
        assert_eq!(Value::from(serde_json::json!(42)), Value::Int(42));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(serde_json::json!("x")), Value::from("x"));
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let value = Value::from(serde_json::json!(u64::MAX));
        assert_eq!(value.type_name(), "float");
    }

    #[test]
    fn test_nested_objects_become_records() {
        let value = Value::from(serde_json::json!({
            "id": 1,
            "cover": {"id": 7, "url": "//images/7.jpg"},
            "genres": [5, 12]
        }));

        let cover = value.get("cover").unwrap();
        assert!(cover.as_record().is_some());
        assert_eq!(cover.get("url").and_then(Value::as_str), Some("//images/7.jpg"));
        assert_eq!(
            value.get("genres").and_then(Value::as_array),
            Some(&[Value::Int(5), Value::Int(12)][..])
        );
    }

    #[test]
    fn test_get_on_non_record() {
        assert_eq!(Value::Int(3).get("id"), None);
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    }

    #[test]
    fn test_back_to_json() {
        let json = serde_json::json!({"id": 1, "tags": [1, "a", null], "nested": {"ok": false}});
        let value = Value::from(json.clone());
        assert_eq!(serde_json::Value::from(value), json);
    }
}
