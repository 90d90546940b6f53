//! Dynamic response record

use std::collections::HashMap;

use super::Value;
use crate::error::FieldError;

/// A JSON object from an IGDB response.
///
/// Records hold field values as a `HashMap<String, Value>`, giving
/// attribute-style access by lookup. Typed getter methods provide safe access
/// with proper error handling.
///
/// # Example
///
/// ```
/// use igdb_lib::model::Record;
///
/// let record = Record::new()
///     .set("id", 1942)
///     .set("name", "The Witcher 3");
///
/// assert_eq!(record.get_string("name").unwrap(), Some("The Witcher 3"));
/// assert_eq!(record.id(), Some(1942));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a parsed JSON object, converting nested objects too.
    pub(crate) fn from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
        }
    }

    // =========================================================================
    // Well-known fields
    // =========================================================================

    /// Returns the `id` field, if present and a non-negative integer.
    pub fn id(&self) -> Option<u64> {
        self.fields
            .get("id")
            .and_then(Value::as_i64)
            .and_then(|id| u64::try_from(id).ok())
    }

    /// Returns the `name` field, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a nested Record field value.
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "record",
                other.type_name(),
            )),
        }
    }

    /// Gets an array field value.
    pub fn get_array(&self, field: &str) -> Result<Option<&[Value]>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "array",
                other.type_name(),
            )),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new()
            .set("id", 1020)
            .set("name", "Grand Theft Auto V")
            .set("rating", 90.5)
            .set("total_rating_count", 3000)
            .set("storyline", Value::Null)
            .set("cover", Record::new().set("id", 7).set("url", "//c.jpg"))
            .set("genres", vec![Value::Int(31), Value::Int(5)])
            .set("category_visible", true)
    }

    #[test]
    fn test_typed_getters() {
        let record = sample();

        assert_eq!(record.get_string("name").unwrap(), Some("Grand Theft Auto V"));
        assert_eq!(record.get_int("total_rating_count").unwrap(), Some(3000));
        assert_eq!(record.get_float("rating").unwrap(), Some(90.5));
        assert_eq!(record.get_float("total_rating_count").unwrap(), Some(3000.0));
        assert_eq!(record.get_bool("category_visible").unwrap(), Some(true));
        assert_eq!(record.get_array("genres").unwrap().map(<[Value]>::len), Some(2));
        assert_eq!(record.get_record("cover").unwrap().and_then(Record::id), Some(7));
    }

    #[test]
    fn test_null_is_ok_none() {
        assert_eq!(sample().get_string("storyline").unwrap(), None);
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            sample().get_string("summary"),
            Err(FieldError::missing("summary"))
        );
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            sample().get_int("name"),
            Err(FieldError::type_mismatch("name", "int", "string"))
        );
    }

    #[test]
    fn test_well_known_fields() {
        let record = sample();
        assert_eq!(record.id(), Some(1020));
        assert_eq!(record.name(), Some("Grand Theft Auto V"));

        let negative = Record::new().set("id", -1);
        assert_eq!(negative.id(), None);
        assert_eq!(Record::new().name(), None);
    }
}
