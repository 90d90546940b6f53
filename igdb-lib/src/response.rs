//! Response wrapper

use crate::error::ApiError;
use crate::error::Error;
use crate::model::Record;
use crate::model::Value;

/// The raw body of a successful IGDB response.
///
/// Parsing is deferred until one of the views is requested, so the same
/// response can be read as a collection or as a single result.
///
/// # Example
///
/// ```
/// use igdb_lib::Response;
///
/// let response = Response::new(r#"[{"id": 1, "name": "Thief"}]"#);
/// let game = response.as_single_result()?.unwrap();
/// assert_eq!(game.get("name").and_then(|v| v.as_str()), Some("Thief"));
/// # Ok::<(), igdb_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    body: String,
}

impl Response {
    /// Wraps raw response text.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw response text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the raw text.
    pub fn into_text(self) -> String {
        self.body
    }

    /// Parses the body, converting every JSON object into a [`Record`].
    pub fn parse(&self) -> Result<Value, Error> {
        let json: serde_json::Value = serde_json::from_str(&self.body).map_err(|e| {
            ApiError::parse_with_body(format!("Invalid JSON response: {}", e), self.body.as_str())
        })?;
        Ok(Value::from(json))
    }

    /// Returns the collection view.
    ///
    /// A top-level array comes back as [`Value::Array`] in response order; any
    /// other top-level value is returned as parsed.
    pub fn as_collection(&self) -> Result<Value, Error> {
        self.parse()
    }

    /// Returns the single-result view.
    ///
    /// - `[]` gives `Ok(None)`.
    /// - `[x]` gives `Ok(Some(x))`.
    /// - A longer array is [`ApiError::UnexpectedCount`].
    /// - Any other top-level value is returned as parsed.
    pub fn as_single_result(&self) -> Result<Option<Value>, Error> {
        match self.parse()? {
            Value::Array(mut items) => match items.len() {
                0 => Ok(None),
                1 => Ok(items.pop()),
                found => Err(ApiError::UnexpectedCount { found }.into()),
            },
            other => Ok(Some(other)),
        }
    }

    /// Returns the body as a list of records.
    ///
    /// The body must be an array of objects.
    pub fn records(&self) -> Result<Vec<Record>, Error> {
        let items = match self.parse()? {
            Value::Array(items) => items,
            other => {
                return Err(ApiError::parse_with_body(
                    format!("Expected an array of records, got {}", other.type_name()),
                    self.body.as_str(),
                )
                .into());
            }
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::Record(record) => Ok(record),
                other => Err(Error::from(ApiError::parse_with_body(
                    format!("Expected a record, got {}", other.type_name()),
                    self.body.as_str(),
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(value: &Value) -> Vec<i64> {
        value
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.get("id")?.as_i64())
            .collect()
    }

    #[test]
    fn test_single_result_empty() {
        assert_eq!(Response::new("[]").as_single_result().unwrap(), None);
    }

    #[test]
    fn test_single_result_one() {
        let value = Response::new(r#"[{"id": 1}]"#).as_single_result().unwrap().unwrap();
        assert_eq!(value.get("id"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_single_result_many() {
        let err = Response::new(r#"[{"id": 1}, {"id": 2}]"#)
            .as_single_result()
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Api(ApiError::UnexpectedCount { found: 2 })
        ));
        assert_eq!(err.to_string(), "Expected single result, found 2");
    }

    #[test]
    fn test_single_result_non_array() {
        let value = Response::new(r#"{"id": 9}"#).as_single_result().unwrap().unwrap();
        assert_eq!(value.as_record().and_then(Record::id), Some(9));
    }

    #[test]
    fn test_collection_keeps_order() {
        let value = Response::new(r#"[{"id": 1}, {"id": 2}]"#).as_collection().unwrap();
        assert_eq!(ids(&value), [1, 2]);
    }

    #[test]
    fn test_collection_non_array() {
        let value = Response::new("42").as_collection().unwrap();
        assert_eq!(value, Value::Int(42));
    }

    #[test]
    fn test_collection_empty() {
        let value = Response::new("[]").as_collection().unwrap();
        assert_eq!(value, Value::Array(Vec::new()));
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let body = r#"[{"id": 1, "cover": {"id": 3, "image_id": "abc"}, "genres": [{"id": 5}, {"id": 12}]}]"#;
        let value = Response::new(body).as_single_result().unwrap().unwrap();

        let cover = value.get("cover").and_then(Value::as_record).unwrap();
        assert_eq!(cover.get_string("image_id").unwrap(), Some("abc"));
        assert_eq!(ids(value.get("genres").unwrap()), [5, 12]);
    }

    #[test]
    fn test_invalid_json() {
        let err = Response::new("<html>").as_collection().unwrap_err();
        match err {
            Error::Api(ApiError::Parse { body, .. }) => assert_eq!(body.as_deref(), Some("<html>")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_records() {
        let records = Response::new(r#"[{"id": 1}, {"id": 2}]"#).records().unwrap();
        assert_eq!(records.iter().filter_map(Record::id).collect::<Vec<_>>(), [1, 2]);

        assert!(Response::new("[1]").records().is_err());
        assert!(Response::new(r#"{"id": 1}"#).records().is_err());
    }
}
