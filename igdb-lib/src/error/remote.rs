//! IGDB error payloads

use serde::Deserialize;

/// Keys an IGDB error object may carry.
const ERROR_KEYS: &[&str] = &["title", "status", "cause", "details"];

/// Error information reported by IGDB in a response body.
///
/// IGDB answers a rejected query with objects like
/// `{"title": "Syntax Error", "status": 400, "cause": "..."}`, usually wrapped
/// in a one-element array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorDetail {
    /// Short error title (e.g. "Syntax Error").
    pub title: String,
    /// Status code reported inside the payload.
    pub status: u16,
    /// Longer explanation, if any.
    #[serde(default)]
    pub cause: Option<String>,
}

impl RemoteErrorDetail {
    /// Creates a new error detail with the given title and status.
    pub fn new(title: impl Into<String>, status: u16) -> Self {
        Self {
            title: title.into(),
            status,
            cause: None,
        }
    }

    /// Sets the cause.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Looks for an IGDB error payload in a response body.
    ///
    /// Matches a top-level object, or an array whose elements are all error
    /// objects; the first one is returned. An error object has a string
    /// `title`, an integer `status` of at least 400 and no keys outside
    /// `title`, `status`, `cause` and `details`.
    pub fn detect(body: &str) -> Option<Self> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        match json {
            serde_json::Value::Object(_) => Self::from_json(&json),
            serde_json::Value::Array(items) if !items.is_empty() => {
                let mut details = items.iter().map(Self::from_json);
                let first = details.next()??;
                if details.all(|d| d.is_some()) {
                    Some(first)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn from_json(json: &serde_json::Value) -> Option<Self> {
        let obj = json.as_object()?;
        if obj.keys().any(|key| !ERROR_KEYS.contains(&key.as_str())) {
            return None;
        }
        let status = obj.get("status")?.as_u64()?;
        if status < 400 || !obj.get("title")?.is_string() {
            return None;
        }
        Self::deserialize(json).ok()
    }

    /// Extracts a gateway `{"message": ".."}` string, if the body is one.
    pub(crate) fn gateway_message(body: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        json.get("message")?.as_str().map(str::to_string)
    }
}

impl std::fmt::Display for RemoteErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "[{}] {}: {}", self.status, self.title, cause),
            None => write!(f, "[{}] {}", self.status, self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_wrapped_error() {
        let body = r#"[{"title": "Syntax Error", "status": 400, "cause": "Expecting a STRING"}]"#;
        let detail = RemoteErrorDetail::detect(body).unwrap();

        assert_eq!(detail.title, "Syntax Error");
        assert_eq!(detail.status, 400);
        assert_eq!(detail.cause.as_deref(), Some("Expecting a STRING"));
    }

    #[test]
    fn test_detect_bare_object() {
        let body = r#"{"title": "Authentication failed", "status": 403}"#;
        let detail = RemoteErrorDetail::detect(body).unwrap();
        assert_eq!(detail.to_string(), "[403] Authentication failed");
    }

    #[test]
    fn test_records_are_not_errors() {
        assert!(RemoteErrorDetail::detect(r#"[{"id": 1, "title": "x", "status": 0}]"#).is_none());
        assert!(RemoteErrorDetail::detect(r#"[{"id": 1, "name": "Zelda"}]"#).is_none());
        assert!(RemoteErrorDetail::detect("[]").is_none());
        assert!(RemoteErrorDetail::detect("not json").is_none());
    }

    #[test]
    fn test_record_with_title_and_status() {
        assert!(RemoteErrorDetail::detect(r#"[{"title": "Launch", "status": 2}]"#).is_none());
        assert!(RemoteErrorDetail::detect(r#"[{"title": "Beta", "status": 404, "slug": "beta"}]"#).is_none());
    }

    #[test]
    fn test_detect_with_details_key() {
        let body = r#"[{"title": "Syntax Error", "status": 400, "details": "line 1"}]"#;
        assert_eq!(RemoteErrorDetail::detect(body).unwrap().status, 400);
    }

    #[test]
    fn test_mixed_array_is_not_an_error() {
        let body = r#"[{"title": "Syntax Error", "status": 400}, {"name": "Zelda"}]"#;
        assert!(RemoteErrorDetail::detect(body).is_none());
    }

    #[test]
    fn test_gateway_message() {
        assert_eq!(
            RemoteErrorDetail::gateway_message(r#"{"message": "Authentication failed"}"#),
            Some("Authentication failed".to_string())
        );
        assert_eq!(RemoteErrorDetail::gateway_message("[]"), None);
    }
}
