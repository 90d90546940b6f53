//! Main IgdbClient

use std::sync::Arc;

use url::Url;

use crate::Response;
use crate::api::query;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::RemoteErrorDetail;
use crate::transport::HttpTransport;
use crate::transport::RawResponse;
use crate::transport::Transport;

/// Root of the IGDB v3 API.
pub const DEFAULT_ENDPOINT: &str = "https://api-v3.igdb.com/";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "IGDB_API_KEY";

/// Environment variable overriding the endpoint root.
pub const API_URL_ENV: &str = "IGDB_API_URL";

const ACCEPT: &str = "application/json; charset=UTF-8";

/// The client for the IGDB API.
///
/// Construct one per process and pass it to whatever needs it. It is cheap to
/// clone (uses `Arc` internally) and immutable after construction, so it can
/// be shared across threads.
///
/// # Example
///
/// ```ignore
/// use igdb_lib::IgdbClient;
/// use igdb_lib::api::query::FindQuery;
///
/// let client = IgdbClient::new("my-api-key")?;
/// let games = client.find(&FindQuery::new().entity("game").search("halo").limit(5))?;
/// ```
#[derive(Clone)]
pub struct IgdbClient {
    inner: Arc<IgdbClientInner>,
}

struct IgdbClientInner {
    api_key: String,
    endpoint: String,
    headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl IgdbClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> IgdbClientBuilder {
        IgdbClientBuilder::new()
    }

    /// Creates a client for the default endpoint.
    ///
    /// Fails with [`Error::Configuration`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client from `IGDB_API_KEY` and, if set, `IGDB_API_URL`.
    pub fn from_env() -> Result<Self, Error> {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder = builder.api_key(key);
        }
        if let Ok(endpoint) = std::env::var(API_URL_ENV) {
            builder = builder.endpoint(endpoint);
        }
        builder.build()
    }

    /// Sends one query to `command` and wraps the response.
    ///
    /// The body is the clauses joined with `"; "` plus a trailing `;`, or
    /// empty when there are no clauses. A non-success status or an IGDB error
    /// payload is returned as [`Error::Api`].
    pub fn call<S: AsRef<str>>(&self, command: &str, clauses: &[S]) -> Result<Response, Error> {
        let url = format!("{}{}", self.inner.endpoint, command.trim_start_matches('/'));
        let body = query::body(clauses);
        log::debug!("POST {} body={:?}", url, body);

        let headers: Vec<(&str, &str)> = self
            .inner
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        let raw = self.inner.transport.post(&url, &headers, body)?;
        log::trace!("HTTP {} from {}: {}", raw.status, url, raw.body);

        check(raw)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.inner.api_key
    }

    /// Returns the endpoint root, always ending in `/`.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Returns the headers sent with every request.
    pub fn headers(&self) -> &[(String, String)] {
        &self.inner.headers
    }
}

impl std::fmt::Debug for IgdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IgdbClient")
            .field("endpoint", &self.inner.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Turns a raw response into a [`Response`] or a typed error.
fn check(raw: RawResponse) -> Result<Response, Error> {
    let detail = RemoteErrorDetail::detect(&raw.body);

    if !raw.is_success() {
        let err = match detail {
            Some(detail) => ApiError::http_with_detail(raw.status, detail),
            None => {
                let message = RemoteErrorDetail::gateway_message(&raw.body)
                    .or_else(|| (!raw.body.trim().is_empty()).then(|| raw.body.clone()))
                    .or_else(|| {
                        reqwest::StatusCode::from_u16(raw.status)
                            .ok()
                            .and_then(|s| s.canonical_reason())
                            .map(str::to_string)
                    })
                    .unwrap_or_default();
                ApiError::http(raw.status, message)
            }
        };
        log::debug!("Request failed: {}", err);
        return Err(err.into());
    }

    if let Some(detail) = detail {
        return Err(ApiError::Remote {
            status: raw.status,
            detail: Box::new(detail),
        }
        .into());
    }

    Ok(Response::new(raw.body))
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`IgdbClient`].
///
/// # Required Fields
///
/// - `api_key` - checked by [`build`](Self::build), not at compile time, so a
///   key read from configuration can be passed straight through.
///
/// # Example
///
/// ```ignore
/// let client = IgdbClient::builder()
///     .api_key(key)
///     .endpoint("https://api-v3.igdb.com/")
///     .build()?;
/// ```
#[derive(Default)]
pub struct IgdbClientBuilder {
    api_key: Option<String>,
    endpoint: Option<String>,
    http_client: Option<reqwest::blocking::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl IgdbClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key sent in the `user-key` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the endpoint root.
    ///
    /// Defaults to [`DEFAULT_ENDPOINT`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client that does not follow redirects is created.
    pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the transport, replacing the HTTP client entirely.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the [`IgdbClient`].
    ///
    /// Fails with [`Error::Configuration`] if no API key was supplied or the
    /// endpoint is not an http(s) URL, or carries a query or fragment. No
    /// request is made.
    pub fn build(self) -> Result<IgdbClient, Error> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::configuration("You must set an API key."))?;

        let endpoint = normalize_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(HttpTransport::with_client(client)),
            (None, None) => Arc::new(HttpTransport::new().map_err(|e| {
                Error::configuration(format!("Failed to build HTTP client: {}", e))
            })?),
        };

        let headers = vec![
            ("Accept".to_string(), ACCEPT.to_string()),
            ("user-key".to_string(), api_key.clone()),
        ];

        Ok(IgdbClient {
            inner: Arc::new(IgdbClientInner {
                api_key,
                endpoint,
                headers,
                transport,
            }),
        })
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<String, Error> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| Error::configuration(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration(format!(
            "Invalid endpoint '{}': expected an http(s) URL",
            endpoint
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::configuration(format!(
            "Invalid endpoint '{}': query strings and fragments are not allowed",
            endpoint
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    fn client_with(fake: &Arc<FakeTransport>) -> IgdbClient {
        IgdbClient::builder()
            .api_key("secret")
            .transport(Arc::clone(fake))
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_api_key() {
        let fake = Arc::new(FakeTransport::default());
        let err = IgdbClient::builder()
            .transport(Arc::clone(&fake))
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::Configuration(_)));
        assert!(fake.requests().is_empty());
    }

    #[test]
    fn test_empty_api_key() {
        assert!(matches!(IgdbClient::new("  "), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = IgdbClient::builder()
            .api_key("secret")
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = IgdbClient::builder()
            .api_key("secret")
            .endpoint("ftp://example.com/")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_endpoint_gets_trailing_slash() {
        let client = IgdbClient::builder()
            .api_key("secret")
            .endpoint("http://localhost:8080/v4")
            .transport(FakeTransport::default())
            .build()
            .unwrap();

        assert_eq!(client.endpoint(), "http://localhost:8080/v4/");
    }

    #[test]
    fn test_endpoint_with_query_or_fragment() {
        for endpoint in ["https://h/v4?x=1", "https://h/v4#top", "https://h/v4/?"] {
            let err = IgdbClient::builder()
                .api_key("secret")
                .endpoint(endpoint)
                .transport(FakeTransport::default())
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "{endpoint}");
        }
    }

    #[test]
    fn test_headers() {
        let client = client_with(&Arc::new(FakeTransport::default()));

        assert_eq!(client.api_key(), "secret");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(
            client.headers(),
            [
                ("Accept".to_string(), "application/json; charset=UTF-8".to_string()),
                ("user-key".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let client = client_with(&Arc::new(FakeTransport::default()));
        assert!(!format!("{:?}", client).contains("secret"));
    }

    #[test]
    fn test_call_request_shape() {
        let fake = Arc::new(FakeTransport::replying(200, "[]"));
        let client = client_with(&fake);

        client.call("game/", &["fields name", "limit 1"]).unwrap();

        let request = &fake.requests()[0];
        assert_eq!(request.url, "https://api-v3.igdb.com/game/");
        assert_eq!(request.body, "fields name; limit 1;");
        assert!(request.headers.contains(&("user-key".to_string(), "secret".to_string())));
        assert!(request.headers.contains(&(
            "Accept".to_string(),
            "application/json; charset=UTF-8".to_string()
        )));
    }

    #[test]
    fn test_call_without_clauses() {
        let fake = Arc::new(FakeTransport::replying(200, "[]"));
        client_with(&fake).call::<&str>("game/meta", &[]).unwrap();

        assert_eq!(fake.requests()[0].body, "");
    }

    #[test]
    fn test_call_returns_raw_text() {
        let fake = Arc::new(FakeTransport::replying(200, r#"[{"id": 3}]"#));
        let response = client_with(&fake).call("game/", &["fields id"]).unwrap();

        assert_eq!(response.text(), r#"[{"id": 3}]"#);
    }

    #[test]
    fn test_http_error_with_detail() {
        let fake = Arc::new(FakeTransport::replying(
            400,
            r#"[{"title": "Syntax Error", "status": 400, "cause": "Missing `;` at end of query"}]"#,
        ));
        let err = client_with(&fake).call("game/", &["fields *"]).unwrap_err();

        let api = err.as_api().unwrap();
        assert_eq!(api.status_code(), Some(400));
        assert_eq!(api.remote_detail().unwrap().title, "Syntax Error");
    }

    #[test]
    fn test_http_error_gateway_message() {
        let fake = Arc::new(FakeTransport::replying(403, r#"{"message": "Authentication failed"}"#));
        let err = client_with(&fake).call("game/", &["fields *"]).unwrap_err();

        match err {
            Error::Api(ApiError::Http { status, message, detail }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Authentication failed");
                assert!(detail.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_redirect_is_an_error() {
        let fake = Arc::new(FakeTransport::replying(301, ""));
        let err = client_with(&fake).call("game/", &["fields *"]).unwrap_err();

        match err {
            Error::Api(ApiError::Http { status, message, .. }) => {
                assert_eq!(status, 301);
                assert_eq!(message, "Moved Permanently");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_payload_in_success_body() {
        let fake = Arc::new(FakeTransport::replying(
            200,
            r#"[{"title": "Invalid Field", "status": 400}]"#,
        ));
        let err = client_with(&fake).call("game/", &["fields nope"]).unwrap_err();

        assert!(matches!(
            err.as_api(),
            Some(ApiError::Remote { status: 200, .. })
        ));
    }

    #[test]
    fn test_success_body_with_title_and_status_fields() {
        let fake = Arc::new(FakeTransport::replying(200, r#"[{"title": "Launch", "status": 2}]"#));
        let response = client_with(&fake)
            .call("pulse/", &["fields title,status", "exclude id"])
            .unwrap();

        let records = response.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get_int("status").unwrap(), Some(2));
    }

    #[test]
    fn test_transport_failure_surfaces() {
        let fake = Arc::new(FakeTransport::default());
        let err = client_with(&fake).call("game/", &["fields *"]).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Parse { .. })));
    }
}
