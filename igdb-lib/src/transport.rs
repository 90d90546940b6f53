//! HTTP transport seam

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::error::ApiError;

/// A raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one POST request and returns the raw response.
///
/// [`IgdbClient`](crate::IgdbClient) only talks to the network through this
/// trait. The default implementation is [`HttpTransport`]; tests plug in a
/// fake that records requests.
pub trait Transport: Send + Sync {
    /// Posts `body` to `url` with the given headers.
    ///
    /// Non-success statuses are returned as a normal [`RawResponse`]; only
    /// transport failures are errors.
    fn post(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<RawResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<RawResponse, ApiError> {
        self.as_ref().post(url, headers, body)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default client that does not follow redirects.
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self { client })
    }

    /// Wraps a caller-supplied client.
    ///
    /// The client's own redirect policy applies.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<RawResponse, ApiError> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}
