//! Request and response value types.
//!
//! The pipeline works on its own message types rather than reqwest's:
//! a [`Request`] is an immutable value that every retry attempt re-dispatches
//! unchanged, and a [`Response`] is the fully read result of one attempt.
//! Conversion to and from the wire happens in [`crate::transport`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::HttpError;

pub use reqwest::{Method, StatusCode};

// ============================================================================
// Headers
// ============================================================================

/// Case-insensitive header map with string values.
///
/// Keys are stored lowercase; lookups accept any casing. String values
/// cover every header this pipeline reads or writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: BTreeMap<String, String>,
}

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any existing value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(name.into().to_ascii_lowercase(), value.into());
    }

    /// Looks up a header value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns true if a header with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Request
// ============================================================================

/// An immutable outbound HTTP request.
///
/// Constructed once via [`Request::get`] or [`Request::post`]; the retry
/// interceptor dispatches the same value on every attempt.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Starts building a GET request.
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::GET, url)
    }

    /// Starts building a POST request.
    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::POST, url)
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the request headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the request body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Builder for [`Request`].
///
/// Encoding and URL problems are deferred to [`build`](Self::build) so the
/// call chain stays ergonomic, mirroring reqwest's builder.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: Headers,
    body: Option<Vec<u8>>,
    error: Option<HttpError>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
            error: None,
        }
    }

    /// Sets one header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges a prebuilt header map into the request.
    pub fn headers(mut self, headers: &Headers) -> Self {
        for (name, value) in headers.iter() {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets a JSON body and the matching content type.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.headers.insert("Content-Type", "application/json");
                self.body = Some(bytes);
            }
            Err(err) => self.error = Some(HttpError::Encode(err)),
        }
        self
    }

    /// Finalizes the request.
    ///
    /// Surfaces any deferred encoding error and validates the URL.
    pub fn build(self) -> Result<Request, HttpError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        Ok(Request {
            method: self.method,
            url: Url::parse(&self.url)?,
            headers: self.headers,
            body: self.body,
        })
    }
}

// ============================================================================
// Response
// ============================================================================

/// The fully read result of one dispatch attempt.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: Headers,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response from its parts.
    pub fn new(status: StatusCode, headers: Headers, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up one header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut headers = Headers::new();
        headers.insert("X-RateLimit-Remaining", "0");

        assert_eq!(headers.get("x-ratelimit-remaining"), Some("0"));
        assert_eq!(headers.get("X-RATELIMIT-REMAINING"), Some("0"));
        assert!(headers.contains("X-RateLimit-Remaining"));
        assert!(!headers.contains("X-RateLimit-Reset"));
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut headers = Headers::new();
        headers.insert("Accept", "text/plain");
        headers.insert("accept", "application/json");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Accept"), Some("application/json"));
    }

    #[test]
    fn test_get_request_build() {
        let request = Request::get("https://api.github.com/repos/a/b/contents/")
            .header("Accept", "application/vnd.github.v3+json")
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/repos/a/b/contents/"
        );
        assert_eq!(
            request.headers().get("accept"),
            Some("application/vnd.github.v3+json")
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = Request::post("https://api.test/v1/things")
            .json(&serde_json::json!({"name": "x"}))
            .build()
            .unwrap();

        assert_eq!(request.headers().get("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "x"}));
    }

    #[test]
    fn test_invalid_url_fails_at_build() {
        let result = Request::get("not a url").build();
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[test]
    fn test_response_accessors() {
        let mut headers = Headers::new();
        headers.insert("X-RateLimit-Reset", "1700000000");
        let response = Response::new(StatusCode::OK, headers, r#"{"ok":true}"#);

        assert!(response.is_success());
        assert_eq!(response.header("x-ratelimit-reset"), Some("1700000000"));
        assert_eq!(response.text(), r#"{"ok":true}"#);

        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["ok"], serde_json::json!(true));
    }
}
