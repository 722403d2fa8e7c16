//! Thin JSON transport over ureq.
//!
//! One helper per HTTP verb; every call resolves the path against the
//! configured base URL, decodes the JSON body, and funnels failures
//! through [`ApiError`](crate::ApiError). Requests carry no timeout,
//! retry, or caching layer; callers own any sequencing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Base-URL-bound HTTP client. Cheap to clone; clones share nothing but
/// the URL string, so one can move into a worker thread per request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = ureq::get(&self.url(path)).call()?;
        decode(resp)
    }

    pub fn post<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> ApiResult<T> {
        let resp = ureq::post(&self.url(path))
            .set("Content-Type", "application/json")
            .send_json(body)?;
        decode(resp)
    }

    pub fn put<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> ApiResult<T> {
        let resp = ureq::put(&self.url(path))
            .set("Content-Type", "application/json")
            .send_json(body)?;
        decode(resp)
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = ureq::delete(&self.url(path)).call()?;
        decode(resp)
    }
}

fn decode<T: DeserializeOwned>(resp: ureq::Response) -> ApiResult<T> {
    resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
}

/// Acknowledgement body returned by delete endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// Incremental `?key=value` builder; values are percent-encoded.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    query: String,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.query.push(if self.query.is_empty() { '?' } else { '&' });
        self.query.push_str(key);
        self.query.push('=');
        self.query.push_str(&urlencoding::encode(value));
    }

    /// The assembled query including the leading `?`, or an empty string
    /// when nothing was pushed
    pub(crate) fn finish(self) -> String {
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/equipment"), "http://localhost:8000/api/equipment");
    }

    #[test]
    fn test_query_string_empty() {
        assert_eq!(QueryString::new().finish(), "");
    }

    #[test]
    fn test_query_string_joins_params() {
        let mut qs = QueryString::new();
        qs.push("slot", "weapon");
        qs.push("is_active", "true");
        assert_eq!(qs.finish(), "?slot=weapon&is_active=true");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let mut qs = QueryString::new();
        qs.push("search", "sword & board");
        assert_eq!(qs.finish(), "?search=sword%20%26%20board");
    }
}
