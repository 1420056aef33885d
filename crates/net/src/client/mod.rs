//! HTTP client trait and implementations.
//!
//! This module defines the [`HttpClient`] trait, the single seam between
//! the extraction pipeline and whatever transport the embedding host
//! provides, plus the [`Request`] value it consumes.

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "http")]
pub use self::http::ReqwestClient;
#[cfg(feature = "mock")]
pub use self::mock::MockClient;
use crate::error::Result;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Head,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A request to be executed by an [`HttpClient`].
///
/// Built in place with the builder-style constructors; nothing happens
/// until the request is handed to [`HttpClient::send`].
///
/// # Examples
///
/// ```
/// use tcb_net::{Method, Request};
///
/// let request = Request::get("https://onepiecechapters.com/projects")
///     .header("Referer", "https://onepiecechapters.com");
/// assert_eq!(request.method, Method::Get);
/// assert_eq!(request.headers.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A bare GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Appends a header. Duplicate names are sent in insertion order.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Blocking HTTP transport.
///
/// Implementations execute the whole request/response cycle before
/// returning; the caller is suspended until the body is available or the
/// attempt has failed. A non-success status is a failure — callers of this
/// trait only ever want the page they asked for.
pub trait HttpClient: Send + Sync {
    /// Execute `request` and return the response body.
    fn send(&self, request: &Request) -> Result<Vec<u8>>;

    /// Convenience for the common case: GET `url` with no extra headers.
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.send(&Request::get(url))
    }
}
