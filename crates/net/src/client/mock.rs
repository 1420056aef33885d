//! In-memory client for testing.

use crate::client::{HttpClient, Request};
use crate::error::{ErrorKind, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory HTTP client for testing.
///
/// Responses are canned bodies keyed by exact URL, held behind a [`Mutex`]
/// so the trait methods can operate on `&self`. Every sent request is
/// logged in order, which lets tests assert not just on results but on
/// how many fetches an operation cost.
///
/// # Examples
///
/// ```
/// use tcb_net::{HttpClient, MockClient};
///
/// let client = MockClient::with_pages([
///     ("https://onepiecechapters.com/projects", "<html></html>"),
/// ]);
/// assert!(client.get("https://onepiecechapters.com/projects").is_ok());
/// assert_eq!(client.hits("https://onepiecechapters.com/projects"), 1);
/// ```
#[derive(Default)]
pub struct MockClient {
    routes: Mutex<HashMap<String, Vec<u8>>>,
    log: Mutex<Vec<String>>,
}

impl MockClient {
    /// A client pre-populated with `(url, body)` routes.
    pub fn with_pages(
        pages: impl IntoIterator<Item = (impl Into<String>, impl Into<Vec<u8>>)>,
    ) -> Self {
        let client = Self::default();
        for (url, body) in pages {
            client.route(url, body);
        }
        client
    }

    /// Adds or replaces a route after construction. Useful for scripting
    /// failure-then-success sequences.
    pub fn route(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        // MockClient lives in tests; a poisoned lock means a test already
        // panicked, so panicking again is fine.
        self.routes
            .lock()
            .expect("mock routes lock poisoned")
            .insert(url.into(), body.into());
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.log.lock().expect("mock log lock poisoned").clone()
    }

    /// How many times `url` has been requested.
    pub fn hits(&self, url: &str) -> usize {
        self.log
            .lock()
            .expect("mock log lock poisoned")
            .iter()
            .filter(|requested| *requested == url)
            .count()
    }
}

impl HttpClient for MockClient {
    fn send(&self, request: &Request) -> Result<Vec<u8>> {
        self.log
            .lock()
            .expect("mock log lock poisoned")
            .push(request.url.clone());
        self.routes
            .lock()
            .expect("mock routes lock poisoned")
            .get(&request.url)
            .cloned()
            .ok_or_else(|| exn::Exn::from(ErrorKind::NotFound(request.url.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_configured_routes() {
        let client = MockClient::with_pages([("https://example.test/a", "body-a")]);
        let body = client.get("https://example.test/a").unwrap();
        assert_eq!(body, b"body-a");
    }

    #[test]
    fn unknown_url_is_not_found() {
        let client = MockClient::default();
        let err = client.get("https://example.test/missing").unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[test]
    fn counts_hits_per_url() {
        let client = MockClient::with_pages([
            ("https://example.test/a", "a"),
            ("https://example.test/b", "b"),
        ]);
        client.get("https://example.test/a").unwrap();
        client.get("https://example.test/a").unwrap();
        client.get("https://example.test/b").unwrap();
        assert_eq!(client.hits("https://example.test/a"), 2);
        assert_eq!(client.hits("https://example.test/b"), 1);
        assert_eq!(client.hits("https://example.test/c"), 0);
    }

    #[test]
    fn logs_requests_in_order() {
        let client = MockClient::with_pages([("https://example.test/a", "a")]);
        client.get("https://example.test/a").unwrap();
        let _ = client.get("https://example.test/missing");
        assert_eq!(
            client.requests(),
            vec!["https://example.test/a", "https://example.test/missing"]
        );
    }

    #[test]
    fn route_replaces_existing_body() {
        let client = MockClient::with_pages([("https://example.test/a", "old")]);
        client.route("https://example.test/a", "new");
        assert_eq!(client.get("https://example.test/a").unwrap(), b"new");
    }
}
