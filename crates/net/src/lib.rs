//! Synchronous HTTP boundary.
//!
//! The adapter never talks to the network directly; it calls the
//! [`HttpClient`] trait and the host decides what stands behind it. A
//! [`Request`] carries the method, URL, headers and optional body, and
//! [`HttpClient::send`] blocks until the response body is available — the
//! adapter has no internal suspension points, so the boundary is sync by
//! contract. Retries, redirects and TLS all belong to the implementation,
//! not to callers.
//!
//! Two implementations ship behind features:
//!
//! - `http`: [`ReqwestClient`], a blocking `reqwest` client.
//! - `mock`: [`MockClient`], canned URL→body routes with a request log,
//!   for tests.

pub mod client;
pub mod error;

#[cfg(feature = "http")]
pub use crate::client::ReqwestClient;
#[cfg(feature = "mock")]
pub use crate::client::MockClient;
pub use crate::client::{HttpClient, Method, Request};
use std::sync::Arc;

pub type ClientHandle = Arc<dyn HttpClient + Send + Sync>;
