//! Blocking `reqwest`-backed client.

use crate::client::{HttpClient, Method, Request};
use crate::error::{ErrorKind, Result};
use tracing::debug;

const USER_AGENT: &str = concat!("tcb/", env!("CARGO_PKG_VERSION"));

/// [`HttpClient`] over a blocking [`reqwest`] client.
///
/// Redirects, TLS and connection pooling are `reqwest`'s defaults; the
/// only opinion taken here is a fixed user agent and the non-success
/// status check required by the trait contract.
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| exn::Exn::from(ErrorKind::Transport(err.to_string())))?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    fn send(&self, request: &Request) -> Result<Vec<u8>> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Head => reqwest::Method::HEAD,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let url = reqwest::Url::parse(&request.url)
            .map_err(|_| exn::Exn::from(ErrorKind::InvalidUrl(request.url.clone())))?;
        let mut builder = self.inner.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let response = builder
            .send()
            .map_err(|err| exn::Exn::from(ErrorKind::Transport(err.to_string())))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Status {
                code: status.as_u16(),
                url: request.url.clone(),
            });
        }
        let body = response
            .bytes()
            .map_err(|err| exn::Exn::from(ErrorKind::Transport(err.to_string())))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_rejected_before_sending() {
        let client = ReqwestClient::new().unwrap();
        let err = client.get("not-a-url").unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidUrl(_)));
    }
}
