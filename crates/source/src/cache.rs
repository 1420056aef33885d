//! Single-slot cache for series detail pages.
//!
//! A series' details and its chapter list live on the same document, and
//! hosts habitually ask for one right after the other. The cache keeps
//! exactly the most recently fetched detail page, keyed by the identifier
//! it was fetched for, so the second request costs no network work.

use scraper::Html;
use tcb_net::HttpClient;
use tracing::debug;

use crate::consts;
use crate::error::{ErrorKind, Result};

/// Bound check for site path fragments used as cache keys and appended to
/// request URLs. Oversized identifiers fail before any fetch is issued.
pub(crate) fn checked_identifier(id: &str) -> Result<&str> {
    if id.len() > consts::MAX_IDENTIFIER_BYTES {
        exn::bail!(ErrorKind::IdentifierTooLong {
            actual: id.len(),
            limit: consts::MAX_IDENTIFIER_BYTES,
        });
    }
    Ok(id)
}

/// Fetch `url` through `client` and parse the body as an HTML document.
/// Invalid UTF-8 byte sequences are replaced with U+FFFD during decoding.
pub(crate) fn fetch_document(client: &dyn HttpClient, url: &str) -> Result<Html> {
    let body = client.get(url).map_err(ErrorKind::network)?;
    Ok(Html::parse_document(&String::from_utf8_lossy(&body)))
}

#[derive(Debug)]
struct CachedPage {
    id: String,
    document: Html,
}

/// The most recently fetched detail page and the identifier it belongs to.
///
/// One document is retained at a time; [`document`](Self::document) is the
/// only way the slot is filled or replaced. The cache is plain owned state,
/// injected into the adapter rather than living in a global.
#[derive(Debug, Default)]
pub struct DetailCache {
    slot: Option<CachedPage>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the page currently held, if any.
    pub fn cached_id(&self) -> Option<&str> {
        self.slot.as_ref().map(|page| page.id.as_str())
    }

    /// The detail document for `id`, fetched through `client` unless the
    /// slot already holds it.
    ///
    /// On a key mismatch the previous page is dropped *before* the
    /// replacement fetch, so a failed refresh leaves the slot empty rather
    /// than serving a stale document on the next call.
    pub fn document(&mut self, client: &dyn HttpClient, id: &str) -> Result<&Html> {
        let id = checked_identifier(id)?;
        let page = match self.slot.take() {
            Some(page) if page.id == id => {
                debug!(id, "detail cache hit");
                page
            }
            stale => {
                drop(stale);
                debug!(id, "detail cache miss, fetching");
                let url = format!("{}{}", consts::BASE_URL, id);
                let document = fetch_document(client, &url)?;
                CachedPage {
                    id: id.to_owned(),
                    document,
                }
            }
        };
        Ok(&self.slot.insert(page).document)
    }
}
