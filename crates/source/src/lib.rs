//! TCB Scans site adapter.
//!
//! Maps the HTML of <https://onepiecechapters.com> onto a small manga
//! domain model: [`Series`](models::Series) catalog entries, ordered
//! [`Chapter`](models::Chapter)s, and per-chapter [`Page`](models::Page)
//! image lists. The network transport is injected behind the
//! [`HttpClient`](tcb_net::HttpClient) trait; structural queries run
//! through `scraper` selectors.
//!
//! Series details and the chapter list live on the same document, so the
//! adapter keeps exactly one detail page cached at a time
//! ([`DetailCache`]): asking for details and then chapters of the same
//! series costs a single fetch.

mod cache;
mod consts;
pub mod error;
pub mod models;
mod numeral;
mod site;

pub use crate::cache::DetailCache;
pub use crate::site::TcbScans;
