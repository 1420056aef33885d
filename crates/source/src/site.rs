//! The four extraction operations.
//!
//! Every operation follows the same shape: acquire a document (fresh
//! fetch, or the detail cache), run a fixed sequence of selectors over it,
//! read text and attribute values out, and hand back owned domain values.
//! A selector matching nothing is not an error — it produces empty strings
//! or empty collections, whatever the site happens to be missing.

use scraper::{ElementRef, Selector};
use tcb_net::ClientHandle;
use tracing::instrument;

use crate::cache::{DetailCache, checked_identifier, fetch_document};
use crate::consts;
use crate::error::Result;
use crate::models::{
    Chapter, ContentRating, Page, PublicationStatus, ReadingDirection, Series, SeriesListing,
    UNKNOWN_ORDINAL,
};
use crate::numeral;

/// Site adapter for TCB Scans.
///
/// Owns the injected HTTP client and the single-slot detail cache. Each
/// operation runs synchronously to completion; the adapter keeps no state
/// besides the cache, and every value it returns is owned by the caller.
///
/// # Examples
///
/// ```no_run
/// use tcb_net::ClientHandle;
/// use tcb_source::TcbScans;
///
/// fn catalog(client: ClientHandle) -> tcb_source::error::Result<()> {
///     let mut site = TcbScans::new(client);
///     for series in site.series_listing(1)?.series {
///         println!("{}: {}", series.id, series.title);
///     }
///     Ok(())
/// }
/// ```
pub struct TcbScans {
    client: ClientHandle,
    cache: DetailCache,
}

impl TcbScans {
    pub fn new(client: ClientHandle) -> Self {
        Self {
            client,
            cache: DetailCache::new(),
        }
    }

    /// The catalog listing.
    ///
    /// `_page` is accepted for interface parity with paginated sources;
    /// the site serves its whole catalog on a single page, so the argument
    /// never alters the request and `has_more` is always `false`.
    #[instrument(skip(self))]
    pub fn series_listing(&mut self, _page: i32) -> Result<SeriesListing> {
        let document = fetch_document(self.client.as_ref(), consts::LISTING_URL)?;
        let series = document.select(&consts::CARD).map(listing_entry).collect();
        Ok(SeriesListing {
            series,
            has_more: false,
        })
    }

    /// Details for the series identified by `id`, resolved through the
    /// detail cache.
    #[instrument(skip(self))]
    pub fn series_details(&mut self, id: &str) -> Result<Series> {
        let document = self.cache.document(self.client.as_ref(), id)?;
        let panel = document.select(&consts::DETAIL_PANEL).next();
        let (title, description, cover_url) = match panel {
            Some(panel) => (
                text_in(panel, &consts::DETAIL_TITLE),
                text_in(panel, &consts::DETAIL_SUMMARY),
                attr_in(panel, &consts::DETAIL_COVER, "src"),
            ),
            None => Default::default(),
        };
        Ok(Series {
            id: id.to_string(),
            cover_url,
            title,
            author: Some(consts::SOURCE_NAME.to_string()),
            artist: None,
            description: (!description.is_empty()).then_some(description),
            url: Some(format!("{}{}", consts::BASE_URL, id)),
            categories: Vec::new(),
            status: PublicationStatus::Unknown,
            rating: ContentRating::Safe,
            reading_direction: ReadingDirection::RightToLeft,
        })
    }

    /// Chapters of the series identified by `id`, newest first as the
    /// site lists them, resolved through the detail cache.
    #[instrument(skip(self))]
    pub fn chapter_list(&mut self, id: &str) -> Result<Vec<Chapter>> {
        let document = self.cache.document(self.client.as_ref(), id)?;
        Ok(document.select(&consts::CARD).map(chapter_entry).collect())
    }

    /// Page images of the chapter identified by `chapter_id`.
    ///
    /// Chapter pages are not detail pages, so this always fetches —
    /// the cache is never consulted or replaced.
    #[instrument(skip(self))]
    pub fn page_list(&mut self, chapter_id: &str) -> Result<Vec<Page>> {
        let chapter_id = checked_identifier(chapter_id)?;
        let url = format!("{}{}", consts::BASE_URL, chapter_id);
        let document = fetch_document(self.client.as_ref(), &url)?;
        Ok(document
            .select(&consts::PAGE_IMAGE)
            .enumerate()
            .map(|(index, image)| Page {
                index,
                url: image.value().attr("src").map(str::to_string),
                base64: None,
                caption: None,
            })
            .collect())
    }
}

/// One series card on the catalog listing. Author/artist/description stay
/// unknown here; the detail operation fills them in.
#[instrument(level = "trace", skip(card))]
fn listing_entry(card: ElementRef<'_>) -> Series {
    let title_link = card.select(&consts::CARD_TITLE_LINK).next();
    Series {
        id: title_link
            .and_then(|link| link.value().attr("href"))
            .unwrap_or_default()
            .to_string(),
        cover_url: attr_in(card, &consts::CARD_COVER, "src"),
        title: title_link.map(text_of).unwrap_or_default(),
        author: Some(consts::SOURCE_NAME.to_string()),
        artist: None,
        description: None,
        url: None,
        categories: Vec::new(),
        status: PublicationStatus::Unknown,
        rating: ContentRating::Safe,
        reading_direction: ReadingDirection::RightToLeft,
    }
}

/// One chapter row on a detail page. The row heading is read only to
/// derive the trailing numeral; the visible label sits in its own node.
#[instrument(level = "trace", skip(card))]
fn chapter_entry(card: ElementRef<'_>) -> Chapter {
    let heading = text_in(card, &consts::CHAPTER_TITLE);
    let label = text_in(card, &consts::CHAPTER_LABEL);
    let path = card
        .value()
        .attr("href")
        .unwrap_or_default()
        .to_string();
    Chapter {
        url: format!("{}{}", consts::BASE_URL, path),
        id: path,
        title: (!label.is_empty()).then_some(label),
        volume: UNKNOWN_ORDINAL,
        number: numeral::ordinal_from_title(&heading),
        uploaded: None,
        scanlator: Some(consts::SOURCE_NAME.to_string()),
        language: consts::LANGUAGE.to_string(),
    }
}

/// Concatenated, trimmed text of the first match; empty when nothing
/// matches.
#[instrument(level = "trace", skip(scope, selector))]
fn text_in(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope.select(selector).next().map(text_of).unwrap_or_default()
}

#[instrument(level = "trace", skip(element))]
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Attribute of the first match; empty when the node or the attribute is
/// absent.
#[instrument(level = "trace", skip(scope, selector))]
fn attr_in(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    scope
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::Arc;
    use tcb_net::MockClient;

    const LISTING_URL: &str = "https://onepiecechapters.com/projects";
    const ONE_PIECE: &str = "/mangas/5/one-piece";
    const ONE_PIECE_URL: &str = "https://onepiecechapters.com/mangas/5/one-piece";
    const CHAPTER: &str = "/chapters/7243/one-piece-chapter-1042";
    const CHAPTER_URL: &str = "https://onepiecechapters.com/chapters/7243/one-piece-chapter-1042";

    const LISTING_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="bg-card border border-border rounded p-3 mb-3">
    <img class="w-24 h-24 object-cover rounded-lg" src="https://cdn.example/covers/one-piece.png">
    <a class="mb-3 text-white text-lg font-bold" href="/mangas/5/one-piece">One Piece</a>
  </div>
  <div class="bg-card border border-border rounded p-3 mb-3">
    <img class="w-24 h-24 object-cover rounded-lg" src="https://cdn.example/covers/bleach.png">
    <a class="mb-3 text-white text-lg font-bold" href="/mangas/8/bleach">Bleach</a>
  </div>
</body></html>"#;

    const DETAIL_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="order-1 bg-card border border-border rounded py-3">
    <div class="flex items-center justify-center">
      <img src="https://cdn.example/covers/one-piece-large.png">
    </div>
    <h1 class="my-3 font-bold text-3xl">One Piece</h1>
    <p class="leading-6 my-3">Gol D. Roger's treasure awaits whoever finds it.</p>
  </div>
  <a class="bg-card border border-border rounded p-3 mb-3" href="/chapters/7243/one-piece-chapter-1042">
    <div class="text-lg font-bold">One Piece Chapter 1042</div>
    <div class="text-gray-500">The Capital in Flames</div>
  </a>
  <a class="bg-card border border-border rounded p-3 mb-3" href="/chapters/7201/one-piece-chapter-1041-5">
    <div class="text-lg font-bold">One Piece Chapter 1041.5</div>
  </a>
</body></html>"#;

    const CHAPTER_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="flex flex-col items-center justify-center">
    <picture><img src="https://cdn.example/pages/1042-001.png"></picture>
    <picture><img src="https://cdn.example/pages/1042-002.png"></picture>
    <picture><img src="https://cdn.example/pages/1042-003.png"></picture>
  </div>
</body></html>"#;

    fn site_with(pages: &[(&str, &str)]) -> (Arc<MockClient>, TcbScans) {
        let client = Arc::new(MockClient::with_pages(pages.iter().copied()));
        let site = TcbScans::new(client.clone());
        (client, site)
    }

    #[test]
    fn listing_returns_one_entry_per_card() {
        let (_, mut site) = site_with(&[(LISTING_URL, LISTING_PAGE)]);
        let listing = site.series_listing(1).unwrap();
        assert_eq!(listing.series.len(), 2);
        assert!(!listing.has_more);
        for series in &listing.series {
            assert!(!series.id.is_empty());
            assert!(!series.title.is_empty());
            assert!(!series.cover_url.is_empty());
            assert_eq!(series.author.as_deref(), Some("TCB Scans"));
            assert_eq!(series.status, PublicationStatus::Unknown);
            assert_eq!(series.rating, ContentRating::Safe);
            assert_eq!(series.reading_direction, ReadingDirection::RightToLeft);
        }
        assert_eq!(listing.series[0].id, ONE_PIECE);
        assert_eq!(listing.series[1].title, "Bleach");
    }

    #[test]
    fn listing_tolerates_a_page_without_cards() {
        let (_, mut site) = site_with(&[(LISTING_URL, "<html><body></body></html>")]);
        let listing = site.series_listing(1).unwrap();
        assert!(listing.series.is_empty());
        assert!(!listing.has_more);
    }

    #[test]
    fn details_extract_the_panel_fields() {
        let (_, mut site) = site_with(&[(ONE_PIECE_URL, DETAIL_PAGE)]);
        let series = site.series_details(ONE_PIECE).unwrap();
        assert_eq!(series.id, ONE_PIECE);
        assert_eq!(series.title, "One Piece");
        assert_eq!(
            series.description.as_deref(),
            Some("Gol D. Roger's treasure awaits whoever finds it.")
        );
        assert_eq!(series.cover_url, "https://cdn.example/covers/one-piece-large.png");
        assert_eq!(series.url.as_deref(), Some(ONE_PIECE_URL));
        assert_eq!(series.author.as_deref(), Some("TCB Scans"));
    }

    #[test]
    fn details_tolerate_a_missing_panel() {
        let (_, mut site) = site_with(&[(ONE_PIECE_URL, "<html><body></body></html>")]);
        let series = site.series_details(ONE_PIECE).unwrap();
        assert_eq!(series.title, "");
        assert_eq!(series.description, None);
        assert_eq!(series.cover_url, "");
    }

    #[test]
    fn chapters_come_from_the_detail_cards() {
        let (_, mut site) = site_with(&[(ONE_PIECE_URL, DETAIL_PAGE)]);
        let chapters = site.chapter_list(ONE_PIECE).unwrap();
        assert_eq!(chapters.len(), 2);

        let first = &chapters[0];
        assert_eq!(first.id, CHAPTER);
        assert_eq!(first.url, CHAPTER_URL);
        assert_eq!(first.title.as_deref(), Some("The Capital in Flames"));
        assert_eq!(first.number, 1042.0);
        assert_eq!(first.volume, UNKNOWN_ORDINAL);
        assert_eq!(first.uploaded, None);
        assert_eq!(first.scanlator.as_deref(), Some("TCB Scans"));
        assert_eq!(first.language, "en");

        // "Chapter 1041.5" parses its fractional numeral; the row has no
        // label node.
        assert_eq!(chapters[1].number, 1041.5);
        assert_eq!(chapters[1].title, None);
    }

    #[test]
    fn details_then_chapters_costs_one_fetch() {
        let (client, mut site) = site_with(&[(ONE_PIECE_URL, DETAIL_PAGE)]);
        site.series_details(ONE_PIECE).unwrap();
        site.chapter_list(ONE_PIECE).unwrap();
        assert_eq!(client.hits(ONE_PIECE_URL), 1);
    }

    #[test]
    fn switching_series_invalidates_the_cache() {
        let bleach_url = "https://onepiecechapters.com/mangas/8/bleach";
        let (client, mut site) = site_with(&[
            (ONE_PIECE_URL, DETAIL_PAGE),
            (bleach_url, "<html><body></body></html>"),
        ]);
        site.series_details(ONE_PIECE).unwrap();
        site.series_details("/mangas/8/bleach").unwrap();
        site.series_details(ONE_PIECE).unwrap();
        assert_eq!(client.hits(ONE_PIECE_URL), 2);
        assert_eq!(client.hits(bleach_url), 1);
    }

    #[test]
    fn pages_keep_document_order() {
        let (client, mut site) = site_with(&[(CHAPTER_URL, CHAPTER_PAGE)]);
        let pages = site.page_list(CHAPTER).unwrap();
        assert_eq!(pages.len(), 3);
        for (expected, page) in pages.iter().enumerate() {
            assert_eq!(page.index, expected);
            assert!(page.url.as_deref().is_some_and(|url| !url.is_empty()));
            assert_eq!(page.base64, None);
            assert_eq!(page.caption, None);
        }
        assert_eq!(
            pages[2].url.as_deref(),
            Some("https://cdn.example/pages/1042-003.png")
        );
        assert_eq!(client.hits(CHAPTER_URL), 1);
    }

    #[test]
    fn page_list_bypasses_the_detail_cache() {
        let (client, mut site) = site_with(&[
            (ONE_PIECE_URL, DETAIL_PAGE),
            (CHAPTER_URL, CHAPTER_PAGE),
        ]);
        site.series_details(ONE_PIECE).unwrap();
        site.page_list(CHAPTER).unwrap();
        // The detail page is still cached afterwards.
        site.chapter_list(ONE_PIECE).unwrap();
        assert_eq!(client.hits(ONE_PIECE_URL), 1);
        assert_eq!(client.hits(CHAPTER_URL), 1);
    }

    #[test]
    fn oversized_identifiers_never_reach_the_network() {
        let (client, mut site) = site_with(&[]);
        let id = format!("/chapters/{}", "x".repeat(60));
        let err = site.page_list(&id).unwrap_err();
        assert!(matches!(&*err, ErrorKind::IdentifierTooLong { .. }));
        let err = site.series_details(&id).unwrap_err();
        assert!(matches!(&*err, ErrorKind::IdentifierTooLong { .. }));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn failed_listing_fetch_propagates() {
        let (_, mut site) = site_with(&[]);
        let err = site.series_listing(1).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Network(_)));
    }
}
