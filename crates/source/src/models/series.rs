use super::{ContentRating, PublicationStatus, ReadingDirection};

/// One catalog entry scraped from the site.
///
/// Entries coming from the catalog listing carry only identifier, title
/// and cover; the remaining fields are filled by the detail operation.
/// Entities are write-once — built field by field and handed to the
/// caller, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Site path fragment identifying the series (e.g. `/mangas/5/one-piece`)
    pub id: String,
    /// Cover image URL
    pub cover_url: String,
    /// Series title
    pub title: String,
    /// Author attribution; the site credits its own scanlation group
    pub author: Option<String>,
    /// Artist (the site does not expose one)
    pub artist: Option<String>,
    /// Series description
    pub description: Option<String>,
    /// Canonical web URL of the detail page
    pub url: Option<String>,
    /// Category labels (the site does not expose any)
    pub categories: Vec<String>,
    pub status: PublicationStatus,
    pub rating: ContentRating,
    pub reading_direction: ReadingDirection,
}

/// A page of catalog entries plus a pagination flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesListing {
    pub series: Vec<Series>,
    /// Whether another listing page exists. Always `false` here — the
    /// site serves its whole catalog on one page.
    pub has_more: bool,
}
