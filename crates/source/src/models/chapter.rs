use time::UtcDateTime;

/// Sentinel for a volume or chapter ordinal the site does not expose.
pub const UNKNOWN_ORDINAL: f32 = -1.0;

/// One chapter row scraped from a series detail page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// Site path fragment identifying the chapter
    pub id: String,
    /// Short label shown under the chapter heading, absent when the row
    /// carries none
    pub title: Option<String>,
    /// Volume ordinal; [`UNKNOWN_ORDINAL`] when unknown
    pub volume: f32,
    /// Chapter ordinal derived from the trailing numeral of the row
    /// heading; [`UNKNOWN_ORDINAL`] when the heading carries none
    pub number: f32,
    /// Upload timestamp; the site does not publish one
    pub uploaded: Option<UtcDateTime>,
    /// Scanlation group attribution
    pub scanlator: Option<String>,
    /// Canonical web URL
    pub url: String,
    /// Language code
    pub language: String,
}
