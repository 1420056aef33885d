/// One page image within a chapter.
///
/// A page carries either a remote URL or an inline payload; this site
/// always serves remote images, so `base64` and `caption` stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// Zero-based position within the chapter, in document order
    pub index: usize,
    /// Image URL
    pub url: Option<String>,
    /// Inline image payload
    pub base64: Option<String>,
    /// Caption text
    pub caption: Option<String>,
}
