use scraper::Selector;
use std::sync::LazyLock;

/// Site root; series and chapter identifiers are path fragments appended
/// to it verbatim.
pub(crate) const BASE_URL: &str = "https://onepiecechapters.com";
/// The catalog listing. The site serves its whole catalog on this one page.
pub(crate) const LISTING_URL: &str = "https://onepiecechapters.com/projects";
/// Attribution filled into author and scanlator fields.
pub(crate) const SOURCE_NAME: &str = "TCB Scans";
/// Language code shared by every chapter on the site.
pub(crate) const LANGUAGE: &str = "en";
/// Upper bound on an identifier (a site path fragment; the longest
/// observed is 36 bytes).
pub(crate) const MAX_IDENTIFIER_BYTES: usize = 50;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// The same card markup carries series entries on the listing page and
// chapter rows on a detail page.
selector!(CARD, ".bg-card.border.border-border.rounded.p-3.mb-3");
selector!(CARD_TITLE_LINK, "a.mb-3.text-white.text-lg.font-bold");
selector!(CARD_COVER, ".w-24.h-24.object-cover.rounded-lg");
selector!(DETAIL_PANEL, ".order-1.bg-card.border.border-border.rounded.py-3");
selector!(DETAIL_TITLE, ".my-3.font-bold.text-3xl");
selector!(DETAIL_SUMMARY, ".leading-6.my-3");
selector!(DETAIL_COVER, ".flex.items-center.justify-center img");
// Chapter rows style their heading like the series title link minus the
// flexbox wrapper, hence the :not guard.
selector!(CHAPTER_TITLE, ".text-lg.font-bold:not(.flex)");
selector!(CHAPTER_LABEL, ".text-gray-500");
selector!(PAGE_IMAGE, ".flex.flex-col.items-center.justify-center picture img");
