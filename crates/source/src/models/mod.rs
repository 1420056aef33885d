mod chapter;
mod direction;
mod page;
mod rating;
mod series;
mod status;

pub use self::chapter::{Chapter, UNKNOWN_ORDINAL};
pub use self::direction::ReadingDirection;
pub use self::page::Page;
pub use self::rating::ContentRating;
pub use self::series::{Series, SeriesListing};
pub use self::status::PublicationStatus;

fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace(['-', '_', ' '], "")
}
