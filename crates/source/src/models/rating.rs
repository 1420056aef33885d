use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Content rating of a series. Everything on this site is reported
/// [`Safe`](Self::Safe).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentRating {
    #[default]
    Safe,
    Suggestive,
    Nsfw,
}

impl ContentRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::Safe => "Safe",
            ContentRating::Suggestive => "Suggestive",
            ContentRating::Nsfw => "NSFW",
        }
    }
}

impl FromStr for ContentRating {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = sanitize(s);
        Ok(match sanitized.as_str() {
            "safe" | "everyone" => Self::Safe,
            "suggestive" | "ecchi" => Self::Suggestive,
            "nsfw" | "explicit" | "adult" => Self::Nsfw,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "rating",
                value: format!("unknown rating: {}", s)
            }),
        })
    }
}

impl Display for ContentRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContentRating::Safe)]
    #[case(ContentRating::Suggestive)]
    #[case(ContentRating::Nsfw)]
    fn display_round_trips(#[case] rating: ContentRating) {
        assert_eq!(rating.as_str().parse::<ContentRating>().unwrap(), rating);
    }
}
