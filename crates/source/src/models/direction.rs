use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Preferred reading direction for a series. Scanlated manga reads
/// [`RightToLeft`](Self::RightToLeft), which is what this site reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingDirection {
    #[default]
    RightToLeft,
    LeftToRight,
    Vertical,
    VerticalScroll,
}

impl ReadingDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingDirection::RightToLeft => "right-to-left",
            ReadingDirection::LeftToRight => "left-to-right",
            ReadingDirection::Vertical => "vertical",
            ReadingDirection::VerticalScroll => "vertical-scroll",
        }
    }
}

impl FromStr for ReadingDirection {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = sanitize(s);
        Ok(match sanitized.as_str() {
            "rtl" | "righttoleft" | "manga" => Self::RightToLeft,
            "ltr" | "lefttoright" | "comic" => Self::LeftToRight,
            "vertical" => Self::Vertical,
            "verticalscroll" | "scroll" | "webtoon" | "longstrip" => Self::VerticalScroll,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "reading direction",
                value: format!("unknown direction: {}", s)
            }),
        })
    }
}

impl Display for ReadingDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ReadingDirection::RightToLeft)]
    #[case(ReadingDirection::LeftToRight)]
    #[case(ReadingDirection::Vertical)]
    #[case(ReadingDirection::VerticalScroll)]
    fn display_round_trips(#[case] direction: ReadingDirection) {
        assert_eq!(direction.as_str().parse::<ReadingDirection>().unwrap(), direction);
    }
}
