use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Publication status of a series.
///
/// The site never states one, so extraction always reports
/// [`Unknown`](Self::Unknown); the full set exists because the domain
/// model carries it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PublicationStatus {
    #[default]
    Unknown,
    Ongoing,
    Completed,
    Cancelled,
    Hiatus,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Unknown => "Unknown",
            PublicationStatus::Ongoing => "Ongoing",
            PublicationStatus::Completed => "Completed",
            PublicationStatus::Cancelled => "Cancelled",
            PublicationStatus::Hiatus => "Hiatus",
        }
    }
}

impl FromStr for PublicationStatus {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = sanitize(s);
        Ok(match sanitized.as_str() {
            "unknown" => Self::Unknown,
            "ongoing" | "publishing" | "releasing" => Self::Ongoing,
            "completed" | "complete" | "finished" => Self::Completed,
            "cancelled" | "canceled" | "dropped" => Self::Cancelled,
            "hiatus" | "onhiatus" | "paused" => Self::Hiatus,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "status",
                value: format!("unknown status: {}", s)
            }),
        })
    }
}

impl Display for PublicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PublicationStatus::Unknown)]
    #[case(PublicationStatus::Ongoing)]
    #[case(PublicationStatus::Completed)]
    #[case(PublicationStatus::Cancelled)]
    #[case(PublicationStatus::Hiatus)]
    fn display_round_trips(#[case] status: PublicationStatus) {
        assert_eq!(status.as_str().parse::<PublicationStatus>().unwrap(), status);
    }

    #[test]
    fn unknown_text_is_rejected() {
        let err = "serialised".parse::<PublicationStatus>().unwrap_err();
        assert!(matches!(&*err, ErrorKind::ParseError { field: "status", .. }));
    }
}
