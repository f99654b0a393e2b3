use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};

use crate::prelude::*;

/// Wall-clock timestamp parsed from any of the common ISO 8601 spellings.
///
/// An explicit UTC offset is dropped: tariffs apply to the local wall clock as written.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Timestamp(pub NaiveDateTime);

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

        let text = text.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(timestamp.naive_local()));
        }
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(Self)
            .with_context(|| format!("`{text}` is not an ISO 8601 timestamp"))
    }
}
