use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::Timelike;

use crate::{ops::RangeInclusive, prelude::*};

/// Wall-clock time with minute precision.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Tariff time range, inclusive on both ends.
pub type TimeRange = RangeInclusive<TimeOfDay>;

impl TimeOfDay {
    #[expect(clippy::cast_possible_truncation)]
    pub fn try_new(hour: u32, minute: u32) -> Result<Self> {
        ensure!(hour < 24, "hour must be within `0..24`, got {hour}");
        ensure!(minute < 60, "minute must be within `0..60`, got {minute}");
        Ok(Self { hour: hour as u8, minute: minute as u8 })
    }

    /// Truncate the time to the minute, dropping the seconds.
    #[expect(clippy::cast_possible_truncation)]
    pub fn of(time: &impl Timelike) -> Self {
        Self { hour: time.hour() as u8, minute: time.minute() as u8 }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse zero-padded 24-hour `HH:MM`.
    fn from_str(text: &str) -> Result<Self> {
        let (hour, minute) =
            text.split_once(':').with_context(|| format!("`{text}` is not `HH:MM`"))?;
        ensure!(
            hour.len() == 2 && minute.len() == 2,
            "`{text}` must be zero-padded `HH:MM`",
        );
        Self::try_new(
            hour.parse().with_context(|| format!("invalid hour in `{text}`"))?,
            minute.parse().with_context(|| format!("invalid minute in `{text}`"))?,
        )
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    /// Parse `HH:MM-HH:MM`.
    fn from_str(text: &str) -> Result<Self> {
        let (start, end) = text
            .split_once('-')
            .with_context(|| format!("`{text}` is not an `HH:MM-HH:MM` time range"))?;
        Ok(Self { min: start.trim().parse()?, max: end.trim().parse()? })
    }
}
