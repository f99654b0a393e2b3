use chrono::{NaiveDateTime, TimeDelta};

use crate::{prelude::*, quantity::power::Kilowatts};

/// Power flows over a single interval, assumed constant for its whole duration.
///
/// Positive grid power is import from the grid, negative is export. Positive battery power is
/// discharge, negative is charge.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntervalRecord {
    /// Interval start, wall-clock time of the tariff.
    pub timestamp: NaiveDateTime,

    pub grid_power: Kilowatts,
    pub battery_power: Kilowatts,
}

/// Infer the interval duration from the first two records.
///
/// The series is assumed to be evenly spaced, so the result applies to every record including
/// the first one.
pub fn infer_duration(records: &[IntervalRecord]) -> Result<TimeDelta> {
    let [first, second, ..] = records else {
        bail!(
            "at least 2 interval records are needed to infer the interval duration, got {}",
            records.len(),
        );
    };
    let duration = second.timestamp - first.timestamp;
    ensure!(
        duration > TimeDelta::zero(),
        "interval records must be sorted by timestamp, but {} follows {}",
        second.timestamp,
        first.timestamp,
    );
    Ok(duration)
}
