use std::fmt::Formatter;

use chrono::NaiveDateTime;
use serde::{
    Deserialize,
    Deserializer,
    de::{Error as _, MapAccess, Visitor},
};

use crate::{
    core::{
        day_type::DayType,
        time_of_day::{TimeOfDay, TimeRange},
    },
    prelude::*,
    quantity::rate::KilowattHourRate,
};

/// Time ranges with their rates, in the declared order.
pub type RateTable = Vec<(TimeRange, KilowattHourRate)>;

/// Time-of-use tariffs per day type.
///
/// Ranges are matched in the declared order and the first match wins, so overlapping
/// ranges are resolved by whichever comes first.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct TariffSchedule {
    weekday: RateTable,
    weekend: RateTable,
}

impl TariffSchedule {
    /// Append the range to the day type's table.
    pub fn with_range(
        mut self,
        day_type: DayType,
        range: TimeRange,
        rate: KilowattHourRate,
    ) -> Self {
        self.table_mut(day_type).push((range, rate));
        self
    }

    #[must_use]
    pub fn table(&self, day_type: DayType) -> &[(TimeRange, KilowattHourRate)] {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }

    const fn table_mut(&mut self, day_type: DayType) -> &mut RateTable {
        match day_type {
            DayType::Weekday => &mut self.weekday,
            DayType::Weekend => &mut self.weekend,
        }
    }

    /// Iterate over all the entries, weekdays first.
    pub fn iter(&self) -> impl Iterator<Item = (DayType, TimeRange, KilowattHourRate)> + '_ {
        DayType::ALL.into_iter().flat_map(move |day_type| {
            self.table(day_type).iter().map(move |(range, rate)| (day_type, *range, *rate))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weekday.len() + self.weekend.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the rate of the first range containing the time.
    #[must_use]
    pub fn lookup(&self, day_type: DayType, time_of_day: TimeOfDay) -> Option<KilowattHourRate> {
        self.table(day_type)
            .iter()
            .find(|(range, _)| range.contains(time_of_day))
            .map(|(_, rate)| *rate)
    }

    /// Rate in effect at the timestamp.
    ///
    /// Unmatched timestamps are charged at zero rate.
    pub fn rate_at(&self, timestamp: NaiveDateTime) -> KilowattHourRate {
        let day_type = DayType::of(&timestamp);
        self.lookup(day_type, TimeOfDay::of(&timestamp)).unwrap_or_else(|| {
            warn!(%timestamp, %day_type, "no tariff matched, defaulting to zero rate");
            KilowattHourRate::ZERO
        })
    }
}

impl<'de> Deserialize<'de> for TariffSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = TariffSchedule;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "a map of day types to rate tables")
            }

            fn visit_map<MA: MapAccess<'de>>(
                self,
                mut map_access: MA,
            ) -> Result<Self::Value, MA::Error> {
                let mut schedule = TariffSchedule::default();
                let mut seen = Vec::with_capacity(DayType::ALL.len());
                while let Some((day_type, OrderedRates(table))) =
                    map_access.next_entry::<DayType, OrderedRates>()?
                {
                    if seen.contains(&day_type) {
                        return Err(MA::Error::custom(format!("duplicate day type `{day_type}`")));
                    }
                    seen.push(day_type);
                    *schedule.table_mut(day_type) = table;
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(ScheduleVisitor)
    }
}

/// Rate table deserialized from a map, keeping the entry order of the document.
struct OrderedRates(RateTable);

impl<'de> Deserialize<'de> for OrderedRates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatesVisitor;

        impl<'de> Visitor<'de> for RatesVisitor {
            type Value = OrderedRates;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "an ordered map of `HH:MM-HH:MM` ranges to rates")
            }

            fn visit_map<MA: MapAccess<'de>>(
                self,
                mut map_access: MA,
            ) -> Result<Self::Value, MA::Error> {
                let mut table = Vec::with_capacity(map_access.size_hint().unwrap_or_default());
                while let Some((key, rate)) = map_access.next_entry::<String, KilowattHourRate>()? {
                    let range: TimeRange =
                        key.parse().map_err(|error| MA::Error::custom(format!("{error:#}")))?;
                    if range.is_empty() {
                        warn!(%range, "time range ends before it starts and never matches");
                    }
                    table.push((range, rate));
                }
                Ok(OrderedRates(table))
            }
        }

        deserializer.deserialize_map(RatesVisitor)
    }
}
