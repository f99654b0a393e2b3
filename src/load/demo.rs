//! Synthetic inputs for trying the calculator out without any files.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::{
    core::{day_type::DayType, interval::IntervalRecord, tariff::TariffSchedule},
    prelude::*,
    quantity::{power::Kilowatts, rate::KilowattHourRate},
};

const GRID_POWER: [f64; 10] = [5.0, -3.0, 4.0, -2.0, 5.0, -3.0, 4.0, -2.0, 5.0, -3.0];
const BATTERY_POWER: [f64; 10] = [-100.0, 2.0, -1.5, 2.5, -1.0, 2.0, -1.5, 2.5, -1.0, 2.0];

/// Ten minutes of flows at one-minute resolution.
pub fn demo_series(start: NaiveDateTime) -> Vec<IntervalRecord> {
    (0..)
        .zip(GRID_POWER.into_iter().zip(BATTERY_POWER))
        .map(|(minute, (grid_power, battery_power))| IntervalRecord {
            timestamp: start + TimeDelta::minutes(minute),
            grid_power: Kilowatts(grid_power),
            battery_power: Kilowatts(battery_power),
        })
        .collect()
}

/// Cheap nights, expensive days and a flat weekend rate.
pub fn demo_tariffs() -> Result<TariffSchedule> {
    let rate = |cents: i64| KilowattHourRate(Decimal::new(cents, 2));
    Ok(TariffSchedule::default()
        .with_range(DayType::Weekday, "00:00-06:00".parse()?, rate(10))
        .with_range(DayType::Weekday, "06:01-18:00".parse()?, rate(20))
        .with_range(DayType::Weekday, "18:01-23:59".parse()?, rate(15))
        .with_range(DayType::Weekend, "00:00-23:59".parse()?, rate(5)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::core::interval::infer_duration;

    #[test]
    fn test_demo_series() -> Result {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let series = demo_series(start);
        assert_eq!(series.len(), 10);
        assert_eq!(infer_duration(&series)?, TimeDelta::minutes(1));
        assert_eq!(series[9].timestamp, start + TimeDelta::minutes(9));
        assert_eq!(series[0].battery_power, Kilowatts(-100.0));
        Ok(())
    }

    #[test]
    fn test_demo_tariffs() -> Result {
        let schedule = demo_tariffs()?;
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.lookup(DayType::Weekday, "06:01".parse()?), Some(KilowattHourRate(dec!(0.20))));
        assert_eq!(schedule.lookup(DayType::Weekday, "06:00".parse()?), Some(KilowattHourRate(dec!(0.10))));
        assert_eq!(schedule.lookup(DayType::Weekend, "12:00".parse()?), Some(KilowattHourRate(dec!(0.05))));
        Ok(())
    }
}
