//! Conversion of interval power flows into money.
//!
//! The interval duration is always an explicit argument.

use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    core::{battery::BatteryParameters, tariff::TariffSchedule},
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, exact_decimal, power::Kilowatts, time::Hours},
};

/// Energy moved by the constant power over the duration, sign preserved.
pub fn energy(power: Kilowatts, duration: TimeDelta) -> KilowattHours {
    power * Hours::from(duration)
}

/// Grid cost of the interval starting at the timestamp.
///
/// Zero flow costs nothing and never consults the schedule.
pub fn grid_cost(
    power: Kilowatts,
    timestamp: NaiveDateTime,
    duration: TimeDelta,
    schedule: &TariffSchedule,
) -> Result<Cost> {
    let energy = energy(power, duration);
    if energy.is_zero() {
        return Ok(Cost::ZERO);
    }
    Ok(energy.try_mul(schedule.rate_at(timestamp))?.round())
}

/// Battery wear cost of the interval, regardless of the flow direction.
pub fn battery_cost(
    battery: &BatteryParameters,
    power: Kilowatts,
    duration: TimeDelta,
) -> Result<Cost> {
    let degradation = battery.degradation(energy(power, duration));
    let cost = exact_decimal(degradation)?
        .checked_mul(battery.replacement_cost().0)
        .with_context(|| format!("battery cost overflows at {power}"))?;
    Ok(Cost(cost).round())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{core::day_type::DayType, quantity::rate::KilowattHourRate};

    /// Monday noon.
    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn schedule(rate: rust_decimal::Decimal) -> Result<TariffSchedule> {
        Ok(TariffSchedule::default()
            .with_range(DayType::Weekday, "00:00-23:59".parse()?, KilowattHourRate(rate))
            .with_range(DayType::Weekend, "00:00-23:59".parse()?, KilowattHourRate(rate)))
    }

    fn battery() -> Result<BatteryParameters> {
        BatteryParameters::builder()
            .replacement_cost(Cost(dec!(5000)))
            .capacity(KilowattHours(10.0))
            .rated_cycles(4000)
            .build()
    }

    #[test]
    fn test_energy() {
        assert_abs_diff_eq!(energy(Kilowatts(6.0), TimeDelta::minutes(30)).0, 3.0);
        assert_abs_diff_eq!(energy(Kilowatts(-6.0), TimeDelta::seconds(90)).0, -0.15);
        assert_abs_diff_eq!(energy(Kilowatts(2.0), TimeDelta::zero()).0, 0.0);
    }

    #[test]
    fn test_grid_cost() -> Result {
        let schedule = schedule(dec!(0.20))?;
        let cost = grid_cost(Kilowatts(5.0), timestamp(), TimeDelta::hours(1), &schedule)?;
        assert_eq!(cost, Cost(dec!(1.00)));
        Ok(())
    }

    #[test]
    fn test_grid_cost_export_is_negative() -> Result {
        let schedule = schedule(dec!(0.20))?;
        let cost = grid_cost(Kilowatts(-3.0), timestamp(), TimeDelta::minutes(1), &schedule)?;
        assert_eq!(cost, Cost(dec!(-0.01)));
        Ok(())
    }

    #[test]
    fn test_grid_cost_zero_flow_is_free() -> Result {
        for rate in [dec!(0), dec!(0.2), dec!(99.99)] {
            let schedule = schedule(rate)?;
            for day in 1..=7 {
                let timestamp =
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(8, 0, 0).unwrap();
                let cost = grid_cost(Kilowatts::ZERO, timestamp, TimeDelta::minutes(15), &schedule)?;
                assert_eq!(cost, Cost::ZERO);
            }
        }
        Ok(())
    }

    #[test]
    fn test_grid_cost_without_tariff_is_zero() -> Result {
        let cost = grid_cost(
            Kilowatts(5.0),
            timestamp(),
            TimeDelta::hours(1),
            &TariffSchedule::default(),
        )?;
        assert_eq!(cost, Cost::ZERO);
        Ok(())
    }

    #[test]
    fn test_grid_cost_rounds_half_up() -> Result {
        // 0.5 kWh at 0.25 is exactly 0.125.
        let schedule = schedule(dec!(0.25))?;
        let cost = grid_cost(Kilowatts(0.5), timestamp(), TimeDelta::hours(1), &schedule)?;
        assert_eq!(cost, Cost(dec!(0.13)));
        let cost = grid_cost(Kilowatts(-0.5), timestamp(), TimeDelta::hours(1), &schedule)?;
        assert_eq!(cost, Cost(dec!(-0.13)));
        Ok(())
    }

    #[test]
    fn test_battery_cost() -> Result {
        // 5 kWh is half of the capacity, out of 2000 round trips: 5000 * 0.5 / 2000 = 1.25.
        let cost = battery_cost(&battery()?, Kilowatts(5.0), TimeDelta::hours(1))?;
        assert_eq!(cost, Cost(dec!(1.25)));
        Ok(())
    }

    #[test]
    fn test_battery_cost_is_direction_independent() -> Result {
        let battery = battery()?;
        for power in [0.1, 1.0, 2.5, 7.3, 100.0] {
            for duration in [TimeDelta::seconds(1), TimeDelta::minutes(15), TimeDelta::hours(1)] {
                let charge = battery_cost(&battery, Kilowatts(-power), duration)?;
                let discharge = battery_cost(&battery, Kilowatts(power), duration)?;
                assert_eq!(charge, discharge);
                assert!(charge >= Cost::ZERO);
            }
        }
        Ok(())
    }

    #[test]
    fn test_battery_cost_zero_flow() -> Result {
        assert_eq!(battery_cost(&battery()?, Kilowatts::ZERO, TimeDelta::hours(1))?, Cost::ZERO);
        Ok(())
    }
}
