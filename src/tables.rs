use chrono::TimeDelta;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        aggregator::CostReport,
        cost_model::energy,
        day_type::DayType,
        interval::IntervalRecord,
        tariff::TariffSchedule,
        time_of_day::TimeOfDay,
    },
    quantity::{cost::Cost, power::Kilowatts},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn power_color(power: Kilowatts) -> Color {
    if power.0 > 0.0 {
        Color::Red
    } else if power.0 < 0.0 {
        Color::Green
    } else {
        Color::Reset
    }
}

fn cost_color(cost: Cost) -> Color {
    if cost.is_negative() {
        Color::Green
    } else if cost >= Cost::ONE_CENT {
        Color::Red
    } else {
        Color::Reset
    }
}

#[must_use]
pub fn build_flows_table(records: &[IntervalRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Timestamp", "Grid", "Battery"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(record.grid_power)
                .set_alignment(CellAlignment::Right)
                .fg(power_color(record.grid_power)),
            Cell::new(record.battery_power)
                .set_alignment(CellAlignment::Right)
                .fg(power_color(record.battery_power)),
        ]);
    }
    table
}

#[must_use]
pub fn build_tariffs_table(schedule: &TariffSchedule) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Day", "Start", "End", "Rate"]);
    for (day_type, range, rate) in schedule.iter() {
        table.add_row(vec![
            Cell::new(day_type).fg(match day_type {
                DayType::Weekday => Color::Reset,
                DayType::Weekend => Color::Cyan,
            }),
            Cell::new(range.min),
            Cell::new(range.max).add_attribute(Attribute::Dim),
            Cell::new(rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_costs_table(
    records: &[IntervalRecord],
    report: &CostReport,
    schedule: &TariffSchedule,
    duration: TimeDelta,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Date", "Time", "Grid", "Battery", "Grid energy", "Rate", "Grid cost", "Battery cost",
        "Total",
    ]);
    for (record, costs) in records.iter().zip(&report.intervals) {
        let rate = schedule.lookup(DayType::of(&record.timestamp), TimeOfDay::of(&record.timestamp));
        table.add_row(vec![
            Cell::new(record.timestamp.format("%a %b %d")).add_attribute(Attribute::Dim),
            Cell::new(record.timestamp.format("%H:%M:%S")),
            Cell::new(record.grid_power)
                .set_alignment(CellAlignment::Right)
                .fg(power_color(record.grid_power)),
            Cell::new(record.battery_power)
                .set_alignment(CellAlignment::Right)
                .fg(power_color(record.battery_power)),
            Cell::new(energy(record.grid_power, duration)).set_alignment(CellAlignment::Right),
            match rate {
                Some(rate) => Cell::new(rate).set_alignment(CellAlignment::Right),
                None => Cell::new("n/a").set_alignment(CellAlignment::Right).fg(Color::Magenta),
            },
            Cell::new(costs.grid_cost)
                .set_alignment(CellAlignment::Right)
                .fg(cost_color(costs.grid_cost)),
            Cell::new(costs.battery_cost)
                .set_alignment(CellAlignment::Right)
                .fg(cost_color(costs.battery_cost)),
            Cell::new(costs.total_cost)
                .set_alignment(CellAlignment::Right)
                .fg(cost_color(costs.total_cost))
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::core::aggregator::CostRecord;

    #[test]
    fn test_build_tariffs_table() -> crate::prelude::Result {
        let schedule = crate::load::demo::demo_tariffs()?;
        let table = build_tariffs_table(&schedule);
        assert_eq!(table.row_count(), 4);
        Ok(())
    }

    #[test]
    fn test_build_costs_table() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let records = [IntervalRecord {
            timestamp,
            grid_power: Kilowatts(1.0),
            battery_power: Kilowatts(-1.0),
        }];
        let report = CostReport {
            duration_seconds: 60.0,
            intervals: vec![CostRecord {
                timestamp,
                grid_cost: Cost(dec!(0.01)),
                battery_cost: Cost::ZERO,
                total_cost: Cost(dec!(0.01)),
            }],
            total: Cost(dec!(0.01)),
        };
        let table = build_costs_table(&records, &report, &TariffSchedule::default(), TimeDelta::minutes(1));
        assert_eq!(table.row_count(), 1);
        assert!(table.to_string().contains("n/a"));
    }

    #[test]
    fn test_build_flows_table() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let table = build_flows_table(&crate::load::demo::demo_series(start));
        assert_eq!(table.row_count(), 10);
    }

    #[test]
    fn test_cost_color() {
        assert_eq!(cost_color(Cost(dec!(-0.01))), Color::Green);
        assert_eq!(cost_color(Cost::ZERO), Color::Reset);
        assert_eq!(cost_color(Cost(dec!(0.05))), Color::Red);
    }
}
