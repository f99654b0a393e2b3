use bon::Builder;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{
    core::{
        battery::BatteryParameters,
        cost_model::{battery_cost, grid_cost},
        interval::IntervalRecord,
        tariff::TariffSchedule,
    },
    prelude::*,
    quantity::cost::Cost,
};

/// Costs of a single interval.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostRecord {
    pub timestamp: NaiveDateTime,
    pub grid_cost: Cost,
    pub battery_cost: Cost,

    /// Sum of the already rounded grid and battery costs.
    pub total_cost: Cost,
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct CostReport {
    pub duration_seconds: f64,

    /// One record per input interval, in the input order.
    pub intervals: Vec<CostRecord>,

    /// Rounded sum of the rounded interval totals.
    pub total: Cost,
}

/// Prices every interval independently with the same tariffs, battery and duration.
#[derive(Builder)]
pub struct Aggregator<'a> {
    schedule: &'a TariffSchedule,
    battery: &'a BatteryParameters,
    duration: TimeDelta,
}

impl Aggregator<'_> {
    pub fn cost(&self, record: &IntervalRecord) -> Result<CostRecord> {
        let grid_cost =
            grid_cost(record.grid_power, record.timestamp, self.duration, self.schedule)
                .with_context(|| format!("failed to price the grid flow at {}", record.timestamp))?;
        let battery_cost = battery_cost(self.battery, record.battery_power, self.duration)
            .with_context(|| format!("failed to price the battery flow at {}", record.timestamp))?;
        let total_cost = grid_cost
            .checked_add(battery_cost)
            .with_context(|| format!("total cost at {} overflows", record.timestamp))?;
        Ok(CostRecord { timestamp: record.timestamp, grid_cost, battery_cost, total_cost })
    }

    #[instrument(skip_all, fields(n_records = records.len()))]
    pub fn aggregate(&self, records: &[IntervalRecord]) -> Result<CostReport> {
        let intervals = records.iter().map(|record| self.cost(record)).collect::<Result<Vec<_>>>()?;
        let total = intervals
            .iter()
            .try_fold(Cost::ZERO, |total, record| {
                total.checked_add(record.total_cost).with_context(|| {
                    format!("total cost overflows at the interval of {}", record.timestamp)
                })
            })?
            .round();
        info!(%total, "aggregated");
        Ok(CostReport { duration_seconds: self.duration.as_seconds_f64(), intervals, total })
    }
}
