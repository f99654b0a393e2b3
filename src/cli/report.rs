use chrono::TimeDelta;
use itertools::Itertools;

use crate::{
    core::{
        aggregator::Aggregator,
        battery::BatteryParameters,
        interval::{IntervalRecord, infer_duration},
        tariff::TariffSchedule,
    },
    prelude::*,
    tables::{build_costs_table, build_tariffs_table},
};

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,

    /// Pretty-printed JSON report.
    Json,
}

/// Price the series and print the report to stdout.
#[instrument(skip_all)]
pub fn report(
    records: &[IntervalRecord],
    schedule: &TariffSchedule,
    battery: &BatteryParameters,
    format: OutputFormat,
) -> Result {
    let duration = infer_duration(records)?;
    info!(duration_seconds = duration.as_seconds_f64(), "inferred interval duration");
    warn_on_irregular_spacing(records, duration);

    let report = Aggregator::builder()
        .schedule(schedule)
        .battery(battery)
        .duration(duration)
        .build()
        .aggregate(records)?;

    match format {
        OutputFormat::Table => {
            println!("{}", build_tariffs_table(schedule));
            println!("{}", build_costs_table(records, &report, schedule, duration));
            println!("Total cost for the whole time window: {}", report.total);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// The first gap is applied to every interval, so let the user know when it is off elsewhere.
fn warn_on_irregular_spacing(records: &[IntervalRecord], duration: TimeDelta) -> usize {
    let n_irregular = records
        .iter()
        .tuple_windows()
        .filter(|(lhs, rhs)| rhs.timestamp - lhs.timestamp != duration)
        .count();
    if n_irregular != 0 {
        warn!(n_irregular, %duration, "the series is not evenly spaced, using the first interval");
    }
    n_irregular
}
