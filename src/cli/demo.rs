use chrono::{Local, Timelike};
use clap::Parser;

use crate::{
    cli::{
        battery::BatteryArgs,
        report::{OutputFormat, report},
    },
    load::demo::{demo_series, demo_tariffs},
    prelude::*,
    tables::build_flows_table,
};

#[derive(Parser)]
pub struct DemoArgs {
    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(long, value_enum, default_value_t, env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

#[instrument(skip_all)]
pub fn demo(args: &DemoArgs) -> Result {
    let battery = args.battery.try_into_parameters()?;
    let now = Local::now().naive_local();
    let start = now.with_second(0).and_then(|now| now.with_nanosecond(0)).unwrap_or(now);
    let records = demo_series(start);
    if matches!(args.format, OutputFormat::Table) {
        println!("{}", build_flows_table(&records));
    }
    report(&records, &demo_tariffs()?, &battery, args.format)
}
