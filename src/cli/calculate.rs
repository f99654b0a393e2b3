use std::path::PathBuf;

use clap::Parser;

use crate::{
    cli::{
        battery::BatteryArgs,
        report::{OutputFormat, report},
    },
    load::{series::read_series, tariffs::read_tariffs},
    prelude::*,
};

#[derive(Parser)]
pub struct CalculateArgs {
    /// Energy flow series, CSV or JSON.
    #[clap(short = 'e', long = "energy-flow-path", env = "ENERGY_FLOW_PATH")]
    pub energy_flow_path: PathBuf,

    /// Tariff schedule, JSON or TOML.
    #[clap(short = 't', long = "tariffs-path", env = "TARIFFS_PATH")]
    pub tariffs_path: PathBuf,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(long, value_enum, default_value_t, env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

#[instrument(skip_all)]
pub fn calculate(args: &CalculateArgs) -> Result {
    let battery = args.battery.try_into_parameters()?;
    let schedule = read_tariffs(&args.tariffs_path)?;
    let records = read_series(&args.energy_flow_path)?;
    report(&records, &schedule, &battery, args.format)
}
