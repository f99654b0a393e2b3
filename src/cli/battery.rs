//! Battery-related CLI arguments.

use clap::Parser;

use crate::{
    core::battery::BatteryParameters,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Cost of replacing the battery once it has reached the end of its life.
    #[clap(
        short = 'b',
        long = "battery-replacement-cost",
        default_value = "1000",
        env = "BATTERY_REPLACEMENT_COST"
    )]
    pub replacement_cost: Cost,

    /// Rated capacity of the battery in kilowatt-hours.
    #[clap(
        short = 'c',
        long = "battery-capacity-kwh",
        default_value = "1000",
        env = "BATTERY_CAPACITY_KWH"
    )]
    pub capacity: KilowattHours,

    /// Number of charge/discharge cycles the battery is rated for.
    #[clap(
        short = 'r',
        long = "battery-rated-cycles",
        default_value = "1000",
        env = "BATTERY_RATED_CYCLES"
    )]
    pub rated_cycles: u32,
}

impl BatteryArgs {
    pub fn try_into_parameters(self) -> Result<BatteryParameters> {
        let parameters = BatteryParameters::builder()
            .replacement_cost(self.replacement_cost)
            .capacity(self.capacity)
            .rated_cycles(self.rated_cycles)
            .build()
            .context("invalid battery configuration")?;
        info!(
            replacement_cost = %parameters.replacement_cost(),
            capacity = %parameters.capacity(),
            rated_cycles = parameters.rated_cycles(),
            "battery",
        );
        Ok(parameters)
    }
}
