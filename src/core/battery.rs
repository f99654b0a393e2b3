use bon::bon;

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
};

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct BatteryParameters {
    /// Cost of replacing the battery once it has reached the end of its life.
    replacement_cost: Cost,

    /// Rated capacity.
    capacity: KilowattHours,

    /// Number of full charge/discharge cycles the battery is rated for.
    rated_cycles: u32,
}

#[bon]
impl BatteryParameters {
    #[builder]
    pub fn new(replacement_cost: Cost, capacity: KilowattHours, rated_cycles: u32) -> Result<Self> {
        if replacement_cost < Cost::ZERO {
            bail!("invalid battery replacement cost: {replacement_cost}");
        }
        if capacity.0.is_nan() || capacity.0.is_infinite() || capacity <= KilowattHours::ZERO {
            bail!("invalid battery capacity: {capacity}");
        }
        if rated_cycles == 0 {
            bail!("battery rated cycles must be positive");
        }
        Ok(Self { replacement_cost, capacity, rated_cycles })
    }
}

impl BatteryParameters {
    pub const fn replacement_cost(&self) -> Cost {
        self.replacement_cost
    }

    pub const fn capacity(&self) -> KilowattHours {
        self.capacity
    }

    #[must_use]
    pub const fn rated_cycles(&self) -> u32 {
        self.rated_cycles
    }

    /// Fraction of the battery life consumed by moving the energy in either direction.
    ///
    /// Every rated cycle is one charge plus one discharge, hence the halving.
    #[must_use]
    pub fn degradation(&self, energy: KilowattHours) -> f64 {
        energy.abs().0 / self.capacity.0 / (f64::from(self.rated_cycles) / 2.0)
    }
}
