use crate::{
    prelude::*,
    quantity::{cost::Cost, exact_decimal, rate::KilowattHourRate},
};

quantity!(KilowattHours, suffix: "kWh", precision: 4);

impl KilowattHours {
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Exact zero test, no tolerance.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Price the energy at the given rate, without rounding.
    pub fn try_mul(self, rate: KilowattHourRate) -> Result<Cost> {
        exact_decimal(self.0)?
            .checked_mul(rate.0)
            .map(Cost)
            .with_context(|| format!("cost of {self} at {rate} overflows"))
    }
}
