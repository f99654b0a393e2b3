use std::str::FromStr;

use rust_decimal::Decimal;

use crate::prelude::*;

money!(
    /// Amount of money in the tariff currency.
    Cost, suffix: ""
);

impl Cost {
    pub const ONE_CENT: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl FromStr for Cost {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Decimal::from_str(text.trim())
            .map(Self)
            .with_context(|| format!("`{text}` is not a valid amount"))
    }
}
