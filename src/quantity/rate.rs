use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::{prelude::*, quantity::exact_decimal};

money!(
    /// Currency units per kilowatt-hour, normalised to two decimal places.
    KilowattHourRate, suffix: "/kWh"
);

impl KilowattHourRate {
    /// Normalise a float rate to the two-decimal fixed point.
    pub fn try_from_f64(value: f64) -> Result<Self> {
        Ok(Self(exact_decimal(value)?).round())
    }
}

impl FromStr for KilowattHourRate {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let value = Decimal::from_str(text.trim())
            .with_context(|| format!("`{text}` is not a valid rate"))?;
        Ok(Self(value).round())
    }
}

impl<'de> Deserialize<'de> for KilowattHourRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        /// Rates arrive either as plain numbers or as decimal strings.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Self::try_from_f64(value),
            Raw::Text(text) => text.parse(),
        }
        .map_err(|error| D::Error::custom(format!("{error:#}")))
    }
}
