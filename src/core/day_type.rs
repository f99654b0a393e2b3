use std::fmt::{Display, Formatter};

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum DayType {
    /// Monday to Friday.
    Weekday,

    /// Saturday and Sunday.
    Weekend,
}

impl DayType {
    pub const ALL: [Self; 2] = [Self::Weekday, Self::Weekend];

    pub fn of(date: &impl Datelike) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }
}

impl Display for DayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekday => write!(f, "Weekday"),
            Self::Weekend => write!(f, "Weekend"),
        }
    }
}
