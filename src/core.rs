pub mod aggregator;
pub mod battery;
pub mod cost_model;
pub mod day_type;
pub mod interval;
pub mod tariff;
pub mod time_of_day;
