use std::{io::Read, path::Path};

use itertools::Itertools;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::interval::IntervalRecord,
    load::{FileFormat, in_file, read_to_string, timestamp::Timestamp},
    prelude::*,
    quantity::power::Kilowatts,
};

/// Single row of an energy flow file.
#[serde_as]
#[derive(Deserialize)]
struct Row {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(alias = "datetime")]
    timestamp: Timestamp,

    #[serde(rename = "grid_power_kw", alias = "grid_energy_flow_kW")]
    grid_power: Kilowatts,

    #[serde(rename = "battery_power_kw", alias = "battery_energy_flow_kW")]
    battery_power: Kilowatts,
}

impl From<Row> for IntervalRecord {
    fn from(row: Row) -> Self {
        Self { timestamp: row.timestamp.0, grid_power: row.grid_power, battery_power: row.battery_power }
    }
}

/// Read the energy flow series from a CSV or JSON file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_series(path: &Path) -> Result<Vec<IntervalRecord>> {
    let records = match FileFormat::of(path)? {
        FileFormat::Csv => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open `{}`", path.display()))?;
            in_file(parse_csv(file), path)?
        }
        FileFormat::Json => in_file(parse_json(&read_to_string(path)?), path)?,
        FileFormat::Toml => bail!("energy flows must be CSV or JSON: `{}`", path.display()),
    };
    let records = in_file(into_sorted(records), path)?;
    info!(n_records = records.len(), "loaded energy flows");
    Ok(records)
}

/// Parse CSV with the `timestamp,grid_power_kw,battery_power_kw` header.
pub fn parse_csv(reader: impl Read) -> Result<Vec<IntervalRecord>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<Row>()
        .enumerate()
        .map(|(index, row)| {
            row.map(IntervalRecord::from).with_context(|| format!("invalid CSV record #{}", index + 1))
        })
        .collect()
}

/// Parse a JSON array of records.
pub fn parse_json(text: &str) -> Result<Vec<IntervalRecord>> {
    let rows: Vec<Row> = serde_json::from_str(text).context("invalid JSON energy flows")?;
    Ok(rows.into_iter().map(IntervalRecord::from).collect())
}

/// Order the records by timestamp, refusing duplicates.
fn into_sorted(mut records: Vec<IntervalRecord>) -> Result<Vec<IntervalRecord>> {
    if !records.is_sorted_by_key(|record| record.timestamp) {
        warn!("energy flows are not sorted by timestamp, sorting");
        records.sort_by_key(|record| record.timestamp);
    }
    if let Some((duplicate, _)) =
        records.iter().tuple_windows().find(|(lhs, rhs)| lhs.timestamp == rhs.timestamp)
    {
        bail!("duplicate energy flow timestamp: {}", duplicate.timestamp);
    }
    Ok(records)
}
