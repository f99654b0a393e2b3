use std::path::Path;

use crate::{
    core::tariff::TariffSchedule,
    load::{FileFormat, in_file, read_to_string},
    prelude::*,
};

/// Read the tariff schedule from a JSON or TOML file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_tariffs(path: &Path) -> Result<TariffSchedule> {
    let text = read_to_string(path)?;
    let schedule = match FileFormat::of(path)? {
        FileFormat::Json => in_file(parse_json(&text), path)?,
        FileFormat::Toml => in_file(parse_toml(&text), path)?,
        FileFormat::Csv => bail!("tariffs must be JSON or TOML: `{}`", path.display()),
    };
    if schedule.is_empty() {
        warn!("the tariff schedule is empty, all grid flows will be free");
    }
    info!(n_ranges = schedule.len(), "loaded tariffs");
    Ok(schedule)
}

pub fn parse_json(text: &str) -> Result<TariffSchedule> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_toml(text: &str) -> Result<TariffSchedule> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use super::*;
    use crate::{core::day_type::DayType, quantity::rate::KilowattHourRate};

    #[test]
    fn test_parse_toml_keeps_declared_order() -> Result {
        let schedule = parse_toml(
            r#"
            [Weekday]
            "18:01-23:59" = 0.15
            "00:00-06:00" = 0.1
            "06:01-18:00" = "0.2"

            [Weekend]
            "00:00-23:59" = 0.05
            "#,
        )?;
        let weekday = schedule.table(DayType::Weekday);
        assert_eq!(weekday.len(), 3);
        assert_eq!(weekday[0].0.to_string(), "18:01-23:59");
        assert_eq!(weekday[2].1, KilowattHourRate(dec!(0.20)));
        assert_eq!(schedule.lookup(DayType::Weekend, "00:00".parse()?), Some(KilowattHourRate(dec!(0.05))));
        Ok(())
    }

    #[test]
    fn test_parse_json() -> Result {
        let schedule = parse_json(r#"{"Weekday": {"00:00-23:59": 0.2}, "Weekend": {}}"#)?;
        assert_eq!(schedule.len(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_unknown_day_type() {
        assert!(parse_json(r#"{"Sunday": {"00:00-23:59": 0.2}}"#).is_err());
        assert!(parse_toml("[Sunday]\n\"00:00-23:59\" = 0.2\n").is_err());
    }

    #[test]
    fn test_read_tariffs_shipped_files() -> Result {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        for name in ["tariffs.json", "tariffs.toml"] {
            let schedule = read_tariffs(&data.join(name))?;
            assert_eq!(schedule.table(DayType::Weekday).len(), 3, "{name}");
            assert_eq!(
                schedule.lookup(DayType::Weekday, "18:00".parse()?),
                Some(KilowattHourRate(dec!(0.20))),
                "{name}",
            );
            assert_eq!(
                schedule.lookup(DayType::Weekend, "18:00".parse()?),
                Some(KilowattHourRate(dec!(0.05))),
                "{name}",
            );
        }
        Ok(())
    }

    #[test]
    fn test_read_tariffs_malformed_names_path() -> Result {
        let directory = tempdir()?;
        let path = directory.path().join("tariffs.json");
        fs::write(&path, r#"{"Weekday": {"6:00-18:00": 0.2}}"#)?;
        let error = read_tariffs(&path).unwrap_err();
        assert!(format!("{error:#}").contains(&path.display().to_string()), "{error:#}");
        Ok(())
    }

    #[test]
    fn test_read_tariffs_rejects_csv() -> Result {
        let directory = tempdir()?;
        let path = directory.path().join("tariffs.csv");
        fs::write(&path, "range,rate\n")?;
        let error = read_tariffs(&path).unwrap_err();
        assert!(format!("{error:#}").contains("tariffs.csv"), "{error:#}");
        Ok(())
    }
}
