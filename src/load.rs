//! Input adapters: everything that turns files into core types.

pub mod demo;
pub mod series;
pub mod tariffs;
mod timestamp;

use std::{fs, path::Path};

use crate::prelude::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FileFormat {
    Csv,
    Json,
    Toml,
}

impl FileFormat {
    fn of(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase)
            .with_context(|| format!("`{}` has no file extension", path.display()))?;
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => bail!("unsupported file extension `.{extension}` of `{}`", path.display()),
        }
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

/// Attach the path to a parsing error.
fn in_file<T>(result: Result<T>, path: &Path) -> Result<T> {
    result.with_context(|| format!("failed to parse `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_of() -> Result {
        assert_eq!(FileFormat::of(Path::new("flows.csv"))?, FileFormat::Csv);
        assert_eq!(FileFormat::of(Path::new("tariffs.JSON"))?, FileFormat::Json);
        assert_eq!(FileFormat::of(Path::new("dir/tariffs.toml"))?, FileFormat::Toml);
        assert!(FileFormat::of(Path::new("flows.pickle")).is_err());
        assert!(FileFormat::of(Path::new("flows")).is_err());
        Ok(())
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let error = read_to_string(Path::new("/nonexistent/tariffs.json")).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/tariffs.json"));
    }
}
