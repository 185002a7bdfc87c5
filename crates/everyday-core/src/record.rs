//! The tracked data file written once per backfilled day.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date_range::DayStamp;
use crate::error::{Error, Result};

/// Contents of the data file: a single `date` key holding an ISO stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayRecord {
    pub date: String,
}

impl DayRecord {
    /// Build the record for a stamped day.
    #[must_use]
    pub fn new(stamp: &DayStamp) -> Self {
        Self { date: stamp.iso() }
    }

    /// Write the record as compact JSON, replacing any existing content.
    ///
    /// # Errors
    /// Returns [`Error::Write`] if the file cannot be written.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_vec(self)?;
        fs::write(path, content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a record back from disk.
    ///
    /// # Errors
    /// Returns error if the file can't be read or isn't a valid record.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The calendar day the stored stamp refers to, in its own offset.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the stamp is not RFC 3339.
    pub fn day(&self) -> Result<NaiveDate> {
        Ok(DateTime::parse_from_rfc3339(&self.date)?.date_naive())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use tempfile::TempDir;

    fn stamp(day: &str) -> DayStamp {
        let day = NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
        DayStamp::in_zone(day, &FixedOffset::west_opt(3 * 3600).unwrap())
    }

    #[test]
    fn test_write_is_compact_single_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");

        DayRecord::new(&stamp("2024-01-01")).write(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"date":"2024-01-01T00:00:00-03:00"}"#);
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        fs::write(&path, "x".repeat(256)).unwrap();

        DayRecord::new(&stamp("2024-03-01")).write(&path).unwrap();

        let loaded = DayRecord::load(&path).unwrap();
        assert_eq!(loaded.date, "2024-03-01T00:00:00-03:00");
    }

    #[test]
    fn test_day_parses_back_to_same_calendar_day() {
        for day in ["2024-01-01", "2024-02-29", "2024-12-31", "2025-07-17"] {
            let record = DayRecord::new(&stamp(day));
            assert_eq!(record.day().unwrap().format("%Y-%m-%d").to_string(), day);
        }
    }

    #[test]
    fn test_load_rejects_extra_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        fs::write(&path, r#"{"date":"2024-01-01T00:00:00Z","extra":1}"#).unwrap();

        assert!(matches!(DayRecord::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("data.json");

        let result = DayRecord::new(&stamp("2024-01-01")).write(&path);
        assert!(matches!(result, Err(Error::Write { .. })));
    }
}
