//! Run configuration for a backfill pass.

use std::path::PathBuf;

use chrono::{FixedOffset, NaiveDate};

use crate::date_range::{DateRange, DayStamp};

/// First day written by the default run.
pub const DEFAULT_START: &str = "2024-01-01";

/// Last day written by the default run (inclusive).
pub const DEFAULT_END: &str = "2025-07-17";

/// Tracked file, relative to the repository working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Remote preferred for the push, and also the fallback name when no
/// remote by that name is configured.
pub const DEFAULT_REMOTE: &str = "origin";

const DEFAULT_RANGE: DateRange = match (
    NaiveDate::from_ymd_opt(2024, 1, 1),
    NaiveDate::from_ymd_opt(2025, 7, 17),
) {
    (Some(start), Some(end)) => DateRange::between(start, end),
    _ => panic!("default backfill dates are valid calendar dates"),
};

/// Parameters of a single backfill pass.
///
/// The binary always runs with [`BackfillConfig::default`]; other values
/// exist so the engine can be driven over small ranges.
#[derive(Debug, Clone)]
pub struct BackfillConfig {
    /// Days to commit, in order.
    pub range: DateRange,

    /// Data file path, relative to the working directory.
    pub data_file: PathBuf,

    /// Remote name to look for among the configured remotes.
    pub remote: String,

    /// Offset used for day stamps; `None` means the local timezone.
    pub utc_offset: Option<FixedOffset>,
}

impl BackfillConfig {
    /// Config for `range` with every other setting at its default.
    #[must_use]
    pub fn for_range(range: DateRange) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// Pin day stamps to a fixed offset instead of the local timezone.
    #[must_use]
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Stamp a day according to the configured offset.
    #[must_use]
    pub fn stamp(&self, day: NaiveDate) -> DayStamp {
        match &self.utc_offset {
            Some(offset) => DayStamp::in_zone(day, offset),
            None => DayStamp::local(day),
        }
    }
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            remote: DEFAULT_REMOTE.into(),
            utc_offset: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackfillConfig::default();

        assert_eq!(
            config.range,
            DateRange::parse(DEFAULT_START, DEFAULT_END).unwrap()
        );
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.remote, "origin");
        assert!(config.utc_offset.is_none());
    }

    #[test]
    fn test_for_range_keeps_other_defaults() {
        let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
        let config = BackfillConfig::for_range(range);

        assert_eq!(config.range.day_count(), 3);
        assert_eq!(config.remote, DEFAULT_REMOTE);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_stamp_uses_fixed_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let config = BackfillConfig::default().with_utc_offset(offset);
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        assert_eq!(config.stamp(day).iso(), "2024-07-01T00:00:00+05:30");
    }
}
