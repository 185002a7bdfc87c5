//! Calendar date ranges and per-day timestamps.
//!
//! A [`DateRange`] is an inclusive span of calendar days. Iterating it
//! with [`DateRange::days`] yields each day exactly once in increasing
//! order; [`DayStamp`] pins a day to midnight in a concrete offset.

use std::fmt;

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone,
};
use everyday_git::Time;

use crate::error::{Error, Result};

/// Format used for plain calendar dates (`2024-01-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from `start` to `end` inclusive.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns error if either date is malformed or the range is inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, DATE_FORMAT)?;
        let end = NaiveDate::parse_from_str(end, DATE_FORMAT)?;
        Self::new(start, end)
    }

    /// Build a range without checking its bounds; callers guarantee
    /// `start <= end`.
    pub(crate) const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, counting both ends.
    #[must_use]
    pub fn day_count(&self) -> usize {
        let span = self.end.signed_duration_since(self.start).num_days();
        usize::try_from(span).map_or(0, |days| days + 1)
    }

    /// Iterate every day of the range in increasing order.
    #[must_use]
    pub const fn days(&self) -> DateCursor {
        DateCursor {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateCursor;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Iterator over the days of a [`DateRange`], advancing one day per step.
#[derive(Debug, Clone)]
pub struct DateCursor {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateCursor {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|day| *day <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |next| {
            DateRange {
                start: next,
                end: self.end,
            }
            .day_count()
        });
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateCursor {}

/// A calendar day pinned to its midnight in a concrete UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStamp {
    day: NaiveDate,
    at: DateTime<FixedOffset>,
}

impl DayStamp {
    /// Midnight of `day` in the given timezone.
    ///
    /// When midnight falls into a DST gap the earliest valid wall-clock
    /// hour of that day is used instead.
    #[must_use]
    pub fn in_zone<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Self {
        let midnight = day.and_time(NaiveTime::MIN);
        let at = (0..24)
            .find_map(|hour| {
                day.and_hms_opt(hour, 0, 0)
                    .and_then(|local| tz.from_local_datetime(&local).earliest())
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&midnight));

        Self {
            day,
            at: at.fixed_offset(),
        }
    }

    /// Midnight of `day` in the machine's local timezone.
    #[must_use]
    pub fn local(day: NaiveDate) -> Self {
        Self::in_zone(day, &Local)
    }

    /// The calendar day this stamp was created for.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// The pinned instant.
    #[must_use]
    pub const fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }

    /// ISO-8601 form with whole seconds and an explicit offset,
    /// e.g. `2024-01-01T00:00:00-03:00`.
    #[must_use]
    pub fn iso(&self) -> String {
        self.at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// The same instant as a git timestamp.
    #[must_use]
    pub fn git_time(&self) -> Time {
        let offset_minutes = self.at.offset().local_minus_utc() / 60;
        Time::new(self.at.timestamp(), offset_minutes)
    }
}

impl fmt::Display for DayStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso())
    }
}
