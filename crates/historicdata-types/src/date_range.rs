//! Date range covered by a collection request.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// A range of dates for data retrieval.
///
/// The service takes the range apart into day/month/year components on the
/// wire; see [`CollectionParams`](crate::CollectionParams).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_single_day() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        let range = DateRange::single_day(date);

        assert_eq!(range.total_days(), 1);
        assert!(range.contains(date));
    }

    #[test]
    fn test_contains() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(NaiveDate::from_ymd_opt(2021, 3, 15).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()));
    }
}
