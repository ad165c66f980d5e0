use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span between two calendar dates.
/// The start date must be less than or equal to the end date. What the span
/// means in periods is the granularity operations' business, not this
/// type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// End date precedes the start date.
    #[error("Invalid date range: the end ({end}) should be equal or greater than the start ({start})")]
    EndBeforeStart { start: CalendarDate, end: CalendarDate },

    /// Error validating a date component.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::EndBeforeStart` if `end < start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if end < start {
            return Err(RangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                // SAFETY: We just verified separator_count == 1, so find() must succeed
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let start_str = trimmed[..pos].trim();
                let end_str = trimmed[pos + 1..].trim();

                let start = start_str.parse::<CalendarDate>()?;
                let end = end_str.parse::<CalendarDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          (u16, u8, u8),
            end:            (u16, u8, u8),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          (2024, 1, 1),
                end:            (2024, 6, 30),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          (2024, 6, 30),
                end:            (2024, 1, 1),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          (2024, 6, 15),
                end:            (2024, 6, 15),
                should_succeed: true,
                description:    "equal dates (start == end)",
            },
        ];

        for case in &cases {
            let (sy, sm, sd) = case.start;
            let (ey, em, ed) = case.end;
            let range = DateRange::new(date(sy, sm, sd), date(ey, em, ed));

            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(range, Err(RangeError::EndBeforeStart { .. })),
                    "Expected ordering failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_accessors() {
        let start = date(2024, 1, 1);
        let end = date(2024, 6, 30);
        let range = DateRange::new(start, end).expect("failed to construct range for accessor test");

        assert_eq!(range.start(), start);
        assert_eq!(range.end(), end);
        assert_eq!(range.dates(), (start, end));
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 6, 30))
            .expect("failed to construct range for display test");
        assert_eq!(range.to_string(), "2024-01-01/2024-06-30");
    }

    #[test]
    fn test_from_str() {
        let range = "2024-01-01/2024-06-30".parse::<DateRange>().expect("failed to parse range");
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(range.end(), date(2024, 6, 30));
    }

    #[test]
    fn test_from_str_invalid_order() {
        let result = "2024-06-30/2024-01-01".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::EndBeforeStart { .. })));
    }

    #[test]
    fn test_from_str_invalid_component() {
        let result = "2023-02-29/2023-03-31".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::Date(_))));
    }

    #[test]
    fn test_from_str_separator_errors() {
        let result = "2024-01-01".parse::<DateRange>();
        assert!(result.is_err());
        let err = result.expect_err("expected error for missing range separator");
        assert!(err.to_string().contains("No range separator found"));

        let result = "2024-01-01/2024-03-31/2024-06-30".parse::<DateRange>();
        assert!(result.is_err());
        let err = result.expect_err("expected error for too many range separators");
        assert!(err.to_string().contains("Too many '/' separators"));
    }

    #[test]
    fn test_ordering() {
        let range1 = DateRange::new(date(2024, 1, 1), date(2024, 6, 30))
            .expect("failed to construct first range for ordering test");
        let range2 = DateRange::new(date(2024, 2, 1), date(2024, 6, 30))
            .expect("failed to construct second range for ordering test");
        let range3 = DateRange::new(date(2024, 1, 1), date(2024, 12, 31))
            .expect("failed to construct third range for ordering test");

        assert!(range1 < range2);
        assert!(range1 < range3, "same start orders by end date");
    }

    #[test]
    fn test_serde_string_format() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 6, 30))
            .expect("failed to construct range for serde test");

        let json = serde_json::to_string(&range).expect("failed to serialize range to JSON");
        // Should be a JSON string, not an object
        assert_eq!(json, r#""2024-01-01/2024-06-30""#);

        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize range from JSON");
        assert_eq!(range, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid_order() {
        let result: Result<DateRange, _> = serde_json::from_str(r#""2024-06-30/2024-01-01""#);
        assert!(result.is_err());
    }
}
