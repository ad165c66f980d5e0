//! Week boundary rules and the anchor convention that assigns a week to a
//! containing month or year.
//!
//! A week belongs to whichever month/year contains its anchor day, the
//! fourth day of the week (start + 3). Every week-in-month and week-in-year
//! computation in this crate goes through [`anchor_day`] so the rule exists
//! in exactly one place.

use crate::consts::{ANCHOR_OFFSET_DAYS, DAYS_IN_WEEK, JANUARY, MIN_DAY};
use crate::date::{CalendarDate, DateError};
use crate::types::Weekday;

/// The most recent date (on or before `date`) whose weekday is
/// `first_weekday`. Returns `date` itself when already aligned.
///
/// # Errors
/// Returns `DateError::OutOfRange` when the week start would precede the
/// supported calendar (the first days of year 1).
pub fn start_of_week(
    date: CalendarDate,
    first_weekday: Weekday,
) -> Result<CalendarDate, DateError> {
    date.add_days(-date.weekday().offset_from(first_weekday))
}

/// The anchor day of `date`'s week: start of week + 3 days. Its month and
/// year decide which month/year the whole week is attributed to.
///
/// # Errors
/// Returns `DateError::OutOfRange` near the edges of the supported calendar.
pub fn anchor_day(date: CalendarDate, first_weekday: Weekday) -> Result<CalendarDate, DateError> {
    start_of_week(date, first_weekday)?.add_days(ANCHOR_OFFSET_DAYS)
}

/// Whole-week offset from `earlier`'s week to `later`'s week, measured
/// between anchor days. Lenient: neither date needs to be week-aligned.
/// Requires `later >= earlier`; public callers validate ordering first.
///
/// # Errors
/// Returns `DateError::OutOfRange` near the edges of the supported calendar.
pub fn weeks_between(
    earlier: CalendarDate,
    later: CalendarDate,
    first_weekday: Weekday,
) -> Result<i64, DateError> {
    debug_assert!(later >= earlier);
    let later_anchor = anchor_day(later, first_weekday)?;
    let earlier_anchor = anchor_day(earlier, first_weekday)?;
    Ok((later_anchor.days_since(earlier_anchor) + 1) / DAYS_IN_WEEK)
}

/// Start date of the first week attributed to (year, month): the earliest
/// week whose anchor day falls inside that month.
///
/// When the 1st lies within the first 4 days of its week (offset <= 3), that
/// week anchors into this month and may start up to 3 days before the 1st;
/// otherwise the first anchoring week starts after the 1st.
///
/// # Errors
/// Returns `DateError::InvalidYear`/`InvalidMonth` for bad components and
/// `DateError::OutOfRange` when the week start precedes year 1.
pub fn first_week_of_month(
    year: u16,
    month: u8,
    first_weekday: Weekday,
) -> Result<CalendarDate, DateError> {
    let first_of_month = CalendarDate::new(year, month, MIN_DAY)?;
    let offset = first_of_month.weekday().offset_from(first_weekday);
    let anchor_delta = if offset <= ANCHOR_OFFSET_DAYS {
        ANCHOR_OFFSET_DAYS - offset
    } else {
        DAYS_IN_WEEK + ANCHOR_OFFSET_DAYS - offset
    };
    first_of_month.add_days(anchor_delta - ANCHOR_OFFSET_DAYS)
}

/// Start date of the first week attributed to `year`.
///
/// # Errors
/// Same as [`first_week_of_month`].
pub fn first_week_of_year(year: u16, first_weekday: Weekday) -> Result<CalendarDate, DateError> {
    first_week_of_month(year, JANUARY, first_weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_start_of_week_identity_when_aligned() {
        let monday = date(2024, 6, 10);
        assert_eq!(start_of_week(monday, Weekday::Monday).unwrap(), monday);

        let sunday = date(2024, 6, 9);
        assert_eq!(start_of_week(sunday, Weekday::Sunday).unwrap(), sunday);
    }

    #[test]
    fn test_start_of_week_rolls_back() {
        let wednesday = date(2024, 6, 12);
        assert_eq!(
            start_of_week(wednesday, Weekday::Monday).unwrap(),
            date(2024, 6, 10)
        );
        assert_eq!(
            start_of_week(wednesday, Weekday::Sunday).unwrap(),
            date(2024, 6, 9)
        );
    }

    #[test]
    fn test_start_of_week_across_month_and_year() {
        // Week containing 2023-01-01 (a Sunday) starts in December 2022
        assert_eq!(
            start_of_week(date(2023, 1, 1), Weekday::Monday).unwrap(),
            date(2022, 12, 26)
        );
    }

    #[test]
    fn test_anchor_day_is_fourth_day() {
        assert_eq!(
            anchor_day(date(2024, 6, 12), Weekday::Monday).unwrap(),
            date(2024, 6, 13)
        );
        // The anchor can land in a different month than the date
        assert_eq!(
            anchor_day(date(2024, 7, 31), Weekday::Monday).unwrap(),
            date(2024, 8, 1)
        );
        assert_eq!(
            anchor_day(date(2023, 1, 1), Weekday::Monday).unwrap(),
            date(2022, 12, 29)
        );
    }

    #[test]
    fn test_weeks_between_same_week() {
        assert_eq!(
            weeks_between(date(2024, 6, 10), date(2024, 6, 16), Weekday::Monday).unwrap(),
            0
        );
    }

    #[test]
    fn test_weeks_between_aligned_span() {
        assert_eq!(
            weeks_between(date(2024, 5, 27), date(2024, 6, 23), Weekday::Monday).unwrap(),
            3
        );
    }

    #[test]
    fn test_weeks_between_cross_year() {
        assert_eq!(
            weeks_between(date(2023, 12, 25), date(2024, 3, 31), Weekday::Monday).unwrap(),
            13
        );
    }

    #[test]
    fn test_weeks_between_misaligned_dates() {
        // Saturday to Friday, neither a week boundary
        assert_eq!(
            weeks_between(date(2024, 5, 25), date(2024, 6, 21), Weekday::Monday).unwrap(),
            4
        );
    }

    #[test]
    fn test_first_week_of_month_cases() {
        struct TestCase {
            year: u16,
            month: u8,
            expected: (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                month: 1,
                expected: (2024, 1, 1),
                description: "1st is the week start itself",
            },
            TestCase {
                year: 2024,
                month: 6,
                expected: (2024, 6, 3),
                description: "1st (Saturday) belongs to May's last week",
            },
            TestCase {
                year: 2024,
                month: 5,
                expected: (2024, 4, 29),
                description: "first anchoring week starts in April",
            },
            TestCase {
                year: 2024,
                month: 2,
                expected: (2024, 1, 29),
                description: "1st (Thursday) anchors its week into February",
            },
            TestCase {
                year: 2022,
                month: 1,
                expected: (2022, 1, 3),
                description: "1st (Saturday) belongs to December's last week",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.expected;
            assert_eq!(
                first_week_of_month(case.year, case.month, Weekday::Monday).unwrap(),
                date(y, m, d),
                "{}-{:02}: {}",
                case.year,
                case.month,
                case.description
            );
        }
    }

    #[test]
    fn test_first_week_of_month_custom_first_weekday() {
        // With Sunday-first weeks, June 2024 opens on Sunday the 2nd
        assert_eq!(
            first_week_of_month(2024, 6, Weekday::Sunday).unwrap(),
            date(2024, 6, 2)
        );
    }

    #[test]
    fn test_first_week_of_year() {
        assert_eq!(
            first_week_of_year(2023, Weekday::Monday).unwrap(),
            date(2023, 1, 2)
        );
        assert_eq!(
            first_week_of_year(2024, Weekday::Monday).unwrap(),
            date(2024, 1, 1)
        );
        assert_eq!(
            first_week_of_year(2022, Weekday::Monday).unwrap(),
            date(2022, 1, 3)
        );
    }

    #[test]
    fn test_calendar_edge_errors() {
        // The week of 0001-01-01 under a Sunday-first rule would start in
        // year zero
        assert!(matches!(
            start_of_week(date(1, 1, 1), Weekday::Sunday),
            Err(DateError::OutOfRange)
        ));
        assert!(matches!(
            first_week_of_month(1, 1, Weekday::Sunday),
            Err(DateError::OutOfRange)
        ));
        // Monday-first is fine: 0001-01-01 is a Monday
        assert_eq!(
            first_week_of_month(1, 1, Weekday::Monday).unwrap(),
            date(1, 1, 1)
        );
    }
}
