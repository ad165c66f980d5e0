//! Hierarchical period location: where a date's sub-period sits inside a
//! containing period, and where the container stood N periods earlier.
//!
//! Valid pairs follow the nesting order `Daily < Weekly < Monthly < Yearly`,
//! reflexive pairs included. Weekly sub-periods attribute themselves to a
//! month or year through the week anchor rule, so a week straddling a
//! boundary counts once, in exactly one container.
//!
//! All helpers use the primary first weekday; there is no per-call override
//! here.

use crate::Granularity;
use crate::consts::{DAYS_IN_WEEK, JANUARY, MIN_DAY, MIN_YEAR};
use crate::date::{CalendarDate, DateError};
use crate::types::{Weekday, month_from_ordinal, month_ordinal};
use crate::week;

/// Error type for hierarchical period location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// The sub granularity does not nest inside the container.
    #[error("Granularity {sub} does not nest within {container}")]
    InvalidNesting {
        sub: Granularity,
        container: Granularity,
    },

    /// Date arithmetic left the supported calendar.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Start of the container period that `date` belongs to, expressed as a
/// sub-period start date.
///
/// For daily subs this is the container's first day; for weekly subs it is
/// the container's first anchoring week start (which may precede the
/// container's first day); reflexive pairs yield the period start of `date`
/// itself.
///
/// # Errors
/// `LocateError::InvalidNesting` when `sub` does not nest in `container`;
/// `LocateError::Date` near the edges of the supported calendar.
pub fn container_start(
    sub: Granularity,
    container: Granularity,
    date: CalendarDate,
) -> Result<CalendarDate, LocateError> {
    use Granularity::{Daily, Monthly, Weekly, Yearly};

    let start = match (sub, container) {
        (Daily, Daily) => date,
        (Daily | Weekly, Weekly) => week::start_of_week(date, Weekday::default())?,
        (Daily | Monthly, Monthly) => date.first_of_month(),
        (Daily | Monthly | Yearly, Yearly) => date.first_of_year(),
        (Weekly, Monthly) => {
            let anchor = week::anchor_day(date, Weekday::default())?;
            week::first_week_of_month(anchor.year(), anchor.month(), Weekday::default())?
        }
        (Weekly, Yearly) => {
            let anchor = week::anchor_day(date, Weekday::default())?;
            week::first_week_of_year(anchor.year(), Weekday::default())?
        }
        (sub, container) => return Err(LocateError::InvalidNesting { sub, container }),
    };
    Ok(start)
}

/// 0-based index of `date`'s sub-period within its container period:
/// day-of-week, day-of-month, day-of-year, week-of-month, week-of-year, or
/// month-of-year depending on the pair. Reflexive pairs index 0.
///
/// # Errors
/// Same as [`container_start`].
pub fn index_within(
    sub: Granularity,
    container: Granularity,
    date: CalendarDate,
) -> Result<u32, LocateError> {
    use Granularity::{Daily, Monthly, Weekly, Yearly};

    let index = match (sub, container) {
        (Daily, Daily) | (Weekly, Weekly) | (Monthly, Monthly) | (Yearly, Yearly) => 0,
        (Daily, Weekly | Monthly | Yearly) => {
            date.days_since(container_start(sub, container, date)?)
        }
        (Weekly, Monthly | Yearly) => {
            date.days_since(container_start(sub, container, date)?) / DAYS_IN_WEEK
        }
        (Monthly, Yearly) => i64::from(date.month()) - 1,
        (sub, container) => return Err(LocateError::InvalidNesting { sub, container }),
    };
    // The container start never follows `date`, and no container holds more
    // sub-periods than a year holds days
    Ok(index as u32)
}

/// Start of the container period `steps_back` containers before the one
/// holding `date`, expressed as a sub-period start date (see
/// [`container_start`]). `steps_back` of 0 is the current container.
///
/// Month stepping runs the month-ordinal rollover in reverse; nothing here
/// approximates month or year lengths by a fixed day count.
///
/// # Errors
/// `LocateError::InvalidNesting` when `sub` does not nest in `container`;
/// `LocateError::Date` when the result precedes year 1.
pub fn prior_start(
    sub: Granularity,
    container: Granularity,
    date: CalendarDate,
    steps_back: u32,
) -> Result<CalendarDate, LocateError> {
    use Granularity::{Daily, Monthly, Weekly, Yearly};

    let steps = i64::from(steps_back);
    let start = match (sub, container) {
        (Daily, Daily) => date.add_days(-steps)?,
        (Daily | Weekly, Weekly) => {
            week::start_of_week(date, Weekday::default())?.add_days(-steps * DAYS_IN_WEEK)?
        }
        (Daily | Monthly, Monthly) => shift_month_start(date, -steps)?,
        (Daily | Monthly | Yearly, Yearly) => prior_year_start(date.year(), steps)?,
        (Weekly, Monthly) => {
            let anchor = week::anchor_day(date, Weekday::default())?;
            let month_start = shift_month_start(anchor, -steps)?;
            week::first_week_of_month(month_start.year(), month_start.month(), Weekday::default())?
        }
        (Weekly, Yearly) => {
            let anchor = week::anchor_day(date, Weekday::default())?;
            let year_start = prior_year_start(anchor.year(), steps)?;
            week::first_week_of_year(year_start.year(), Weekday::default())?
        }
        (sub, container) => return Err(LocateError::InvalidNesting { sub, container }),
    };
    Ok(start)
}

/// The monthly period start `months` whole months from `date`'s month
/// (negative steps backwards).
fn shift_month_start(date: CalendarDate, months: i64) -> Result<CalendarDate, DateError> {
    let (year, month) = month_from_ordinal(month_ordinal(date.year(), date.month()) + months)?;
    CalendarDate::new(year, month, MIN_DAY)
}

/// January 1st of the year `steps_back` years before `year`.
fn prior_year_start(year: u16, steps_back: i64) -> Result<CalendarDate, DateError> {
    let target = i64::from(year) - steps_back;
    if target < i64::from(MIN_YEAR) {
        return Err(DateError::OutOfRange);
    }
    CalendarDate::new(target as u16, JANUARY, MIN_DAY)
}
