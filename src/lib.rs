mod consts;
mod date;
mod locate;
mod prelude;
mod range;
mod types;
mod week;

pub use consts::*;
pub use date::{CalendarDate, DateError};
pub use locate::{LocateError, container_start, index_within, prior_start};
pub use range::{DateRange, RangeError};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use week::{anchor_day, first_week_of_month, first_week_of_year, start_of_week, weeks_between};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use types::{month_from_ordinal, month_ordinal};

/// The unit size of a reporting period: one day, week, month, or year.
///
/// A closed set of stateless strategies sharing one operation contract.
/// Declaration order is the nesting order (`Daily < Weekly < Monthly <
/// Yearly`), which the hierarchical locator helpers rely on.
///
/// The strict operations (`validate_completion`, `end_date`) demand exact
/// period boundaries; `range_length` is deliberately lenient and counts the
/// periods a span touches even when its endpoints are misaligned. Both
/// behaviors are load-bearing for period-bucketed reporting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Every date is its own period
    #[display(fmt = "daily")]
    Daily,
    /// Periods run from a first weekday for seven days
    #[display(fmt = "weekly")]
    Weekly,
    /// Periods run from the 1st to the last day of a month
    #[display(fmt = "monthly")]
    Monthly,
    /// Periods run from January 1st to December 31st
    #[display(fmt = "yearly")]
    Yearly,
}

/// Error type for granularity span operations.
///
/// Every variant signals caller misuse; none is retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// End date precedes the start date.
    #[error("Invalid date span: the end {end} should be equal or greater than the start {start}")]
    EndBeforeStart {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// A date misses the period boundary the operation requires.
    #[error("Date {date} does not land on a {granularity} period boundary")]
    Misaligned {
        granularity: Granularity,
        date: CalendarDate,
    },

    /// Period counts start at one.
    #[error("Invalid period count: {0} (must be at least 1)")]
    InvalidPeriodCount(u32),

    /// Date arithmetic left the supported calendar.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl Granularity {
    /// Symbolic name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Start date of the period containing `date`, under the primary first
    /// weekday.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the edges of the supported
    /// calendar (weekly periods only).
    pub fn period_start(self, date: CalendarDate) -> Result<CalendarDate, DateError> {
        self.period_start_with(date, Weekday::default())
    }

    /// Start date of the period containing `date`. Only `Weekly` consults
    /// `first_weekday`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the edges of the supported
    /// calendar (weekly periods only).
    pub fn period_start_with(
        self,
        date: CalendarDate,
        first_weekday: Weekday,
    ) -> Result<CalendarDate, DateError> {
        match self {
            Self::Daily => Ok(date),
            Self::Weekly => week::start_of_week(date, first_weekday),
            Self::Monthly => Ok(date.first_of_month()),
            Self::Yearly => Ok(date.first_of_year()),
        }
    }

    /// Last date of the period containing `date`, under the primary first
    /// weekday.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the edges of the supported
    /// calendar (weekly periods only).
    pub fn period_end(self, date: CalendarDate) -> Result<CalendarDate, DateError> {
        self.period_end_with(date, Weekday::default())
    }

    /// Last date of the period containing `date`. Only `Weekly` consults
    /// `first_weekday`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the edges of the supported
    /// calendar (weekly periods only).
    pub fn period_end_with(
        self,
        date: CalendarDate,
        first_weekday: Weekday,
    ) -> Result<CalendarDate, DateError> {
        match self {
            Self::Daily => Ok(date),
            Self::Weekly => week::start_of_week(date, first_weekday)?.add_days(DAYS_IN_WEEK - 1),
            Self::Monthly => Ok(date.last_of_month()),
            Self::Yearly => Ok(date.last_of_year()),
        }
    }

    /// Checks that `start..=end` spans whole periods exactly, under the
    /// primary first weekday.
    ///
    /// # Errors
    /// `SpanError::EndBeforeStart` if `end < start`;
    /// `SpanError::Misaligned` unless `start` is a period start and `end` a
    /// period end.
    pub fn validate_completion(
        self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<(), SpanError> {
        self.validate_completion_with(start, end, Weekday::default())
    }

    /// Checks that `start..=end` spans whole periods exactly. Only `Weekly`
    /// consults `first_weekday`.
    ///
    /// # Errors
    /// Same as [`Self::validate_completion`].
    pub fn validate_completion_with(
        self,
        start: CalendarDate,
        end: CalendarDate,
        first_weekday: Weekday,
    ) -> Result<(), SpanError> {
        if end < start {
            return Err(SpanError::EndBeforeStart { start, end });
        }
        if self.period_start_with(start, first_weekday)? != start {
            return Err(SpanError::Misaligned {
                granularity: self,
                date: start,
            });
        }
        if self.period_end_with(end, first_weekday)? != end {
            return Err(SpanError::Misaligned {
                granularity: self,
                date: end,
            });
        }
        Ok(())
    }

    /// Number of periods the span `start..=end` touches, under the primary
    /// first weekday.
    ///
    /// Lenient: the endpoints need not be period-aligned. A misaligned span
    /// still counts every period it reaches into (weekly spans count
    /// anchor-weeks), so realistic partial ranges bucket meaningfully.
    ///
    /// # Errors
    /// `SpanError::EndBeforeStart` if `end < start`.
    pub fn range_length(self, start: CalendarDate, end: CalendarDate) -> Result<u32, SpanError> {
        self.range_length_with(start, end, Weekday::default())
    }

    /// Number of periods the span `start..=end` touches. Only `Weekly`
    /// consults `first_weekday`.
    ///
    /// # Errors
    /// Same as [`Self::range_length`].
    pub fn range_length_with(
        self,
        start: CalendarDate,
        end: CalendarDate,
        first_weekday: Weekday,
    ) -> Result<u32, SpanError> {
        if end < start {
            return Err(SpanError::EndBeforeStart { start, end });
        }
        let length = match self {
            Self::Daily => end.days_since(start) + 1,
            Self::Weekly => week::weeks_between(start, end, first_weekday)? + 1,
            Self::Monthly => {
                month_ordinal(end.year(), end.month()) - month_ordinal(start.year(), start.month())
                    + 1
            }
            Self::Yearly => i64::from(end.year()) - i64::from(start.year()) + 1,
        };
        // An ordered span within years 1-9999 always counts at least 1 and
        // at most a few million periods
        Ok(length as u32)
    }

    /// Last date of the `periods`-th period starting at `start`, under the
    /// primary first weekday.
    ///
    /// Strict, unlike [`Self::range_length`]: `start` must itself be a
    /// period start.
    ///
    /// # Errors
    /// `SpanError::InvalidPeriodCount` if `periods` is 0;
    /// `SpanError::Misaligned` if `start` is not a period start;
    /// `SpanError::Date` when the result leaves the supported calendar.
    pub fn end_date(self, start: CalendarDate, periods: u32) -> Result<CalendarDate, SpanError> {
        self.end_date_with(start, periods, Weekday::default())
    }

    /// Last date of the `periods`-th period starting at `start`. Only
    /// `Weekly` consults `first_weekday`.
    ///
    /// # Errors
    /// Same as [`Self::end_date`].
    pub fn end_date_with(
        self,
        start: CalendarDate,
        periods: u32,
        first_weekday: Weekday,
    ) -> Result<CalendarDate, SpanError> {
        if periods == 0 {
            return Err(SpanError::InvalidPeriodCount(periods));
        }
        if self.period_start_with(start, first_weekday)? != start {
            return Err(SpanError::Misaligned {
                granularity: self,
                date: start,
            });
        }

        let spanned = i64::from(periods);
        let end = match self {
            Self::Daily => start.add_days(spanned - 1)?,
            Self::Weekly => start.add_days(spanned * DAYS_IN_WEEK - 1)?,
            Self::Monthly => {
                let target = month_ordinal(start.year(), start.month()) + spanned - 1;
                let (year, month) = month_from_ordinal(target)?;
                CalendarDate::new(year, month, days_in_month(year, month))?
            }
            Self::Yearly => {
                let target = i64::from(start.year()) + spanned - 1;
                if target > i64::from(MAX_YEAR) {
                    return Err(SpanError::Date(DateError::OutOfRange));
                }
                let year = target as u16;
                CalendarDate::new(year, DECEMBER, days_in_month(year, DECEMBER))?
            }
        };
        Ok(end)
    }
}
