use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTHS_IN_YEAR,
};
use crate::DateError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// January, the first month of a yearly period
    pub(crate) const JANUARY: Self = Self(NonZeroU8::MIN);

    /// December, the last month of a yearly period
    pub(crate) const DECEMBER: Self = match NonZeroU8::new(MAX_MONTH) {
        Some(month) => Self(month),
        None => unreachable!(),
    };

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub(crate) const FIRST: Self = Self(NonZeroU8::MIN);

    /// The last valid day of the given month
    pub(crate) const fn last_of(year: u16, month: u8) -> Self {
        match NonZeroU8::new(days_in_month(year, month)) {
            Some(day) => Self(day),
            None => unreachable!(),
        }
    }

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            month,
            day: value,
            year,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(DateError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month without year/month context, so just
        // check the minimum
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week.
///
/// `Monday` carries index 0 and is the primary first weekday, the one weekly
/// operations use when no explicit first weekday is given.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[default]
    #[display(fmt = "monday")]
    Monday,
    #[display(fmt = "tuesday")]
    Tuesday,
    #[display(fmt = "wednesday")]
    Wednesday,
    #[display(fmt = "thursday")]
    Thursday,
    #[display(fmt = "friday")]
    Friday,
    #[display(fmt = "saturday")]
    Saturday,
    #[display(fmt = "sunday")]
    Sunday,
}

impl Weekday {
    /// Returns the weekday index, 0 (Monday) through 6 (Sunday)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Creates a Weekday from its index, 0 (Monday) through 6 (Sunday)
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the index is > 6.
    pub const fn from_index(index: u8) -> Result<Self, DateError> {
        match index {
            0 => Ok(Self::Monday),
            1 => Ok(Self::Tuesday),
            2 => Ok(Self::Wednesday),
            3 => Ok(Self::Thursday),
            4 => Ok(Self::Friday),
            5 => Ok(Self::Saturday),
            6 => Ok(Self::Sunday),
            _ => Err(DateError::InvalidWeekday(index)),
        }
    }

    /// Days from `first` forward to `self` within one week, in `0..=6`
    pub(crate) const fn offset_from(self, first: Self) -> i64 {
        (self.index() as i64 - first.index() as i64).rem_euclid(DAYS_IN_WEEK)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Position of (year, month) on a continuous month scale.
/// Shared by monthly end-date computation and the locator's month stepping,
/// so rollover and leap handling live in one place.
pub(crate) const fn month_ordinal(year: u16, month: u8) -> i64 {
    year as i64 * MONTHS_IN_YEAR + (month as i64 - 1)
}

/// Inverse of `month_ordinal`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the ordinal lands outside the
/// supported years.
pub(crate) fn month_from_ordinal(ordinal: i64) -> Result<(u16, u8), DateError> {
    let year = ordinal.div_euclid(MONTHS_IN_YEAR);
    let month = ordinal.rem_euclid(MONTHS_IN_YEAR) + 1;
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(DateError::OutOfRange);
    }
    Ok((year as u16, month as u8))
}
