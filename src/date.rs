use crate::consts::{DATE_SEPARATOR, DAYS_IN_WEEK, MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year};
use std::str::FromStr;

/// Days in one 400-year Gregorian era
const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to the 1970-01-01 epoch
const EPOCH_SHIFT: i64 = 719_468;
/// 1970-01-01 was a Thursday
const EPOCH_WEEKDAY: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid weekday index: {} (must be 0-6)", "_0")]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Date falls outside the supported years {}-{}", MIN_YEAR, MAX_YEAR)]
    OutOfRange,
}

impl std::error::Error for DateError {}

/// A timezone-naive Gregorian calendar date.
///
/// Components are validated on construction, so every value of this type is a
/// real calendar date within years 1-9999. Ordering is the natural
/// (year, month, day) ordering. Arithmetic runs on a continuous day serial,
/// so adding days and taking day differences are O(1) and leap-year exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Creates a date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns the matching `DateError` when the year, month, or day is out
    /// of range (day validity accounts for month length and leap years).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Days since the 1970-01-01 epoch (negative before it).
    /// Standard civil-from-days era arithmetic over the proleptic Gregorian
    /// calendar.
    pub(crate) const fn day_number(self) -> i64 {
        let year = self.year.get() as i64;
        let month = self.month.get() as i64;
        let day = self.day.get() as i64;

        // March-based year so the leap day is the last day of the cycle
        let y = if month <= 2 { year - 1 } else { year };
        let era = y / 400;
        let yoe = y - era * 400;
        let mp = if month > 2 { month - 3 } else { month + 9 };
        let doy = (153 * mp + 2) / 5 + day - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * DAYS_PER_ERA + doe - EPOCH_SHIFT
    }

    /// Inverse of `day_number`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the serial lands outside years
    /// 1-9999.
    pub(crate) fn from_day_number(serial: i64) -> Result<Self, DateError> {
        let z = serial.checked_add(EPOCH_SHIFT).ok_or(DateError::OutOfRange)?;
        let era = z.div_euclid(DAYS_PER_ERA);
        let doe = z.rem_euclid(DAYS_PER_ERA);
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = if month <= 2 { y + 1 } else { y };

        if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
            return Err(DateError::OutOfRange);
        }
        Self::new(year as u16, month as u8, day as u8)
    }

    /// The date `days` later (earlier when negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the result leaves years 1-9999.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let serial = self
            .day_number()
            .checked_add(days)
            .ok_or(DateError::OutOfRange)?;
        Self::from_day_number(serial)
    }

    /// Whole days from `earlier` to `self`; negative if `earlier` is later.
    pub const fn days_since(self, earlier: Self) -> i64 {
        self.day_number() - earlier.day_number()
    }

    /// The weekday this date falls on
    pub const fn weekday(self) -> Weekday {
        match (self.day_number() + EPOCH_WEEKDAY).rem_euclid(DAYS_IN_WEEK) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// First day of this date's month (a monthly period start)
    pub const fn first_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: Day::FIRST,
        }
    }

    /// Last day of this date's month (a monthly period end)
    pub const fn last_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: Day::last_of(self.year.get(), self.month.get()),
        }
    }

    /// January 1st of this date's year (a yearly period start)
    pub const fn first_of_year(self) -> Self {
        Self {
            year: self.year,
            month: Month::JANUARY,
            day: Day::FIRST,
        }
    }

    /// December 31st of this date's year (a yearly period end)
    pub const fn last_of_year(self) -> Self {
        Self {
            year: self.year,
            month: Month::DECEMBER,
            day: Day::last_of(self.year.get(), MAX_MONTH),
        }
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Strict ISO format only: YYYY-MM-DD. This exists to back the
    /// string-based serde representation, not as a general parsing surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat("empty date string".to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
