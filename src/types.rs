use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, DAYS_PER_WEEK, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH_INDEX, MIN_DAY, MONTH_NAMES, UNIX_EPOCH_SHIFT,
    UNIX_EPOCH_WEEKDAY, WEEKDAY_LABELS,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A 0-based month index guaranteed to be in the range `0..=11`
/// (January is 0, December is 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(JANUARY);
    pub const FEBRUARY: Self = Self(FEBRUARY);
    pub const DECEMBER: Self = Self(DECEMBER);

    /// Creates a new Month from its 0-based index
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the index is greater than 11.
    pub fn new(index: u8) -> Result<Self, DateError> {
        if index > MAX_MONTH_INDEX {
            return Err(DateError::InvalidMonth(i64::from(index)));
        }
        Ok(Self(index))
    }

    /// Creates a Month from its 1-based calendar number (January is 1)
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonthNumber` if the number is outside `1..=12`.
    pub fn from_number(number: u8) -> Result<Self, DateError> {
        number
            .checked_sub(1)
            .filter(|index| *index <= MAX_MONTH_INDEX)
            .map(Self)
            .ok_or(DateError::InvalidMonthNumber(number))
    }

    /// Returns the 0-based index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the 1-based calendar number
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// English month name, as shown in the month dropdown
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// The following month; `true` when the year rolls over.
    pub const fn succ(self) -> (Self, bool) {
        if self.0 == DECEMBER {
            (Self(JANUARY), true)
        } else {
            (Self(self.0 + 1), false)
        }
    }

    /// The preceding month; `true` when the year rolls back.
    pub const fn pred(self) -> (Self, bool) {
        if self.0 == JANUARY {
            (Self(DECEMBER), true)
        } else {
            (Self(self.0 - 1), false)
        }
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (JANUARY..=DECEMBER).map(Self)
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
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const MIN: Self = Self(NonZeroU8::MIN);

    pub(crate) const fn from_non_zero(value: NonZeroU8) -> Self {
        Self(value)
    }

    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month: month.number(),
            day: value,
        };
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
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
        // No year/month context here, so only the widest month bound applies
        let longest = DAYS_IN_MONTH[JANUARY as usize];
        if !(MIN_DAY..=longest).contains(&value) {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
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

/// Day of the week. The discriminant is the grid column, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sun")]
    Sunday = 0,
    #[display(fmt = "Mon")]
    Monday = 1,
    #[display(fmt = "Tue")]
    Tuesday = 2,
    #[display(fmt = "Wed")]
    Wednesday = 3,
    #[display(fmt = "Thu")]
    Thursday = 4,
    #[display(fmt = "Fri")]
    Friday = 5,
    #[display(fmt = "Sat")]
    Saturday = 6,
}

impl Weekday {
    /// Column index, 0 = Sunday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for a column index, taken modulo 7
    pub const fn from_index(index: u8) -> Self {
        match index % DAYS_PER_WEEK {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Short column header ("Sun", "Mon", ...)
    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.0 == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.0 as usize]
    }
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
/// Counts from March so the leap day falls at the end of the computational year.
pub(crate) const fn days_from_civil(year: i32, month: Month, day: u8) -> i64 {
    let number = month.number() as i64;
    let year = if number <= 2 { year as i64 - 1 } else { year as i64 };
    let era = year.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = year - era * GREGORIAN_CYCLE as i64;
    let march_based = (number + 9) % 12;
    let day_of_year = (153 * march_based + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / LEAP_YEAR_CYCLE as i64 - year_of_era / CENTURY_CYCLE as i64
        + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

/// Weekday of a civil date. The day is not range-checked.
pub const fn weekday_of(year: i32, month: Month, day: u8) -> Weekday {
    let days = days_from_civil(year, month, day);
    Weekday::from_index((days + UNIX_EPOCH_WEEKDAY).rem_euclid(DAYS_PER_WEEK as i64) as u8)
}

/// Month after `(year, month)`, carrying into the next year after December.
/// December of `i32::MAX` has no successor and is returned as is.
pub const fn next_month(year: i32, month: Month) -> (i32, Month) {
    match month.succ() {
        (next, true) => match year.checked_add(1) {
            Some(year) => (year, next),
            None => (year, month),
        },
        (next, false) => (year, next),
    }
}

/// Month before `(year, month)`, borrowing from the previous year before January.
/// January of `i32::MIN` has no predecessor and is returned as is.
pub const fn prev_month(year: i32, month: Month) -> (i32, Month) {
    match month.pred() {
        (prev, true) => match year.checked_sub(1) {
            Some(year) => (year, prev),
            None => (year, month),
        },
        (prev, false) => (year, prev),
    }
}
