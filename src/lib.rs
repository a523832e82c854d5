mod cn;
mod consts;
mod grid;
mod input;
mod picker;
mod prelude;
mod types;

pub use cn::cn;
pub use consts::*;
pub use grid::{CalendarGridBuilder, DayCell, MonthOffset, Padding, weeks};
pub use input::TextInput;
pub use picker::{DatePicker, DatePickerOptions, RenderedCell, ViewState};
pub use types::{Day, Month, Weekday, days_in_month, is_leap_year, next_month, prev_month, weekday_of};

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A concrete civil date in the proleptic Gregorian calendar.
///
/// Its text form is the US month-first layout `MM/DD/YYYY`, which is also
/// what the picker reports when a day is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:  i32,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Empty date string")]
    EmptyInput,
    #[error("Invalid date format: {0} (expected MM/DD/YYYY)")]
    InvalidFormat(String),
    #[error("Invalid year: {0}")]
    InvalidYear(String),
    #[error("Invalid month index: {0} (must be 0-{max})", max = MAX_MONTH_INDEX)]
    InvalidMonth(i64),
    #[error("Invalid month number: {0} (must be 1-{max})", max = MONTHS_PER_YEAR)]
    InvalidMonthNumber(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl CalendarDate {
    /// Creates a date, validating the day against the month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Today's date according to the local system clock
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month, self.day.get())
    }

    /// True when this date lies in the given displayed month
    pub fn is_in_month(&self, year: i32, month: Month) -> bool {
        self.year == year && self.month == month
    }

    /// Converts to a chrono date. `None` outside chrono's supported year range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.number()), u32::from(self.day.get()))
    }

    fn parse_part<T: FromStr>(part: &str, original: &str) -> Result<T, DateError> {
        part.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(original.to_owned()))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        let month = u8::try_from(date.month0())
            .ok()
            .and_then(|index| Month::new(index).ok())
            .unwrap_or(Month::JANUARY);
        let day = u8::try_from(date.day())
            .ok()
            .and_then(NonZeroU8::new)
            .map_or(Day::MIN, Day::from_non_zero);
        Self {
            year: date.year(),
            month,
            day,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{}",
            self.month.number(),
            self.day.get(),
            self.year
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(s.to_owned()));
        };

        let month_number = Self::parse_part::<u8>(month, s)?;
        let day = Self::parse_part::<u8>(day, s)?;
        let year = year
            .parse::<i32>()
            .map_err(|_| DateError::InvalidYear((*year).to_owned()))?;

        let month = Month::from_number(month_number)?;
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

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn month(index: u8) -> Month {
        Month::new(index).expect("valid month index in test")
    }

    pub fn date(year: i32, month_index: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month(month_index), day).expect("valid date in test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, month};

    #[test]
    fn test_new_validates_day() {
        assert!(CalendarDate::new(2024, Month::FEBRUARY, 29).is_ok());
        let result = CalendarDate::new(2023, Month::FEBRUARY, 29);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_accessors() {
        let d = date(2024, 0, 15);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), Month::JANUARY);
        assert_eq!(d.day(), 15);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert!(d.is_in_month(2024, Month::JANUARY));
        assert!(!d.is_in_month(2023, Month::JANUARY));
        assert!(!d.is_in_month(2024, Month::FEBRUARY));
    }

    #[test]
    fn test_display_month_first() {
        assert_eq!(date(2024, 0, 5).to_string(), "01/05/2024");
        assert_eq!(date(1991, 7, 15).to_string(), "08/15/1991");
        assert_eq!(date(2024, 11, 31).to_string(), "12/31/2024");
    }

    #[test]
    fn test_parse_full_date() {
        let d = "08/15/1991".parse::<CalendarDate>().expect("parse full date");
        assert_eq!(d, date(1991, 7, 15));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let d = " 02 / 29 / 2024 ".parse::<CalendarDate>().expect("parse padded date");
        assert_eq!(d, date(2024, 1, 29));
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
            check:       fn(&DateError) -> bool,
        }

        let cases = [
            TestCase {
                input:       "",
                description: "empty input",
                check:       |e| matches!(e, DateError::EmptyInput),
            },
            TestCase {
                input:       "   ",
                description: "blank input",
                check:       |e| matches!(e, DateError::EmptyInput),
            },
            TestCase {
                input:       "08/1991",
                description: "missing day",
                check:       |e| matches!(e, DateError::InvalidFormat(_)),
            },
            TestCase {
                input:       "1991-08-15",
                description: "ISO layout",
                check:       |e| matches!(e, DateError::InvalidFormat(_)),
            },
            TestCase {
                input:       "aa/15/1991",
                description: "non-numeric month",
                check:       |e| matches!(e, DateError::InvalidFormat(_)),
            },
            TestCase {
                input:       "13/01/1991",
                description: "month out of range",
                check:       |e| matches!(e, DateError::InvalidMonthNumber(13)),
            },
            TestCase {
                input:       "02/30/2020",
                description: "day past end of month",
                check:       |e| matches!(e, DateError::InvalidDay { .. }),
            },
            TestCase {
                input:       "02/10/19x1",
                description: "non-numeric year",
                check:       |e| matches!(e, DateError::InvalidYear(_)),
            },
        ];

        for case in &cases {
            let err = case
                .input
                .parse::<CalendarDate>()
                .expect_err(case.description);
            assert!((case.check)(&err), "{}: unexpected error {err:?}", case.description);
        }
    }

    #[test]
    fn test_display_parse_agree() {
        let d = date(-44, 2, 15);
        assert_eq!(d.to_string(), "03/15/-44");
        assert_eq!(d.to_string().parse::<CalendarDate>().expect("reparse"), d);
    }

    #[test]
    fn test_ordering() {
        assert!(date(2023, 11, 31) < date(2024, 0, 1));
        assert!(date(2024, 0, 2) > date(2024, 0, 1));
        assert!(date(2024, 1, 1) > date(2024, 0, 31));
    }

    #[test]
    fn test_naive_date_interop() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid chrono date");
        let d = CalendarDate::from(naive);
        assert_eq!(d, date(2024, 1, 29));
        assert_eq!(d.to_naive(), Some(naive));
    }

    #[test]
    fn test_today_is_valid() {
        let today = CalendarDate::today();
        assert!(CalendarDate::new(today.year(), today.month(), today.day()).is_ok());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1991, 7, 15);
        let json = serde_json::to_string(&d).expect("serialize date");
        assert_eq!(json, r#""08/15/1991""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("deserialize date");
        assert_eq!(parsed, d);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""13/01/1991""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::InvalidMonth(12).to_string(),
            "Invalid month index: 12 (must be 0-11)"
        );
        assert_eq!(
            "13/01/1991".parse::<CalendarDate>().map_err(|e| e.to_string()),
            Err("Invalid month number: 13 (must be 1-12)".to_owned())
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(month(0), Month::JANUARY);
    }
}
