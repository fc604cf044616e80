//! Day-granularity calendar dates and their canonical `YYYY-MM-DD` form.
//!
//! All arithmetic here follows the proleptic Gregorian calendar with weeks
//! starting on Sunday. Dates are plain field values: nothing in this module
//! consults a timezone, so a date never shifts by a day when it is formatted
//! or parsed.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The full English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The abbreviated weekday names, starting on Sunday.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The earliest year a [CalendarDate] can hold.
pub const MIN_YEAR: i32 = 0;

/// The latest year a [CalendarDate] can hold.
pub const MAX_YEAR: i32 = 9999;

/// The errors that may occur when turning raw values into a [CalendarDate].
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum FormatError {
    /// The string does not have the shape `YYYY-MM-DD`.
    #[error("\"{0}\" is not a date in the format YYYY-MM-DD")]
    Malformed(String),

    /// The string or fields have the right shape but do not name a real day,
    /// e.g. month 13 or the 30th of February.
    #[error("\"{0}\" is not a valid calendar date")]
    Impossible(String),
}

/// A calendar day.
///
/// `month` is zero-based (0 is January) and `day` is one-based. The fields
/// are private so that a value always refers to a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Create a date from a year, a zero-based month and a one-based day.
    ///
    /// # Errors
    ///
    /// Returns [FormatError::Impossible] if the fields do not name a real day
    /// or the year is outside [MIN_YEAR]..=[MAX_YEAR].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, FormatError> {
        let in_range = (MIN_YEAR..=MAX_YEAR).contains(&year)
            && month < 12
            && day >= 1
            && day <= days_in_month(year, month);

        if in_range {
            Ok(Self { year, month, day })
        } else {
            Err(FormatError::Impossible(format!(
                "{year:04}-{:02}-{day:02}",
                u16::from(month) + 1
            )))
        }
    }

    /// Callers must have already checked the fields against [days_in_month].
    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The zero-based month, 0 is January.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The one-based day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The day of the week, 0 is Sunday and 6 is Saturday.
    pub fn weekday(&self) -> u8 {
        weekday(self.year, self.month, self.day)
    }

    /// Format as zero-padded `YYYY-MM-DD`.
    pub fn to_canonical(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.year,
            self.month + 1,
            self.day
        )
    }

    /// Parse a zero-padded `YYYY-MM-DD` string.
    ///
    /// The fields are read directly from the text, the month is converted to
    /// zero-based and the result is checked against the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [FormatError::Malformed] if `text` is not exactly four digits,
    /// a dash, two digits, a dash and two digits, or
    /// [FormatError::Impossible] if it names a day that does not exist.
    pub fn from_canonical(text: &str) -> Result<Self, FormatError> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, byte)| i == 4 || i == 7 || byte.is_ascii_digit());

        if !well_formed {
            return Err(FormatError::Malformed(text.to_owned()));
        }

        let year = parse_digits(&bytes[0..4]) as i32;
        let month = parse_digits(&bytes[5..7]);
        let day = parse_digits(&bytes[8..10]);

        if !(1..=12).contains(&month) || day == 0 {
            return Err(FormatError::Impossible(text.to_owned()));
        }

        Self::new(year, (month - 1) as u8, day as u8)
            .map_err(|_| FormatError::Impossible(text.to_owned()))
    }

    /// Human-readable form of the date for `locale`.
    pub fn to_display(&self, locale: LocaleProfile) -> String {
        let month_abbrev = &MONTH_NAMES[usize::from(self.month)][..3];

        match locale {
            LocaleProfile::EnGb => format!("{} {month_abbrev} {}", self.day, self.year),
            LocaleProfile::EnUs => format!("{month_abbrev} {}, {}", self.day, self.year),
            LocaleProfile::Iso => self.to_canonical(),
        }
    }
}

fn parse_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl FromStr for CalendarDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_canonical(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_canonical()
    }
}

/// How dates are presented to people.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleProfile {
    /// Day, abbreviated month, year: "15 Mar 2024".
    #[default]
    EnGb,
    /// Abbreviated month, day, year: "Mar 15, 2024".
    EnUs,
    /// The canonical form: "2024-03-15".
    Iso,
}

/// Whether `year` has a 29th of February.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// The number of days in the zero-based `month` of `year`.
///
/// # Panics
///
/// Panics if `month` is not in `0..12`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("invalid zero-based month {month}"),
    }
}

/// The day of the week of a date given by its fields, 0 is Sunday.
pub(crate) fn weekday(year: i32, month: u8, day: u8) -> u8 {
    // Sakamoto's method: January and February count as months of the
    // previous year.
    const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let year = if month < 2 { year - 1 } else { year };
    let days = year + year.div_euclid(4) - year.div_euclid(100)
        + year.div_euclid(400)
        + MONTH_OFFSETS[usize::from(month)]
        + i32::from(day);

    days.rem_euclid(7) as u8
}
