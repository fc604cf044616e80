//! Where a calendar gets "today" from.

use time::{OffsetDateTime, UtcOffset};
use time_tz::Tz;

use crate::{
    Error,
    date::CalendarDate,
    timezone::{get_local_offset, get_timezone},
};

/// A source of the current date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> CalendarDate;
}

/// Reads the wall clock.
///
/// With a timezone, the offset is looked up for the current instant on every
/// call so daylight saving changes are picked up. Without one, the host's
/// local offset is used, falling back to UTC when it cannot be determined.
#[derive(Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Option<&'static Tz>,
}

impl SystemClock {
    /// A clock in the host's local timezone.
    pub fn local() -> Self {
        Self { timezone: None }
    }

    /// A clock in the timezone with the canonical name `canonical_timezone`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTimezoneError] if the name is not a known
    /// timezone.
    pub fn in_timezone(canonical_timezone: &str) -> Result<Self, Error> {
        Ok(Self {
            timezone: Some(get_timezone(canonical_timezone)?),
        })
    }
}

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let now = OffsetDateTime::now_utc();
        let offset = match self.timezone {
            Some(timezone) => get_local_offset(timezone, now),
            None => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        };

        date_of(now.to_offset(offset))
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

fn date_of(date_time: OffsetDateTime) -> CalendarDate {
    let month = u8::from(date_time.month()) - 1;

    CalendarDate::from_parts_unchecked(date_time.year(), month, date_time.day())
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, OffsetDateTime, Time, UtcOffset};

    use crate::{
        Error,
        clock::{Clock, FixedClock, SystemClock, date_of},
        date::CalendarDate,
    };

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = CalendarDate::new(2024, 2, 15).unwrap();

        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn converts_local_fields_without_shifting() {
        let late_evening = Date::from_calendar_date(2024, Month::March, 15)
            .unwrap()
            .with_time(Time::from_hms(23, 30, 0).unwrap())
            .assume_offset(UtcOffset::from_hms(-10, 0, 0).unwrap());

        assert_eq!(date_of(late_evening), CalendarDate::new(2024, 2, 15).unwrap());
    }

    #[test]
    fn system_clock_matches_utc_date_in_utc_zone() {
        let clock = SystemClock::in_timezone("Africa/Abidjan").unwrap();

        let before = date_of(OffsetDateTime::now_utc());
        let today = clock.today();
        let after = date_of(OffsetDateTime::now_utc());

        assert!(today == before || today == after);
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert_eq!(
            SystemClock::in_timezone("Not/AZone").err(),
            Some(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }
}
