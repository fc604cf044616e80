use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

use crate::Error;

/// Look up a canonical timezone name such as "Pacific/Auckland".
pub fn get_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

/// The UTC offset `timezone` observes at `instant`.
pub fn get_local_offset(timezone: &Tz, instant: OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(&instant).to_utc()
}
