/// UTC instant parsing and civil-time conversion
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;

use crate::error::{KalamError, Result};

/// Resolve an IANA zone name against the bundled tz database
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| KalamError::UnknownTimeZone(name.to_string()))
}

// ISO-8601 shapes besides RFC 3339: minutes-only and basic (no separators).
// `%#z` takes `Z`, `+hh`, `+hhmm` or `+hh:mm`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an ISO-8601 instant. A trailing `Z` means UTC; an offset-less
/// timestamp is taken as UTC.
pub fn parse_utc_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    
    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(raw, format) {
            return Ok(instant.with_timezone(&Utc));
        }
    }
    
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    
    Err(KalamError::ParseError(format!("'{}' is not an ISO-8601 instant", raw)))
}

/// Re-express an instant in the zone's civil calendar and clock
pub fn to_civil(instant: DateTime<Utc>, zone: &Tz) -> DateTime<Tz> {
    instant.with_timezone(zone)
}

/// Parse a UTC timestamp string and convert it to civil time in `zone`
pub fn convert(raw: &str, zone: &Tz) -> Result<DateTime<Tz>> {
    parse_utc_instant(raw).map(|instant| to_civil(instant, zone))
}

/// 12-hour clock rendering, e.g. `07:15 AM`
pub fn format_clock<T: TimeZone>(time: &DateTime<T>) -> String
where
    T::Offset: Display,
{
    time.format("%I:%M %p").to_string()
}
