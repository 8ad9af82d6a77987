/// Rahu Kalam, Yamagandam and Gulikai Kalam from the daylight interval
use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;
use tracing::warn;

use crate::time::to_civil;
use crate::types::{DailyReport, InauspiciousPeriods, PeriodWindow, SunTimes};

pub const RAHU_KALAM: &str = "Rahu Kalam";
pub const YAMAGANDAM: &str = "Yamagandam";
pub const GULIKAI_KALAM: &str = "Gulikai Kalam";

/// Daylight is split into this many equal parts
pub const DAYLIGHT_SEGMENTS: i32 = 8;

// 0-indexed segment per window. Fixed for every weekday.
const RAHU_KALAM_SEGMENT: i32 = 1;
const YAMAGANDAM_SEGMENT: i32 = 3;
const GULIKAI_KALAM_SEGMENT: i32 = 5;

/// One eighth of sunrise-to-sunset. Negative when sunset precedes sunrise.
pub fn segment_duration(sunrise: &DateTime<Tz>, sunset: &DateTime<Tz>) -> TimeDelta {
    (*sunset - *sunrise) / DAYLIGHT_SEGMENTS
}

/// Compute the three windows and express every boundary in `zone`
pub fn calculate_periods(
    sunrise: &DateTime<Tz>,
    sunset: &DateTime<Tz>,
    zone: &Tz,
) -> InauspiciousPeriods {
    if sunset < sunrise {
        warn!("Sunset {} precedes sunrise {}; windows will run backwards", sunset, sunrise);
    }
    
    let segment = segment_duration(sunrise, sunset);
    
    InauspiciousPeriods {
        rahu_kalam: segment_window(RAHU_KALAM, sunrise, segment, RAHU_KALAM_SEGMENT, zone),
        yamagandam: segment_window(YAMAGANDAM, sunrise, segment, YAMAGANDAM_SEGMENT, zone),
        gulikai_kalam: segment_window(GULIKAI_KALAM, sunrise, segment, GULIKAI_KALAM_SEGMENT, zone),
    }
}

/// Convert fetched sun times into `zone` and compute the windows
pub fn daily_report(sun_times: &SunTimes, zone: &Tz) -> DailyReport {
    let sunrise = to_civil(sun_times.sunrise, zone);
    let sunset = to_civil(sun_times.sunset, zone);
    let periods = calculate_periods(&sunrise, &sunset, zone);
    
    DailyReport { sunrise, sunset, periods }
}

/// Segment k spans [sunrise + k*segment, sunrise + (k+1)*segment)
fn segment_window(
    label: &'static str,
    sunrise: &DateTime<Tz>,
    segment: TimeDelta,
    index: i32,
    zone: &Tz,
) -> PeriodWindow {
    let start = *sunrise + segment * index;
    let end = start + segment;
    
    PeriodWindow {
        label,
        start: start.with_timezone(zone),
        end: end.with_timezone(zone),
    }
}
