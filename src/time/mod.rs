pub mod convert;
pub mod periods;

pub use convert::{convert, format_clock, parse_time_zone, parse_utc_instant, to_civil};
pub use periods::{calculate_periods, daily_report, segment_duration};
