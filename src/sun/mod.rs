pub mod provider;
pub mod sunrise_sunset;

pub use provider::SunTimesProvider;
pub use sunrise_sunset::SunriseSunsetClient;
