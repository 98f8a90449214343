/// Microseconds in one millisecond
pub const MICROS_PER_MILLI: i64 = 1000;
/// Microseconds in one second
pub const MICROS_PER_SECOND: i64 = MICROS_PER_MILLI * 1000;
/// Microseconds in one minute
pub const MICROS_PER_MINUTE: i64 = MICROS_PER_SECOND * 60;
/// Microseconds in one hour
pub const MICROS_PER_HOUR: i64 = MICROS_PER_MINUTE * 60;
/// Microseconds in one day (always 24 hours, no DST awareness)
pub const MICROS_PER_DAY: i64 = MICROS_PER_HOUR * 24;
/// Microseconds in one week
pub const MICROS_PER_WEEK: i64 = MICROS_PER_DAY * 7;

/// Months in one year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Leading keyword of every interval string
pub const INTERVAL_KEYWORD: &str = "interval";
/// Optional plural suffix accepted after a unit name
pub(crate) const PLURAL_SUFFIX: char = 's';
