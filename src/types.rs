use crate::consts::{
    MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MILLI, MICROS_PER_MINUTE, MICROS_PER_SECOND,
    MICROS_PER_WEEK, MONTHS_PER_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// One unit clause of the interval text form.
///
/// Variants are declared in the order clauses must appear in text, so the
/// derived `Ord` matches clause order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
    #[display(fmt = "microsecond")]
    Microsecond,
}

impl Unit {
    /// All units in clause order
    pub const ALL: [Self; 9] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
        Self::Microsecond,
    ];

    /// Whether this unit accumulates into the month field rather than microseconds
    #[inline]
    pub const fn is_calendar(self) -> bool {
        matches!(self, Self::Year | Self::Month)
    }

    /// Factor converting one of this unit into its field's base unit
    /// (months for calendar units, microseconds otherwise).
    pub const fn weight(self) -> i64 {
        match self {
            Self::Year => MONTHS_PER_YEAR as i64,
            Self::Month | Self::Microsecond => 1,
            Self::Week => MICROS_PER_WEEK,
            Self::Day => MICROS_PER_DAY,
            Self::Hour => MICROS_PER_HOUR,
            Self::Minute => MICROS_PER_MINUTE,
            Self::Second => MICROS_PER_SECOND,
            Self::Millisecond => MICROS_PER_MILLI,
        }
    }
}
