mod consts;
mod grammar;
mod prelude;
mod types;

pub use consts::*;
pub use types::Unit;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A calendar interval: a whole number of months plus a number of microseconds.
///
/// The two components are independent. Forty days is never folded into a
/// month, and a month is never given a fixed length in microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    months:       i32,
    microseconds: i64,
}

/// Error returned by [`Interval::try_parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalParseError {
    /// The text is not `interval` followed by ordered unit clauses.
    #[error("Invalid interval format: {0:?}")]
    NoMatch(String),

    /// The text is the bare `interval` keyword.
    #[error("Interval has no unit clauses")]
    NoUnits,

    /// A clause value, or the accumulated total, does not fit its field.
    #[error("Interval {unit} value out of range")]
    Overflow { unit: Unit },
}

impl Interval {
    /// The zero interval. Formats as the bare keyword, which does not parse back.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates an interval from raw components. No validation is performed.
    pub const fn new(months: i32, microseconds: i64) -> Self {
        Self {
            months,
            microseconds,
        }
    }

    /// Returns the month component (years are folded in as 12 months each)
    #[inline]
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// Returns the microsecond component
    #[inline]
    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.microseconds == 0
    }

    /// Parses interval text, returning `None` for absent text and for any text
    /// [`Interval::try_parse`] rejects.
    pub fn parse(text: Option<&str>) -> Option<Self> {
        text.and_then(|t| Self::try_parse(t).ok())
    }

    /// Parses text of the form `interval 1 year 2 months -3 days ...`.
    ///
    /// # Errors
    /// Returns `IntervalParseError::NoMatch` if the text does not match the
    /// grammar, `IntervalParseError::NoUnits` for the bare keyword, and
    /// `IntervalParseError::Overflow` if a value or total is out of range.
    pub fn try_parse(text: &str) -> Result<Self, IntervalParseError> {
        let result =
            grammar::match_clauses(text).and_then(|clauses| Self::from_clauses(&clauses));
        if let Err(err) = &result {
            tracing::trace!(input = text, error = %err, "rejected interval text");
        }
        result
    }

    /// Formats the interval in canonical text form. Same as `to_string()`.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// A 32-bit hash combining both components: `31 * months + (low 32 bits of microseconds)`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hash_code(&self) -> i32 {
        31_i32
            .wrapping_mul(self.months)
            .wrapping_add(self.microseconds as i32)
    }

    /// Sums clause values into the two fields. Any overflow, including a month
    /// total outside `i32`, is rejected rather than wrapped.
    fn from_clauses(clauses: &[(Unit, i64)]) -> Result<Self, IntervalParseError> {
        if clauses.is_empty() {
            return Err(IntervalParseError::NoUnits);
        }

        let mut months: i64 = 0;
        let mut microseconds: i64 = 0;
        let mut last_calendar_unit = Unit::Month;

        for &(unit, value) in clauses {
            let field = if unit.is_calendar() {
                last_calendar_unit = unit;
                &mut months
            } else {
                &mut microseconds
            };
            let scaled = value
                .checked_mul(unit.weight())
                .ok_or(IntervalParseError::Overflow { unit })?;
            *field = field
                .checked_add(scaled)
                .ok_or(IntervalParseError::Overflow { unit })?;
        }

        let months = i32::try_from(months).map_err(|_| IntervalParseError::Overflow {
            unit: last_calendar_unit,
        })?;

        Ok(Self::new(months, microseconds))
    }
}

fn write_clause(f: &mut fmt::Formatter<'_>, value: i64, unit: Unit) -> fmt::Result {
    if value == 0 {
        return Ok(());
    }
    write!(f, " {value} {unit}{}", consts::PLURAL_SUFFIX)
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INTERVAL_KEYWORD)?;

        if self.months != 0 {
            write_clause(f, i64::from(self.months / MONTHS_PER_YEAR), Unit::Year)?;
            write_clause(f, i64::from(self.months % MONTHS_PER_YEAR), Unit::Month)?;
        }

        if self.microseconds != 0 {
            // Truncating division keeps every component's sign equal to the total's.
            let mut rest = self.microseconds;
            for unit in Unit::ALL.into_iter().filter(|u| !u.is_calendar()) {
                write_clause(f, rest / unit.weight(), unit)?;
                rest %= unit.weight();
            }
        }

        Ok(())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<(i32, i64)> for Interval {
    fn from((months, microseconds): (i32, i64)) -> Self {
        Self::new(months, microseconds)
    }
}

impl From<Interval> for (i32, i64) {
    fn from(interval: Interval) -> Self {
        (interval.months, interval.microseconds)
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
