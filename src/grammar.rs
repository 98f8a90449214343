//! The interval text grammar.
//!
//! `interval` followed by optional `<ws>+ -?<digits> <ws>+ <unit>[s]` clauses,
//! one per unit, in [`Unit::ALL`] order. Whitespace and digits are ASCII only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{INTERVAL_KEYWORD, PLURAL_SUFFIX};
use crate::{IntervalParseError, Unit};

/// Pattern for a single optional clause. The signed number is the only capture.
fn clause_pattern(unit: Unit) -> String {
    format!(r"(?:(?-u:\s)+(-?[0-9]+)(?-u:\s)+{unit}{PLURAL_SUFFIX}?)?")
}

fn interval_pattern() -> String {
    let mut pattern = format!(r"\A{INTERVAL_KEYWORD}");
    for unit in Unit::ALL {
        pattern.push_str(&clause_pattern(unit));
    }
    pattern.push_str(r"\z");
    pattern
}

/// Compiled once on first use; capture group `i + 1` holds the value for `Unit::ALL[i]`.
#[allow(clippy::expect_used)]
static INTERVAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&interval_pattern()).expect("interval grammar must compile"));

/// Matches `text` against the full grammar and returns the clauses present,
/// in clause order, with their signed values.
///
/// # Errors
/// Returns `IntervalParseError::NoMatch` if the whole text is not an interval,
/// or `IntervalParseError::Overflow` if a clause value does not fit in an `i64`.
pub(crate) fn match_clauses(text: &str) -> Result<Vec<(Unit, i64)>, IntervalParseError> {
    let caps = INTERVAL_RE
        .captures(text)
        .ok_or_else(|| IntervalParseError::NoMatch(text.to_owned()))?;

    Unit::ALL
        .iter()
        .zip(caps.iter().skip(1))
        .filter_map(|(&unit, group)| group.map(|m| (unit, m.as_str())))
        .map(|(unit, digits)| {
            digits
                .parse::<i64>()
                .map(|value| (unit, value))
                .map_err(|_| IntervalParseError::Overflow { unit })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lists_units_in_order() {
        let pattern = interval_pattern();
        let positions: Vec<usize> = Unit::ALL
            .iter()
            .map(|unit| {
                pattern
                    .find(&format!("+{unit}s?"))
                    .unwrap_or_else(|| panic!("{unit} missing from pattern"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_match_bare_keyword_has_no_clauses() {
        assert!(match_clauses("interval").unwrap().is_empty());
    }

    #[test]
    fn test_match_all_clauses() {
        let clauses = match_clauses(
            "interval 1 year 2 months 3 weeks 4 days 5 hours 6 minutes 7 seconds \
             8 milliseconds 9 microseconds",
        )
        .unwrap();
        let expected: Vec<(Unit, i64)> = Unit::ALL.iter().copied().zip(1..=9).collect();
        assert_eq!(clauses, expected);
    }

    #[test]
    fn test_match_sparse_clauses() {
        let clauses = match_clauses("interval -3 weeks 10 milliseconds").unwrap();
        assert_eq!(clauses, vec![(Unit::Week, -3), (Unit::Millisecond, 10)]);
    }

    #[test]
    fn test_match_ascii_whitespace_variants() {
        let clauses = match_clauses("interval\t2 \n days\x0b\x0c7\r hour").unwrap();
        assert_eq!(clauses, vec![(Unit::Day, 2), (Unit::Hour, 7)]);
    }

    #[test]
    fn test_match_rejects_non_ascii_whitespace_and_digits() {
        // U+00A0 no-break space
        assert!(match_clauses("interval\u{a0}1 day").is_err());
        // U+0663 Arabic-Indic digit three
        assert!(match_clauses("interval \u{663} days").is_err());
    }

    #[test]
    fn test_match_must_cover_whole_text() {
        for text in [
            " interval 1 year",
            "interval 1 year ",
            "interval 1 year\n",
            "xinterval 1 year",
            "interval 1 year!",
        ] {
            assert!(
                matches!(match_clauses(text), Err(IntervalParseError::NoMatch(_))),
                "{text:?} should not match"
            );
        }
    }

    #[test]
    fn test_match_value_too_large() {
        let result = match_clauses("interval 99999999999999999999 days");
        assert_eq!(result, Err(IntervalParseError::Overflow { unit: Unit::Day }));
    }

    #[test]
    fn test_match_i64_extremes() {
        assert_eq!(
            match_clauses("interval -9223372036854775808 microseconds").unwrap(),
            vec![(Unit::Microsecond, i64::MIN)]
        );
        assert_eq!(
            match_clauses("interval 9223372036854775807 microseconds").unwrap(),
            vec![(Unit::Microsecond, i64::MAX)]
        );
    }
}
