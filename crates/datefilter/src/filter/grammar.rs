//! Fixed grammar and layouts for date filter parameters.
//!
//! A filter parameter is a two-letter operator prefix followed by a calendar
//! date and an optional `T`-introduced time of day:
//!
//! ```text
//! parameter ::= prefix date [ "T" time ]
//! prefix    ::= "eq" | "ne" | "gt" | "lt" | "ge" | "le" | "sa" | "eb" | "ap"
//! date      ::= DIGIT{4} "-" DIGIT{2} "-" DIGIT{2}
//! time      ::= DIGIT{2} ":" DIGIT{2}
//! ```

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::ast::Precision;
use super::error::{FilterError, FilterResult};

/// Pattern matched against the whole (trimmed) filter parameter.
pub const FILTER_PATTERN: &str = r"^(eq|ne|gt|lt|ge|le|sa|eb|ap)(\d{4}-\d{2}-\d{2})(T\d{2}:\d{2})?$";

/// Layout for parameters without a time component.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout for parameters carrying a time component.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Marker that introduces the time component inside a filter parameter.
pub const TIME_MARKER: char = 'T';

/// Delimiter that joins date and time in the reassembled string.
pub const TIME_DELIMITER: char = ' ';

/// Pattern matched against a standalone instant such as a period bound.
pub const TIMESTAMP_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2})?$";

pub(crate) static FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FILTER_PATTERN).expect("valid filter parameter regex"));

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("valid timestamp regex"));

/// Parses a reassembled `date[ time]` string against the layout for `precision`.
///
/// Date-only strings resolve to midnight of that date.
pub(crate) fn parse_instant(
    text: &str,
    precision: Precision,
) -> Result<NaiveDateTime, chrono::ParseError> {
    match precision {
        Precision::Date => {
            NaiveDate::parse_from_str(text, DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
        }
        Precision::DateTime => NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT),
    }
}

/// Parses a standalone instant such as a period bound.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and `YYYY-MM-DD HH:MM` with every
/// field zero-padded to its full width, then resolves the text with the same
/// two layouts as filter parameters.
///
/// # Errors
///
/// Returns `FilterError::EmptyExpression` for blank input,
/// `FilterError::GrammarMismatch` when the text is not in one of those shapes
/// and `FilterError::InvalidDate` when it is not a real date or time.
///
/// # Example
///
/// ```
/// use chrono::Timelike;
/// use datefilter_rs::filter::parse_timestamp;
///
/// let start = parse_timestamp("2013-01-14T08:00").unwrap();
/// assert_eq!(start.hour(), 8);
/// ```
pub fn parse_timestamp(text: &str) -> FilterResult<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FilterError::EmptyExpression);
    }
    if !TIMESTAMP_RE.is_match(trimmed) {
        return Err(FilterError::grammar_mismatch(trimmed));
    }

    let normalized = trimmed.replacen(TIME_MARKER, &TIME_DELIMITER.to_string(), 1);
    let precision = if normalized.contains(TIME_DELIMITER) {
        Precision::DateTime
    } else {
        Precision::Date
    };

    parse_instant(&normalized, precision).map_err(|e| FilterError::invalid_date(trimmed, e))
}
