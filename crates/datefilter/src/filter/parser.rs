//! Parser for date filter parameters.

use tracing::debug;

use super::ast::{FilterExpression, OperatorTag, Precision};
use super::error::{FilterError, FilterResult};
use super::grammar::{parse_instant, FILTER_RE, TIME_DELIMITER, TIME_MARKER};

/// Parser for prefix-style date filter parameters.
///
/// The parser validates the raw string against the fixed grammar (see
/// [`grammar`](super::grammar)), reassembles the date and optional time into
/// `YYYY-MM-DD[ HH:MM]` and resolves it with an exact, locale-independent
/// layout.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use datefilter_rs::filter::{FilterParser, OperatorTag, Precision};
///
/// let expr = FilterParser::parse("ge2013-03-14").unwrap();
/// assert_eq!(expr.operator, OperatorTag::Ge);
/// assert_eq!(expr.precision, Precision::Date);
/// assert_eq!(expr.instant.time(), NaiveTime::MIN);
/// ```
pub struct FilterParser;

impl FilterParser {
    /// Parses a filter parameter into a [`FilterExpression`].
    ///
    /// Surrounding whitespace is ignored; everything else must match the
    /// grammar exactly and is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyExpression` if the input is blank.
    ///
    /// Returns `FilterError::GrammarMismatch` if the input does not match
    /// `<prefix><YYYY-MM-DD>[T<HH:MM>]`.
    ///
    /// Returns `FilterError::InvalidDate` if the date or time is not a real
    /// calendar value, such as `2013-02-30` or `25:00`.
    pub fn parse(input: &str) -> FilterResult<FilterExpression> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FilterError::EmptyExpression);
        }

        let caps = FILTER_RE
            .captures(trimmed)
            .ok_or_else(|| FilterError::grammar_mismatch(trimmed))?;

        let operator: OperatorTag = caps[1].parse()?;
        let date_part = &caps[2];
        let time_part = caps
            .get(3)
            .map(|m| m.as_str().trim_start_matches(TIME_MARKER));

        let (text, precision) = match time_part {
            Some(time) => (
                format!("{date_part}{TIME_DELIMITER}{time}"),
                Precision::DateTime,
            ),
            None => (date_part.to_string(), Precision::Date),
        };

        let instant =
            parse_instant(&text, precision).map_err(|e| FilterError::invalid_date(text, e))?;

        let expr = FilterExpression::new(operator, instant, precision);
        debug!(input = trimmed, %expr, ?precision, "parsed filter parameter");
        Ok(expr)
    }
}
