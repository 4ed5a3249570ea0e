//! Parsed representation of a date filter parameter.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::error::FilterError;
use super::grammar::TIME_MARKER;

/// Comparison operator selected by the two-letter filter prefix.
///
/// `Lt` and `Gt` are only meaningful together with a [`PeriodBound`]; the other
/// seven operators compile without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorTag {
    /// `eq` - the whole day containing the instant.
    Eq,
    /// `ne` - anything outside the day containing the instant.
    Ne,
    /// `ge` - at or after the instant.
    Ge,
    /// `le` - at or before the instant.
    Le,
    /// `sa` - starts after the day containing the instant.
    Sa,
    /// `eb` - ends before the instant.
    Eb,
    /// `ap` - same ordinal day of year, in any year.
    Ap,
    /// `lt` - before the instant, within a period.
    Lt,
    /// `gt` - after the instant, within a period.
    Gt,
}

impl OperatorTag {
    /// Every operator, in the order they are documented.
    pub const ALL: [OperatorTag; 9] = [
        OperatorTag::Eq,
        OperatorTag::Ne,
        OperatorTag::Ge,
        OperatorTag::Le,
        OperatorTag::Sa,
        OperatorTag::Eb,
        OperatorTag::Ap,
        OperatorTag::Lt,
        OperatorTag::Gt,
    ];

    /// Returns the two-letter prefix for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorTag::Eq => "eq",
            OperatorTag::Ne => "ne",
            OperatorTag::Ge => "ge",
            OperatorTag::Le => "le",
            OperatorTag::Sa => "sa",
            OperatorTag::Eb => "eb",
            OperatorTag::Ap => "ap",
            OperatorTag::Lt => "lt",
            OperatorTag::Gt => "gt",
        }
    }

    /// Returns true for operators that compile only with a [`PeriodBound`].
    pub fn requires_period(self) -> bool {
        matches!(self, OperatorTag::Lt | OperatorTag::Gt)
    }

    /// Short human-readable description of the operator's semantics.
    pub fn description(self) -> &'static str {
        match self {
            OperatorTag::Eq => "equal: the whole day containing the date",
            OperatorTag::Ne => "not equal: outside the day containing the date",
            OperatorTag::Ge => "greater or equal: at or after the instant",
            OperatorTag::Le => "less or equal: at or before the instant",
            OperatorTag::Sa => "starts after: from the following day onwards",
            OperatorTag::Eb => "ends before: strictly before the instant",
            OperatorTag::Ap => "approximately: same day of year, any year",
            OperatorTag::Lt => "less than: from period start up to the instant",
            OperatorTag::Gt => "greater than: after the instant up to period end",
        }
    }
}

impl fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorTag {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperatorTag::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| FilterError::grammar_mismatch(s))
    }
}

/// How much of the instant the filter parameter spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Date only; the instant is midnight of that date.
    Date,
    /// Date with an `HH:MM` time of day.
    DateTime,
}

/// A parsed filter parameter: operator plus anchor instant.
///
/// Rendering with `Display` yields the canonical parameter form, so
/// `FilterExpression` values round-trip through [`FilterParser`](super::FilterParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterExpression {
    /// The comparison operator.
    pub operator: OperatorTag,
    /// The anchor instant.
    pub instant: NaiveDateTime,
    /// Whether the parameter carried a time of day.
    pub precision: Precision,
}

impl FilterExpression {
    /// Creates a new filter expression.
    pub fn new(operator: OperatorTag, instant: NaiveDateTime, precision: Precision) -> Self {
        Self {
            operator,
            instant,
            precision,
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.instant.format("%Y-%m-%d"))?;
        if self.precision == Precision::DateTime {
            write!(f, "{}{}", TIME_MARKER, self.instant.format("%H:%M"))?;
        }
        Ok(())
    }
}

/// Caller-supplied period that bounds the `lt` and `gt` operators.
///
/// An unset side leaves the comparison open in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodBound {
    /// Inclusive lower bound used by `lt`.
    pub start: Option<NaiveDateTime>,
    /// Inclusive upper bound used by `gt`.
    pub end: Option<NaiveDateTime>,
}

impl PeriodBound {
    /// Creates a period from optional start and end instants.
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// A period open on both sides.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns a copy with the start set.
    pub fn starting(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Returns a copy with the end set.
    pub fn ending(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }
}
