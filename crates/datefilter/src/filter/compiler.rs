//! Compilation of parsed filter parameters into record predicates.
//!
//! There are two entry points with disjoint operator sets:
//!
//! - [`FilterCompiler::compile`] handles `eq`, `ne`, `ge`, `le`, `sa`, `eb` and `ap`.
//! - [`FilterCompiler::compile_with_period`] handles `lt` and `gt`, which need a
//!   [`PeriodBound`] to be well-defined.
//!
//! Handing an operator to the other entry point is an
//! [`UnsupportedOperator`](FilterError::UnsupportedOperator) error; neither
//! entry point falls back to the other's semantics.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use datefilter_rs::filter::FilterCompiler;
//!
//! let predicate = FilterCompiler::compile("eq2013-01-14").unwrap();
//!
//! let morning = NaiveDate::from_ymd_opt(2013, 1, 14).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let next_day = NaiveDate::from_ymd_opt(2013, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! assert!(predicate.matches(&morning));
//! assert!(!predicate.matches(&next_day));
//! ```

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::ast::{FilterExpression, OperatorTag, PeriodBound};
use super::error::{CompileMode, FilterError, FilterResult};
use super::parser::FilterParser;
use crate::record::RecordDate;

/// A compiled, reusable test over a record's timestamp.
///
/// Predicates hold only plain values, so they are `Copy`, `Send` and `Sync`
/// and may be applied to any number of records concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `start <= r < end` (`eq`).
    Within {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// `r < start || r >= end` (`ne`).
    Outside {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// `r >= instant` (`ge`, `sa`).
    AtOrAfter(NaiveDateTime),
    /// `r <= instant` (`le`).
    AtOrBefore(NaiveDateTime),
    /// `r < instant` (`eb`).
    Before(NaiveDateTime),
    /// `r.ordinal() == ordinal` (`ap`).
    SameDayOfYear(u32),
    /// `(start <= r < cutoff) || midnight on the anchor's day of year` (`lt`).
    PeriodBefore {
        start: Option<NaiveDateTime>,
        cutoff: NaiveDateTime,
        anchor_ordinal: u32,
    },
    /// `(cutoff < r <= end) || midnight on the anchor's day of year` (`gt`).
    PeriodAfter {
        cutoff: NaiveDateTime,
        end: Option<NaiveDateTime>,
        anchor_ordinal: u32,
    },
}

impl Predicate {
    /// Returns true if the record's timestamp satisfies the predicate.
    pub fn matches<R: RecordDate + ?Sized>(&self, record: &R) -> bool {
        self.matches_date(record.record_date())
    }

    /// Evaluates the predicate against a bare timestamp.
    pub fn matches_date(&self, r: NaiveDateTime) -> bool {
        match *self {
            Predicate::Within { start, end } => r >= start && r < end,
            Predicate::Outside { start, end } => r < start || r >= end,
            Predicate::AtOrAfter(instant) => r >= instant,
            Predicate::AtOrBefore(instant) => r <= instant,
            Predicate::Before(instant) => r < instant,
            Predicate::SameDayOfYear(ordinal) => r.ordinal() == ordinal,
            Predicate::PeriodBefore {
                start,
                cutoff,
                anchor_ordinal,
            } => {
                let in_period = start.map_or(true, |start| r >= start) && r < cutoff;
                in_period || is_undated_on(r, anchor_ordinal)
            }
            Predicate::PeriodAfter {
                cutoff,
                end,
                anchor_ordinal,
            } => {
                let in_period = r > cutoff && end.map_or(true, |end| r <= end);
                in_period || is_undated_on(r, anchor_ordinal)
            }
        }
    }

    /// Filters a slice of records, returning only those that match.
    pub fn filter_records<'b, R: RecordDate>(&self, records: &'b [R]) -> Vec<&'b R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

/// Date-only records (stored at midnight) on the anchor's day of year satisfy
/// `lt`/`gt` regardless of the requested time cutoff.
fn is_undated_on(r: NaiveDateTime, anchor_ordinal: u32) -> bool {
    r.ordinal() == anchor_ordinal && r.time() == NaiveTime::MIN
}

/// Returns `instant` plus one calendar day, saturating at the maximum timestamp.
fn next_day(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Compiles filter parameters into [`Predicate`]s.
pub struct FilterCompiler;

impl FilterCompiler {
    /// Parses and compiles an unbounded filter parameter.
    ///
    /// # Errors
    ///
    /// Returns any [`FilterParser::parse`] error, or
    /// `FilterError::UnsupportedOperator` for `lt` and `gt`.
    pub fn compile(input: &str) -> FilterResult<Predicate> {
        let expr = FilterParser::parse(input)?;
        Self::compile_expression(&expr)
    }

    /// Parses and compiles a period-bounded filter parameter.
    ///
    /// # Errors
    ///
    /// Returns any [`FilterParser::parse`] error, or
    /// `FilterError::UnsupportedOperator` for anything other than `lt` and `gt`.
    pub fn compile_with_period(input: &str, period: PeriodBound) -> FilterResult<Predicate> {
        let expr = FilterParser::parse(input)?;
        Self::compile_expression_with_period(&expr, period)
    }

    /// Compiles an already parsed expression through the unbounded entry point.
    pub fn compile_expression(expr: &FilterExpression) -> FilterResult<Predicate> {
        let d = expr.instant;

        let predicate = match expr.operator {
            OperatorTag::Eq => Predicate::Within {
                start: d,
                end: next_day(d),
            },
            OperatorTag::Ne => Predicate::Outside {
                start: d,
                end: next_day(d),
            },
            OperatorTag::Ge => Predicate::AtOrAfter(d),
            OperatorTag::Le => Predicate::AtOrBefore(d),
            OperatorTag::Sa => Predicate::AtOrAfter(next_day(d)),
            OperatorTag::Eb => Predicate::Before(d),
            OperatorTag::Ap => Predicate::SameDayOfYear(d.ordinal()),
            op @ (OperatorTag::Lt | OperatorTag::Gt) => {
                return Err(FilterError::unsupported_operator(op, CompileMode::Unbounded));
            }
        };

        debug!(%expr, ?predicate, "compiled unbounded filter");
        Ok(predicate)
    }

    /// Compiles an already parsed expression through the period-bounded entry point.
    pub fn compile_expression_with_period(
        expr: &FilterExpression,
        period: PeriodBound,
    ) -> FilterResult<Predicate> {
        let d = expr.instant;

        let predicate = match expr.operator {
            OperatorTag::Lt => Predicate::PeriodBefore {
                start: period.start,
                cutoff: d,
                anchor_ordinal: d.ordinal(),
            },
            OperatorTag::Gt => Predicate::PeriodAfter {
                cutoff: d,
                end: period.end,
                anchor_ordinal: d.ordinal(),
            },
            op @ (OperatorTag::Eq
            | OperatorTag::Ne
            | OperatorTag::Ge
            | OperatorTag::Le
            | OperatorTag::Sa
            | OperatorTag::Eb
            | OperatorTag::Ap) => {
                return Err(FilterError::unsupported_operator(op, CompileMode::Period));
            }
        };

        debug!(%expr, ?period, ?predicate, "compiled period-bounded filter");
        Ok(predicate)
    }
}

