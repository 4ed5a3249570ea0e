//! Date filter parameter parser and predicate compiler.
//!
//! A filter parameter is an opaque query token made of a two-letter operator
//! prefix and a date with an optional time of day, modeled on FHIR search
//! prefixes. The parser turns it into a [`FilterExpression`]; the compiler turns
//! that into a [`Predicate`] over a record's timestamp.
//!
//! # Supported Syntax
//!
//! ```text
//! <prefix><YYYY-MM-DD>[T<HH:MM>]
//! ```
//!
//! ## Unbounded Operators
//! - `eq` - the whole day containing the date
//! - `ne` - anything outside that day
//! - `ge` / `le` - at or after / at or before the instant
//! - `sa` - starts after: from the next day onwards
//! - `eb` - ends before: strictly before the instant
//! - `ap` - approximately: same day of year in any year
//!
//! ## Period-Bounded Operators
//! - `lt` - from the period start up to the instant
//! - `gt` - after the instant up to the period end
//!
//! Both also accept a record stored at midnight on the anchor's day of year,
//! since such a record carries no time of day to compare.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use datefilter_rs::filter::{FilterCompiler, PeriodBound};
//!
//! let start = NaiveDate::from_ymd_opt(2013, 1, 14).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let predicate = FilterCompiler::compile_with_period(
//!     "lt2013-01-14T10:00",
//!     PeriodBound::unbounded().starting(start),
//! )
//! .unwrap();
//!
//! let nine = NaiveDate::from_ymd_opt(2013, 1, 14).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! assert!(predicate.matches(&nine));
//! ```

mod ast;
mod compiler;
mod error;
pub mod grammar;
mod parser;

pub use ast::{FilterExpression, OperatorTag, PeriodBound, Precision};
pub use compiler::{FilterCompiler, Predicate};
pub use error::{CompileMode, FilterError, FilterResult};
pub use grammar::parse_timestamp;
pub use parser::FilterParser;

#[cfg(test)]
mod tests;
