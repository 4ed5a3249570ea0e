//! Prefix-style date filters for time-stamped records.
//!
//! This crate parses FHIR-style date search parameters such as `ge2013-03-14`
//! or `lt2013-01-14T10:00` and compiles them into reusable predicates over a
//! record's timestamp. It also provides a small record model and a JSON-backed
//! store so the predicates can be applied to record files.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use datefilter_rs::{Record, RecordSet};
//!
//! let day = NaiveDate::from_ymd_opt(2013, 3, 14).unwrap();
//! let records = RecordSet::from(vec![
//!     Record::new("before", NaiveDate::from_ymd_opt(2013, 3, 13).unwrap().and_hms_opt(0, 0, 0).unwrap()),
//!     Record::new("on", day.and_hms_opt(0, 0, 0).unwrap()),
//! ]);
//!
//! let matches = records.filter_by_date("ge2013-03-14").unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].id, "on");
//! ```

pub mod filter;
pub mod record;
pub mod store;

pub use filter::{FilterCompiler, FilterError, FilterExpression, FilterParser, PeriodBound, Predicate};
pub use record::{Record, RecordDate, RecordId, RecordSet};
pub use store::{RecordStore, RecordStoreError};
