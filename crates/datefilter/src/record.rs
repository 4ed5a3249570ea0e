//! Time-stamped records that date filters are applied to.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::{FilterCompiler, FilterResult, PeriodBound};

/// Access to the timestamp attribute a date filter compares against.
pub trait RecordDate {
    /// Returns the record's timestamp.
    fn record_date(&self) -> NaiveDateTime;
}

impl RecordDate for NaiveDateTime {
    fn record_date(&self) -> NaiveDateTime {
        *self
    }
}

impl<T: RecordDate + ?Sized> RecordDate for &T {
    fn record_date(&self) -> NaiveDateTime {
        (**self).record_date()
    }
}

/// Identifier of a record, written either as a JSON string or an integer.
///
/// A record without an `id` gets the empty text id, which is not written back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Returns true for the empty text id of a record that had none.
    pub fn is_empty(&self) -> bool {
        matches!(self, RecordId::Text(text) if text.is_empty())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RecordId {
    fn from(text: &str) -> Self {
        RecordId::Text(text.to_string())
    }
}

impl From<String> for RecordId {
    fn from(text: String) -> Self {
        RecordId::Text(text)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        matches!(self, RecordId::Text(text) if text == other)
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for RecordId {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, RecordId::Number(n) if n == other)
    }
}

/// A single time-stamped record.
///
/// Any fields besides `id` and `record_date` are kept in `attributes` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier.
    #[serde(default, skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,

    /// When the record was taken.
    ///
    /// Accepts `YYYY-MM-DD` (stored at midnight), `YYYY-MM-DDTHH:MM` and
    /// `YYYY-MM-DDTHH:MM:SS`.
    #[serde(with = "record_date_format")]
    pub record_date: NaiveDateTime,

    /// Remaining fields of the record.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Creates a record with no extra attributes.
    pub fn new(id: impl Into<RecordId>, record_date: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            record_date,
            attributes: serde_json::Map::new(),
        }
    }

    /// Returns true if the record carries a time of day other than midnight.
    pub fn has_time_of_day(&self) -> bool {
        self.record_date.time() != NaiveTime::MIN
    }
}

impl RecordDate for Record {
    fn record_date(&self) -> NaiveDateTime {
        self.record_date
    }
}

/// A collection of records, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    /// The records, in file order.
    #[serde(default)]
    pub records: Vec<Record>,
}

impl RecordSet {
    /// Creates a record set.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns records matching an unbounded filter parameter such as `ge2013-03-14`.
    ///
    /// # Errors
    ///
    /// Returns a `FilterError` if the parameter does not parse or uses `lt`/`gt`.
    pub fn filter_by_date(&self, parameter: &str) -> FilterResult<Vec<&Record>> {
        let predicate = FilterCompiler::compile(parameter)?;
        let matches = predicate.filter_records(&self.records);
        debug!(parameter, matched = matches.len(), total = self.len(), "filtered records");
        Ok(matches)
    }

    /// Returns records matching a period-bounded `lt`/`gt` filter parameter.
    ///
    /// # Errors
    ///
    /// Returns a `FilterError` if the parameter does not parse or uses an
    /// operator other than `lt`/`gt`.
    pub fn filter_by_date_with_period(
        &self,
        parameter: &str,
        period: PeriodBound,
    ) -> FilterResult<Vec<&Record>> {
        let predicate = FilterCompiler::compile_with_period(parameter, period)?;
        let matches = predicate.filter_records(&self.records);
        debug!(parameter, ?period, matched = matches.len(), total = self.len(), "filtered records");
        Ok(matches)
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

mod record_date_format {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(SERIALIZE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid record_date '{text}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]"
            ))
        })
    }

    fn parse(text: &str) -> Option<NaiveDateTime> {
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(text, DATE_FORMAT)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }
}
