//! Scenario tests for date filters applied to record sets.
//!
//! Each test loads a small record file through the public API and checks which
//! records a filter parameter selects.

use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use datefilter_rs::filter::{CompileMode, FilterCompiler, FilterError, FilterParser, PeriodBound};
use datefilter_rs::{Record, RecordId, RecordSet, RecordStore};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn records(dates: &[&str]) -> RecordSet {
    let json = serde_json::Value::Array(
        dates
            .iter()
            .enumerate()
            .map(|(i, date)| serde_json::json!({ "id": format!("r{i}"), "record_date": date }))
            .collect(),
    );
    serde_json::from_value::<Vec<Record>>(json).unwrap().into()
}

fn dates(matches: &[&Record]) -> Vec<NaiveDateTime> {
    matches.iter().map(|r| r.record_date).collect()
}

// ============================================================================
// Unbounded Scenarios
// ============================================================================

#[test]
fn test_eq_selects_both_records_of_the_day() {
    let set = records(&["2013-01-14T00:00", "2013-01-14T10:00", "2013-01-15T00:00"]);

    let matches = set.filter_by_date("eq2013-01-14").unwrap();
    assert_eq!(
        dates(&matches),
        vec![at(2013, 1, 14, 0, 0), at(2013, 1, 14, 10, 0)]
    );
}

#[test]
fn test_ne_selects_the_other_day() {
    let set = records(&["2013-01-14T00:00", "2013-01-14T10:00", "2013-01-15T00:00"]);

    let matches = set.filter_by_date("ne2013-01-14").unwrap();
    assert_eq!(dates(&matches), vec![at(2013, 1, 15, 0, 0)]);
}

#[test]
fn test_ge_selects_on_and_after() {
    let set = records(&["2013-03-13", "2013-03-14", "2013-03-15", "2014-01-14"]);

    let matches = set.filter_by_date("ge2013-03-14").unwrap();
    assert_eq!(
        dates(&matches),
        vec![
            at(2013, 3, 14, 0, 0),
            at(2013, 3, 15, 0, 0),
            at(2014, 1, 14, 0, 0)
        ]
    );
}

#[test]
fn test_ap_selects_same_ordinal_day() {
    let set = records(&["2013-03-14T00:00", "2013-03-14T02:00", "2015-06-15"]);

    let matches = set.filter_by_date("ap2013-03-14").unwrap();
    assert_eq!(
        dates(&matches),
        vec![at(2013, 3, 14, 0, 0), at(2013, 3, 14, 2, 0)]
    );
}

#[test]
fn test_eq_and_ne_partition_any_set() {
    let set = records(&[
        "2012-12-31T23:59",
        "2013-01-14",
        "2013-01-14T12:00",
        "2013-01-14T23:59",
        "2013-01-15",
        "2020-01-14",
    ]);

    let eq = set.filter_by_date("eq2013-01-14").unwrap();
    let ne = set.filter_by_date("ne2013-01-14").unwrap();

    assert_eq!(eq.len() + ne.len(), set.len());
    assert!(eq.iter().all(|r| !ne.iter().any(|n| n.id == r.id)));
}

#[test]
fn test_compiled_predicate_is_reusable() {
    let set = records(&["2013-03-13", "2013-03-14T08:00", "2013-03-20"]);
    let predicate = FilterCompiler::compile("sa2013-03-13").unwrap();

    let first = predicate.filter_records(&set.records);
    let second = predicate.filter_records(&set.records);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

// ============================================================================
// Period-Bounded Scenarios
// ============================================================================

#[test]
fn test_lt_with_period_start() {
    let set = records(&[
        "2013-01-14T09:00",
        "2013-01-14T08:00",
        "2013-01-13T12:00",
        "2013-01-15T08:00",
    ]);
    let period = PeriodBound::unbounded().starting(at(2013, 1, 14, 8, 0));

    let matches = set
        .filter_by_date_with_period("lt2013-01-14T10:00", period)
        .unwrap();
    assert_eq!(
        dates(&matches),
        vec![at(2013, 1, 14, 9, 0), at(2013, 1, 14, 8, 0)]
    );
}

#[test]
fn test_gt_keeps_date_only_record_on_anchor_day() {
    let set = records(&["2013-01-14", "2013-01-14T09:00", "2013-01-14T11:00", "2013-01-16"]);
    let period = PeriodBound::unbounded().ending(at(2013, 1, 15, 0, 0));

    let matches = set
        .filter_by_date_with_period("gt2013-01-14T10:00", period)
        .unwrap();
    assert_eq!(
        dates(&matches),
        vec![at(2013, 1, 14, 0, 0), at(2013, 1, 14, 11, 0)]
    );
}

// ============================================================================
// Error Scenarios
// ============================================================================

#[test]
fn test_error_kinds_are_distinguishable() {
    assert_eq!(FilterParser::parse(""), Err(FilterError::EmptyExpression));
    assert!(matches!(
        FilterParser::parse("xx2013-01-14"),
        Err(FilterError::GrammarMismatch { .. })
    ));
    assert!(matches!(
        FilterParser::parse("eq2013-02-30"),
        Err(FilterError::InvalidDate { .. })
    ));
    assert!(matches!(
        FilterCompiler::compile("lt2013-01-14T10:00"),
        Err(FilterError::UnsupportedOperator {
            mode: CompileMode::Unbounded,
            ..
        })
    ));

    let codes: Vec<&str> = [
        FilterCompiler::compile("").unwrap_err(),
        FilterCompiler::compile("xx2013-01-14").unwrap_err(),
        FilterCompiler::compile("eq2013-02-30").unwrap_err(),
        FilterCompiler::compile_with_period("eq2013-01-14", PeriodBound::unbounded()).unwrap_err(),
    ]
    .iter()
    .map(|e| e.code())
    .collect();
    assert_eq!(
        codes,
        vec![
            "EMPTY_EXPRESSION",
            "GRAMMAR_MISMATCH",
            "INVALID_DATE",
            "UNSUPPORTED_OPERATOR"
        ]
    );
}

// ============================================================================
// Store Round Trip
// ============================================================================

#[test]
fn test_filter_records_loaded_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"{
  "records": [
    { "id": "p-1", "record_date": "2013-01-13T12:00", "name": "Ada" },
    { "id": "p-2", "record_date": "2013-01-14" },
    { "id": "p-3", "record_date": "2013-01-14T08:59:00" },
    { "id": "p-4", "record_date": "2013-01-15" }
  ]
}"#,
    )
    .unwrap();

    let set = RecordStore::with_path(path).load().unwrap();
    let ids: Vec<String> = set
        .filter_by_date("eq2013-01-14")
        .unwrap()
        .into_iter()
        .map(|r| r.id.to_string())
        .collect();
    assert_eq!(ids, vec!["p-2", "p-3"]);
}

#[test]
fn test_filter_records_with_numeric_and_missing_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"[
  { "id": 1, "record_date": "2013-01-14T10:00" },
  { "id": 2, "record_date": "2013-01-15" },
  { "record_date": "2013-01-14", "note": "walk-in" }
]"#,
    )
    .unwrap();

    let set = RecordStore::with_path(path).load().unwrap();
    assert_eq!(set.len(), 3);

    let matches = set.filter_by_date("eq2013-01-14").unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, RecordId::Number(1));
    assert!(matches[1].id.is_empty());
    assert_eq!(matches[1].attributes["note"], "walk-in");
}
