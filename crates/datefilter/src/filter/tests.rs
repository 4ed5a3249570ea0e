//! Tests for the filter parameter parser.

use super::*;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// ==================== Operator Tests ====================

#[test]
fn test_parse_every_operator() {
    let cases = [
        ("eq2013-01-14", OperatorTag::Eq),
        ("ne2013-01-14", OperatorTag::Ne),
        ("lt2013-01-14T10:00", OperatorTag::Lt),
        ("gt2013-01-14T10:00", OperatorTag::Gt),
        ("ge2013-03-14", OperatorTag::Ge),
        ("le2013-03-14", OperatorTag::Le),
        ("sa2013-03-14", OperatorTag::Sa),
        ("eb2013-03-14", OperatorTag::Eb),
        ("ap2013-03-14", OperatorTag::Ap),
    ];

    for (input, expected) in cases {
        let expr = FilterParser::parse(input).unwrap();
        assert_eq!(expr.operator, expected, "operator for {input}");
    }
}

#[test]
fn test_operator_from_str_round_trip() {
    for op in OperatorTag::ALL {
        assert_eq!(op.as_str().parse::<OperatorTag>().unwrap(), op);
        assert_eq!(op.to_string(), op.as_str());
    }
}

#[test]
fn test_operator_from_str_unknown() {
    assert!(matches!(
        "xx".parse::<OperatorTag>(),
        Err(FilterError::GrammarMismatch { .. })
    ));
}

#[test]
fn test_only_lt_and_gt_require_period() {
    let period_ops: Vec<OperatorTag> = OperatorTag::ALL
        .into_iter()
        .filter(|op| op.requires_period())
        .collect();
    assert_eq!(period_ops, vec![OperatorTag::Lt, OperatorTag::Gt]);
}

// ==================== Precision Tests ====================

#[test]
fn test_date_only_resolves_to_midnight() {
    for op in OperatorTag::ALL {
        let input = format!("{op}2013-03-14");
        let expr = FilterParser::parse(&input).unwrap();
        assert_eq!(expr.instant, at(2013, 3, 14, 0, 0), "instant for {input}");
        assert_eq!(expr.instant.time(), NaiveTime::MIN);
        assert_eq!(expr.precision, Precision::Date);
    }
}

#[test]
fn test_time_keeps_hours_and_minutes() {
    let expr = FilterParser::parse("lt2013-01-14T10:00").unwrap();
    assert_eq!(expr.instant, at(2013, 1, 14, 10, 0));
    assert_eq!(expr.precision, Precision::DateTime);

    let expr = FilterParser::parse("ge2020-02-29T23:59").unwrap();
    assert_eq!(expr.instant.hour(), 23);
    assert_eq!(expr.instant.minute(), 59);
    assert_eq!(expr.instant.second(), 0);
}

#[test]
fn test_explicit_midnight_keeps_date_time_precision() {
    let expr = FilterParser::parse("eq2013-01-14T00:00").unwrap();
    assert_eq!(expr.instant, at(2013, 1, 14, 0, 0));
    assert_eq!(expr.precision, Precision::DateTime);
}

// ==================== Display Tests ====================

#[test]
fn test_display_is_canonical_parameter() {
    for input in ["ge2013-03-14", "lt2013-01-14T10:00", "ap2000-12-31T00:00"] {
        let expr = FilterParser::parse(input).unwrap();
        assert_eq!(expr.to_string(), input);
    }
}

// ==================== Whitespace Tests ====================

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let expr = FilterParser::parse("  eq2013-01-14\n").unwrap();
    assert_eq!(expr.operator, OperatorTag::Eq);
}

#[test]
fn test_inner_whitespace_is_rejected() {
    assert!(matches!(
        FilterParser::parse("eq 2013-01-14"),
        Err(FilterError::GrammarMismatch { .. })
    ));
}

// ==================== Error Tests ====================

#[test]
fn test_empty_input() {
    assert_eq!(FilterParser::parse(""), Err(FilterError::EmptyExpression));
    assert_eq!(FilterParser::parse("   "), Err(FilterError::EmptyExpression));
    assert_eq!(FilterParser::parse("\t\n"), Err(FilterError::EmptyExpression));
}

#[test]
fn test_unknown_prefix_is_grammar_mismatch() {
    assert_eq!(
        FilterParser::parse("xx2013-01-14"),
        Err(FilterError::grammar_mismatch("xx2013-01-14"))
    );
}

#[test]
fn test_prefix_is_case_sensitive() {
    assert!(matches!(
        FilterParser::parse("EQ2013-01-14"),
        Err(FilterError::GrammarMismatch { .. })
    ));
}

#[test]
fn test_malformed_date_shapes() {
    for input in [
        "eq",
        "eq13-01-14",
        "eq2013-1-14",
        "eq2013/01/14",
        "2013-01-14",
        "eq2013-01-14T10",
        "eq2013-01-14T10:00:00",
        "eq2013-01-14 10:00",
        "xeq2013-01-14",
    ] {
        assert!(
            matches!(
                FilterParser::parse(input),
                Err(FilterError::GrammarMismatch { .. })
            ),
            "expected grammar mismatch for {input}"
        );
    }
}

#[test]
fn test_invalid_calendar_date() {
    let err = FilterParser::parse("eq2013-02-30").unwrap_err();
    assert!(matches!(err, FilterError::InvalidDate { ref input, .. } if input == "2013-02-30"));
    assert_eq!(err.code(), "INVALID_DATE");
}

#[test]
fn test_invalid_month_and_time() {
    for input in ["eq2013-13-01", "eq2013-00-10", "lt2013-01-14T24:00", "gt2013-01-14T10:60"] {
        assert!(
            matches!(
                FilterParser::parse(input),
                Err(FilterError::InvalidDate { .. })
            ),
            "expected invalid date for {input}"
        );
    }
}

#[test]
fn test_invalid_date_reports_reassembled_text() {
    let err = FilterParser::parse("lt2013-01-14T25:00").unwrap_err();
    match err {
        FilterError::InvalidDate { input, .. } => assert_eq!(input, "2013-01-14 25:00"),
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn test_leap_day() {
    assert!(FilterParser::parse("eq2012-02-29").is_ok());
    assert!(matches!(
        FilterParser::parse("eq2013-02-29"),
        Err(FilterError::InvalidDate { .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        FilterError::EmptyExpression.to_string(),
        "filter parameter is empty"
    );
    assert_eq!(
        FilterError::grammar_mismatch("xx").to_string(),
        "invalid parameter format: xx"
    );
    assert_eq!(
        FilterError::unsupported_operator(OperatorTag::Lt, CompileMode::Unbounded).to_string(),
        "unsupported operator 'lt' for unbounded filters"
    );
}
