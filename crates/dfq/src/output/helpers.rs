//! Common helper functions for output formatting.

use chrono::NaiveDateTime;
use datefilter_rs::{Predicate, Record};
use owo_colors::OwoColorize;

use crate::commands::config::DateFormat;

/// Truncates a string to a maximum length, counting characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a record date as a table cell padded to `width`.
///
/// Date-only records (stored at midnight) omit the time of day and are dimmed.
/// Padding is applied before coloring so columns stay aligned.
pub fn format_record_date(
    record: &Record,
    format: DateFormat,
    width: usize,
    use_colors: bool,
) -> String {
    let date = record.record_date;
    let undated = !record.has_time_of_day();
    let display = match (format, undated) {
        (DateFormat::Iso, true) => date.format("%Y-%m-%d").to_string(),
        (DateFormat::Iso, false) => date.format("%Y-%m-%dT%H:%M").to_string(),
        (DateFormat::Short, true) => date.format("%b %d %Y").to_string(),
        (DateFormat::Short, false) => date.format("%b %d %Y %H:%M").to_string(),
    };
    let cell = format!("{display:<width$}");

    if use_colors && undated {
        cell.dimmed().to_string()
    } else {
        cell
    }
}

/// Formats a timestamp in the canonical `YYYY-MM-DDTHH:MM` form.
pub fn format_instant(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m-%dT%H:%M").to_string()
}

/// Describes a compiled predicate as a readable condition on `r`.
pub fn describe_predicate(predicate: &Predicate) -> String {
    match *predicate {
        Predicate::Within { start, end } => {
            format!("{} <= r < {}", format_instant(start), format_instant(end))
        }
        Predicate::Outside { start, end } => {
            format!("r < {} or r >= {}", format_instant(start), format_instant(end))
        }
        Predicate::AtOrAfter(instant) => format!("r >= {}", format_instant(instant)),
        Predicate::AtOrBefore(instant) => format!("r <= {}", format_instant(instant)),
        Predicate::Before(instant) => format!("r < {}", format_instant(instant)),
        Predicate::SameDayOfYear(ordinal) => format!("day of year of r = {ordinal}"),
        Predicate::PeriodBefore {
            start,
            cutoff,
            anchor_ordinal,
        } => {
            let lower = start.map_or(String::new(), |s| format!("{} <= ", format_instant(s)));
            format!(
                "{lower}r < {} or r is midnight on day of year {anchor_ordinal}",
                format_instant(cutoff)
            )
        }
        Predicate::PeriodAfter {
            cutoff,
            end,
            anchor_ordinal,
        } => {
            let upper = end.map_or(String::new(), |e| format!(" <= {}", format_instant(e)));
            format!(
                "{} < r{upper} or r is midnight on day of year {anchor_ordinal}",
                format_instant(cutoff)
            )
        }
    }
}
