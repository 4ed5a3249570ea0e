//! Record output formatting.

use datefilter_rs::Record;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_record_date, truncate_str};
use crate::commands::config::DateFormat;

/// JSON output structure for the filter command.
#[derive(Serialize)]
pub struct RecordsListOutput<'a> {
    pub records: &'a [&'a Record],
    pub count: usize,
}

/// Formats matching records as JSON.
pub fn format_records_json(records: &[&Record]) -> Result<String, serde_json::Error> {
    let output = RecordsListOutput {
        records,
        count: records.len(),
    };
    serde_json::to_string_pretty(&output)
}

/// Renders extra record fields as `key=value` pairs.
fn format_attributes(record: &Record, max_len: usize) -> String {
    let pairs: Vec<String> = record
        .attributes
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect();
    truncate_str(&pairs.join(" "), max_len)
}

/// Formats matching records as a table.
pub fn format_records_table(records: &[&Record], date_format: DateFormat, use_colors: bool) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<12} {:<18} {}", "ID", "Date", "Attributes");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for record in records {
        let line = format!(
            "{:<12} {} {}",
            truncate_str(&record.id.to_string(), 12),
            format_record_date(record, date_format, 18, use_colors),
            format_attributes(record, 48)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let footer = format!("{} record(s)", records.len());
    if use_colors {
        output.push_str(&format!("{}\n", footer.dimmed()));
    } else {
        output.push_str(&footer);
        output.push('\n');
    }

    output
}
