//! Filter parameter output formatting.

use datefilter_rs::filter::{OperatorTag, Precision};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{describe_predicate, format_instant};
use crate::commands::parse::ParseResult;

/// JSON output structure for the parse command.
#[derive(Serialize)]
pub struct ParsedOutput {
    pub canonical: String,
    pub operator: OperatorTag,
    pub instant: String,
    pub precision: Precision,
    pub requires_period: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Formats a parsed filter parameter as JSON.
pub fn format_parsed_json(result: &ParseResult) -> Result<String, serde_json::Error> {
    let expr = &result.expression;
    let output = ParsedOutput {
        canonical: expr.to_string(),
        operator: expr.operator,
        instant: format_instant(expr.instant),
        precision: expr.precision,
        requires_period: expr.operator.requires_period(),
        condition: result.predicate.as_ref().map(describe_predicate),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a parsed filter parameter for terminal display.
pub fn format_parsed_table(result: &ParseResult, use_colors: bool) -> String {
    let expr = &result.expression;
    let mut output = String::new();

    let title = expr.to_string();
    if use_colors {
        output.push_str(&format!("{}\n\n", title.bold()));
    } else {
        output.push_str(&format!("{title}\n\n"));
    }

    output.push_str(&format!(
        "Operator:  {} ({})\n",
        expr.operator,
        expr.operator.description()
    ));
    output.push_str(&format!("Instant:   {}\n", format_instant(expr.instant)));
    let precision = match expr.precision {
        Precision::Date => "date",
        Precision::DateTime => "date and time",
    };
    output.push_str(&format!("Precision: {precision}\n"));

    match &result.predicate {
        Some(predicate) => {
            output.push_str(&format!("Condition: {}\n", describe_predicate(predicate)));
        }
        None => {
            let note = "Condition: needs a period (use `dfq filter --start/--end`)";
            if use_colors {
                output.push_str(&format!("{}\n", note.yellow()));
            } else {
                output.push_str(note);
                output.push('\n');
            }
        }
    }

    output
}

/// JSON output structure for a single operator.
#[derive(Serialize)]
pub struct OperatorOutput {
    pub operator: OperatorTag,
    pub description: &'static str,
    pub requires_period: bool,
}

/// Formats the operator list as JSON.
pub fn format_operators_json(operators: &[OperatorTag]) -> Result<String, serde_json::Error> {
    let output: Vec<OperatorOutput> = operators
        .iter()
        .map(|&op| OperatorOutput {
            operator: op,
            description: op.description(),
            requires_period: op.requires_period(),
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "operators": output }))
}

/// Formats the operator list as a table.
pub fn format_operators_table(operators: &[OperatorTag], use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!("{:<4} {:<8} {}", "Op", "Period", "Meaning");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for op in operators {
        let period = if op.requires_period() { "yes" } else { "" };
        let line = format!("{:<4} {:<8} {}", op.as_str(), period, op.description());
        output.push_str(&line);
        output.push('\n');
    }

    output
}
