//! Parse command implementation.
//!
//! Parses a filter parameter and shows the operator, anchor instant and, for
//! operators that compile without a period, the resulting predicate.

use datefilter_rs::{FilterCompiler, FilterExpression, FilterParser, Predicate};
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_parsed_json, format_parsed_table};

/// Result of parsing a filter parameter.
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed expression.
    pub expression: FilterExpression,
    /// The compiled predicate, absent for period-bounded operators.
    pub predicate: Option<Predicate>,
}

/// Parses and, where possible, compiles a filter parameter.
pub fn parse_filter(filter: &str) -> Result<ParseResult> {
    let expression = FilterParser::parse(filter)?;
    let predicate = if expression.operator.requires_period() {
        None
    } else {
        Some(FilterCompiler::compile_expression(&expression)?)
    };

    debug!(%expression, ?predicate, "parsed filter parameter");
    Ok(ParseResult {
        expression,
        predicate,
    })
}

/// Executes the parse command.
pub fn execute(ctx: &CommandContext, filter: &str) -> Result<()> {
    let result = parse_filter(filter)?;

    if ctx.json_output {
        println!("{}", format_parsed_json(&result)?);
    } else if !ctx.quiet {
        print!("{}", format_parsed_table(&result, ctx.use_colors));
    }
    Ok(())
}
