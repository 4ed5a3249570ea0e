//! Operators command implementation.

use datefilter_rs::filter::OperatorTag;

use super::{CommandContext, Result};
use crate::output::{format_operators_json, format_operators_table};

/// Lists every supported filter operator.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_operators_json(&OperatorTag::ALL)?);
    } else if !ctx.quiet {
        print!("{}", format_operators_table(&OperatorTag::ALL, ctx.use_colors));
    }
    Ok(())
}
