//! Filter command implementation.
//!
//! Loads the records file and lists the records selected by a filter parameter.

use datefilter_rs::filter::{parse_timestamp, FilterParser, PeriodBound};
use datefilter_rs::{Record, RecordSet, RecordStore};
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_records_json, format_records_table};

/// Options for the filter command.
#[derive(Debug, Default)]
pub struct FilterOptions {
    /// The filter parameter.
    pub filter: String,
    /// Period start for `lt`.
    pub start: Option<String>,
    /// Period end for `gt`.
    pub end: Option<String>,
    /// Maximum number of records to show.
    pub limit: Option<usize>,
}

impl FilterOptions {
    /// Returns true if either period side was given.
    fn has_period(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Parses the period sides into a [`PeriodBound`].
    pub fn period(&self) -> Result<PeriodBound> {
        let start = self.start.as_deref().map(parse_timestamp).transpose()?;
        let end = self.end.as_deref().map(parse_timestamp).transpose()?;
        Ok(PeriodBound::new(start, end))
    }
}

/// Applies the filter to a record set.
///
/// The period-bounded path is taken when the operator needs one or when a
/// period side was supplied; otherwise the unbounded path is used, so period
/// flags on an unbounded operator surface as an unsupported-operator error.
pub fn select<'a>(set: &'a RecordSet, opts: &FilterOptions) -> Result<Vec<&'a Record>> {
    let expression = FilterParser::parse(&opts.filter)?;

    let mut matches = if expression.operator.requires_period() || opts.has_period() {
        let period = opts.period()?;
        debug!(%expression, ?period, "filtering with period");
        set.filter_by_date_with_period(&opts.filter, period)?
    } else {
        set.filter_by_date(&opts.filter)?
    };

    if let Some(limit) = opts.limit {
        matches.truncate(limit);
    }
    Ok(matches)
}

/// Executes the filter command.
pub fn execute(ctx: &CommandContext, store: &RecordStore, opts: &FilterOptions) -> Result<()> {
    let set = store.load()?;
    if ctx.verbose && !ctx.json_output {
        eprintln!("Loaded {} record(s) from {}", set.len(), store.path().display());
    }
    let matches = select(&set, opts)?;

    debug!(
        total = set.len(),
        selected = matches.len(),
        "filter command finished"
    );

    if ctx.json_output {
        println!("{}", format_records_json(&matches)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_records_table(&matches, ctx.date_format, ctx.use_colors)
        );
    }
    Ok(())
}
