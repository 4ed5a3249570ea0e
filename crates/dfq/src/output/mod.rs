//! Output formatting utilities for the dfq CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`records`] - Record output formatting (filter results)
//! - [`filters`] - Filter parameter output formatting (parse, operators)
//! - [`helpers`] - Common formatting utilities (truncation, dates, predicates)

mod filters;
pub mod helpers;
mod records;

// Records
pub use records::{format_records_json, format_records_table};

// Filters
pub use filters::{
    format_operators_json, format_operators_table, format_parsed_json, format_parsed_table,
};
