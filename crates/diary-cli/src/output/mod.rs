//! Output formatting helpers for the CLI.
//!
//! Entries are displayed as JSON, a table, or plain tab-separated lines
//! depending on the resolved `OutputMode`.

mod json;
mod text;

pub use json::print_json;
pub use text::{print_entry, print_entry_list};
