//! Helper functions for CLI commands.

mod parsing;

pub use parsing::{resolve_date, resolve_year, today};
