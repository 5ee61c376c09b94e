//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - A per-invocation context that opens the store lazily

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{not_found_entry, resolve_config_path};
