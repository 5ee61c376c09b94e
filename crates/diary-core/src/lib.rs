//! # Diary Core
//!
//! Core library for Diary - a calendar-based personal diary with photos,
//! tags, and yearly statistics.
//!
//! This crate provides the data model, the key-value storage port and the
//! entry store built on top of it, independent of any front end.
//!
//! ## Architecture
//!
//! - **storage**: Key-value port and its memory/file implementations
//! - **entry**: Diary entry model, builders and id generation
//! - **store**: `EntryStore` with CRUD, date/tag queries and year stats
//! - **stats**: Year aggregation and tag ranking
//! - **calendar**: Date keys, month grids and week strips
//! - **chart**: Pie chart geometry for monthly counts
//! - **draft**: Editing rules applied before an entry is saved
//! - **purchase**: Ad-removal flag and in-app purchase flow

pub mod calendar;
pub mod chart;
pub mod clock;
pub mod draft;
pub mod entry;
pub mod error;
pub mod fs;
pub mod purchase;
pub mod stats;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{DiaryEntry, EntryUpdate, NewEntry};
pub use error::{DiaryError, Result};
pub use stats::{TagRank, YearStats};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::EntryStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
