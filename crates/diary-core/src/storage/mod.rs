//! Key-value storage layer.
//!
//! The diary persists everything as string values under a handful of keys.
//! `KeyValueStore` is the port; `MemoryStore` and `FileStore` implement it.

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Key holding the serialized entry collection.
pub const ENTRIES_KEY: &str = "@daily_story_entries";

/// Key holding the ad-removal purchase flag.
pub const PAID_KEY: &str = "@daily_story_paid";
