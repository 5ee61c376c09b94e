//! Entry store over a key-value port.
//!
//! The whole collection lives under one key and is read-modify-written on
//! every mutation. There is no locking: two mutations racing on the same
//! store both read the same snapshot and the later write wins.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::calendar::date_key;
use crate::clock::{Clock, SystemClock};
use crate::entry::{generate_entry_id, DiaryEntry, EntryUpdate, NewEntry};
use crate::error::{DiaryError, Result};
use crate::stats::{self, YearStats};
use crate::storage::{KeyValueStore, ENTRIES_KEY};

/// Diary entries persisted as one serialized list.
pub struct EntryStore<S> {
    storage: S,
    clock: Arc<dyn Clock>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Create a store using the wall clock for timestamps.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: S, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load every entry.
    ///
    /// A missing key, an unreadable backend or a blob that does not decode
    /// as a list of entries all yield an empty list.
    pub async fn get_all(&self) -> Vec<DiaryEntry> {
        let raw = match self.storage.get(ENTRIES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read diary entries");
                return Vec::new();
            }
        };
        if raw.is_empty() {
            return Vec::new();
        }
        match serde_json::from_str::<Vec<DiaryEntry>>(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "stored diary entries did not decode");
                Vec::new()
            }
        }
    }

    async fn save_all(&self, entries: &[DiaryEntry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)?;
        self.storage.set(ENTRIES_KEY, &serialized).await?;
        tracing::debug!(count = entries.len(), "persisted diary entries");
        Ok(())
    }

    /// Create an entry with a fresh id and timestamp, and persist it.
    ///
    /// The date key is stored as given; callers validate it.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the write fails.
    pub async fn add(&self, new_entry: NewEntry) -> Result<DiaryEntry> {
        let mut all = self.get_all().await;
        let created_at = self.clock.now_millis();
        let entry = DiaryEntry {
            id: generate_entry_id(created_at),
            date: new_entry.date,
            text: new_entry.text.trim().to_string(),
            image_uris: new_entry.image_uris,
            tags: new_entry.tags,
            created_at,
        };
        all.push(entry.clone());
        self.save_all(&all).await?;
        tracing::debug!(id = %entry.id, date = %entry.date, "added diary entry");
        Ok(entry)
    }

    pub async fn get_by_id(&self, id: &str) -> Option<DiaryEntry> {
        self.get_all().await.into_iter().find(|e| e.id == id)
    }

    /// Merge `update` into the entry with `id`.
    ///
    /// Returns `Ok(None)` without writing when no entry has that id.
    pub async fn update(&self, id: &str, update: EntryUpdate) -> Result<Option<DiaryEntry>> {
        let mut all = self.get_all().await;
        let Some(index) = all.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        update.apply_to(&mut all[index]);
        self.save_all(&all).await?;
        Ok(Some(all.swap_remove(index)))
    }

    /// Remove the entry with `id`.
    ///
    /// Returns `Ok(false)` without writing when no entry has that id.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let all = self.get_all().await;
        let before = all.len();
        let remaining: Vec<DiaryEntry> = all.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }
        self.save_all(&remaining).await?;
        tracing::debug!(id, "deleted diary entry");
        Ok(true)
    }

    /// Entries for one date key, oldest first.
    pub async fn entries_by_date(&self, date: &str) -> Vec<DiaryEntry> {
        let mut entries: Vec<DiaryEntry> = self
            .get_all()
            .await
            .into_iter()
            .filter(|e| e.date == date)
            .collect();
        entries.sort_by_key(|e| e.created_at);
        entries
    }

    pub async fn entries_on(&self, date: NaiveDate) -> Vec<DiaryEntry> {
        self.entries_by_date(&date_key(date)).await
    }

    /// Entries written on the same month and day in any year.
    ///
    /// Most recent year first; oldest first within a year.
    pub async fn entries_by_month_day(&self, month: u32, day: u32) -> Vec<DiaryEntry> {
        let suffix = format!("-{:02}-{:02}", month, day);
        let mut entries: Vec<DiaryEntry> = self
            .get_all()
            .await
            .into_iter()
            .filter(|e| e.date.ends_with(&suffix))
            .collect();
        entries.sort_by(|a, b| {
            b.year()
                .cmp(&a.year())
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        entries
    }

    /// Entries carrying `tag` (trimmed, case-insensitive), newest first.
    pub async fn entries_by_tag(&self, tag: &str) -> Vec<DiaryEntry> {
        let needle = tag.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut entries: Vec<DiaryEntry> = self
            .get_all()
            .await
            .into_iter()
            .filter(|e| e.has_tag_normalized(&needle))
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    /// Every tag in use, trimmed and deduplicated, ignoring case when sorting.
    pub async fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .get_all()
            .await
            .iter()
            .flat_map(|e| e.tags.iter())
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        let mut tags: Vec<String> = tags.into_iter().collect();
        tags.sort_by(|a, b| stats::compare_tags(a, b));
        tags
    }

    pub async fn year_stats(&self, year: i32) -> YearStats {
        stats::year_stats(&self.get_all().await, year)
    }

    /// Date keys in `year`/`month` that have at least one entry.
    pub async fn dates_with_entries(&self, year: i32, month: u32) -> Result<BTreeSet<String>> {
        if !(1..=12).contains(&month) {
            return Err(DiaryError::InvalidInput(format!(
                "Month out of range: {}",
                month
            )));
        }
        let prefix = format!("{}-{:02}-", year, month);
        Ok(self
            .get_all()
            .await
            .into_iter()
            .filter(|e| e.date.starts_with(&prefix))
            .map(|e| e.date)
            .collect())
    }
}
