//! Diary entry model.
//!
//! Entries are serialized with camelCase keys; this is the layout of the
//! stored collection blob.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ID_SUFFIX_LEN: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One diary record for a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Unique identifier (`entry_<millis>_<suffix>`)
    pub id: String,

    /// Calendar date key, `YYYY-MM-DD`
    pub date: String,

    /// Trimmed free text
    pub text: String,

    /// Local image references, in display order
    #[serde(default)]
    pub image_uris: Vec<String>,

    /// User-assigned labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

impl DiaryEntry {
    /// Year component of the date key, if it parses.
    pub fn year(&self) -> Option<i32> {
        self.date.get(0..4)?.parse().ok()
    }

    /// Month component (1..=12) of the date key, if it parses.
    pub fn month(&self) -> Option<u32> {
        self.date.get(5..7)?.parse().ok()
    }

    /// Whether any tag matches `needle` after trimming, ignoring case.
    ///
    /// `needle` must already be trimmed and lowercased.
    pub fn has_tag_normalized(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|t| t.trim().to_lowercase() == needle)
    }
}

/// Builder for creating new entries.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: String,
    pub text: String,
    pub image_uris: Vec<String>,
    pub tags: Vec<String>,
}

impl NewEntry {
    pub fn new(date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            text: text.into(),
            image_uris: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_images(mut self, image_uris: Vec<String>) -> Self {
        self.image_uris = image_uris;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Partial update; only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub text: Option<String>,
    pub image_uris: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl EntryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn image_uris(mut self, image_uris: Vec<String>) -> Self {
        self.image_uris = Some(image_uris);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image_uris.is_none() && self.tags.is_none()
    }

    /// Merge into `entry`. Identity fields are never touched.
    pub fn apply_to(self, entry: &mut DiaryEntry) {
        if let Some(text) = self.text {
            entry.text = text.trim().to_string();
        }
        if let Some(image_uris) = self.image_uris {
            entry.image_uris = image_uris;
        }
        if let Some(tags) = self.tags {
            entry.tags = tags;
        }
    }
}

/// Generate an entry id from a creation timestamp and a random suffix.
pub fn generate_entry_id(created_at: i64) -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        suffix.push(BASE36[(bits % 36) as usize] as char);
        bits /= 36;
    }
    format!("entry_{}_{}", created_at, suffix)
}
