//! Editing rules applied before an entry reaches the store.
//!
//! The store accepts any tag or image list; the limits here are enforced by
//! whoever composes the entry.

use crate::entry::{DiaryEntry, EntryUpdate, NewEntry};

/// Maximum number of tags on one entry.
pub const MAX_TAGS: usize = 3;

/// Maximum number of images attached to one entry.
pub const MAX_IMAGES: usize = 10;

/// Why a tag was not added to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRejection {
    Blank,
    Duplicate,
    LimitReached,
}

/// An entry being written or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    text: String,
    image_uris: Vec<String>,
    tags: Vec<String>,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft from a stored entry.
    pub fn from_entry(entry: &DiaryEntry) -> Self {
        Self {
            text: entry.text.clone(),
            image_uris: entry.image_uris.clone(),
            tags: entry.tags.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image_uris(&self) -> &[String] {
        &self.image_uris
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Add a trimmed tag unless it is blank, already present, or the draft
    /// is full.
    pub fn add_tag(&mut self, tag: &str) -> Result<(), TagRejection> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TagRejection::Blank);
        }
        if self.tags.iter().any(|t| t == tag) {
            return Err(TagRejection::Duplicate);
        }
        if self.tags.len() >= MAX_TAGS {
            return Err(TagRejection::LimitReached);
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove the tag at `index`; out-of-range indexes are ignored.
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Append images, keeping at most `MAX_IMAGES`. Returns how many were kept.
    pub fn add_images<I, U>(&mut self, uris: I) -> usize
    where
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        let before = self.image_uris.len();
        self.image_uris.extend(
            uris.into_iter()
                .map(Into::into)
                .filter(|u: &String| !u.is_empty()),
        );
        self.image_uris.truncate(MAX_IMAGES);
        self.image_uris.len().saturating_sub(before)
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.image_uris.len()).then(|| self.image_uris.remove(index))
    }

    pub fn clear_images(&mut self) {
        self.image_uris.clear();
    }

    /// Whether the draft lacks text. Images alone are not enough to save.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn into_new_entry(self, date: impl Into<String>) -> NewEntry {
        NewEntry::new(date, self.text)
            .with_images(self.image_uris)
            .with_tags(self.tags)
    }

    /// An update replacing text, images and tags.
    pub fn into_update(self) -> EntryUpdate {
        EntryUpdate::new()
            .text(self.text)
            .image_uris(self.image_uris)
            .tags(self.tags)
    }
}
