//! Append-only, categorized store of saved assistant outputs.

use std::collections::HashMap;

use chrono::Utc;

use crate::types::NotepadEntry;

/// Notepad buckets keyed by category.
///
/// Saving is append-only in insertion order; saving the same content twice
/// files two entries.
#[derive(Debug, Default)]
pub struct Notepad {
    buckets: HashMap<String, Vec<NotepadEntry>>,
}

impl Notepad {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `content` under `category` and return the stored entry.
    pub fn save(&mut self, category: &str, content: &str) -> NotepadEntry {
        let entry = NotepadEntry {
            category: category.to_string(),
            content: content.to_string(),
            saved_at: Utc::now(),
        };
        self.buckets
            .entry(category.to_string())
            .or_default()
            .push(entry.clone());
        entry
    }

    /// Snapshot of one category's entries in insertion order.
    pub fn entries(&self, category: &str) -> Vec<NotepadEntry> {
        self.buckets.get(category).cloned().unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.buckets.keys().cloned().collect();
        categories.sort();
        categories
    }
}
