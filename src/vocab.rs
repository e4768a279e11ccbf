//! The vocabulary store: reference lists, the two class lists and the
//! user-edited list, overlaid into one pool keyed by lowercase headword.

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{ClassList, VocabEntry};

/// Overlays `layers` in order. A later entry with the same (case-insensitive)
/// headword replaces the earlier one entirely; synonym lists are not combined.
/// The position of a key is where it was first seen.
pub fn merge_layers<'a, I>(layers: I) -> Vec<VocabEntry>
where
    I: IntoIterator<Item = &'a [VocabEntry]>,
{
    let mut merged: Vec<VocabEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for layer in layers {
        for entry in layer {
            match index.get(&entry.key()) {
                Some(&i) => merged[i] = entry.clone(),
                None => {
                    index.insert(entry.key(), merged.len());
                    merged.push(entry.clone());
                }
            }
        }
    }

    merged
}

#[derive(Debug, Default, Clone)]
pub struct VocabStore {
    reference: Vec<Vec<VocabEntry>>,
    class_first: Vec<VocabEntry>,
    class_second: Vec<VocabEntry>,
    user: Vec<VocabEntry>,
    merged: Vec<VocabEntry>,
}

impl VocabStore {
    pub fn new(
        reference: Vec<Vec<VocabEntry>>,
        class_first: Vec<VocabEntry>,
        class_second: Vec<VocabEntry>,
        user: Vec<VocabEntry>,
    ) -> Self {
        let tag = |list: Vec<VocabEntry>| -> Vec<VocabEntry> {
            list.into_iter().map(|e| e.with_class_word(true)).collect()
        };

        let mut store = Self {
            reference,
            class_first: tag(class_first),
            class_second: tag(class_second),
            user,
            merged: Vec::new(),
        };
        store.rebuild();
        info!(
            "Vocabulary loaded: {} entries ({} user)",
            store.merged.len(),
            store.user.len()
        );
        store
    }

    fn rebuild(&mut self) {
        let layers = self
            .reference
            .iter()
            .map(Vec::as_slice)
            .chain([
                self.class_first.as_slice(),
                self.class_second.as_slice(),
                self.user.as_slice(),
            ]);
        self.merged = merge_layers(layers);
    }

    /// The full merged pool.
    pub fn all(&self) -> &[VocabEntry] {
        &self.merged
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    pub fn user_entries(&self) -> &[VocabEntry] {
        &self.user
    }

    /// Class-tagged entries of the merged pool, restricted to one class list.
    pub fn class_pool(&self, list: ClassList) -> Vec<VocabEntry> {
        let keys: Option<HashSet<String>> = match list {
            ClassList::First => Some(self.class_first.iter().map(VocabEntry::key).collect()),
            ClassList::Second => Some(self.class_second.iter().map(VocabEntry::key).collect()),
            ClassList::All => None,
        };

        self.merged
            .iter()
            .filter(|e| e.is_class_word)
            .filter(|e| keys.as_ref().map_or(true, |k| k.contains(&e.key())))
            .cloned()
            .collect()
    }

    pub fn find(&self, headword: &str) -> Option<&VocabEntry> {
        self.merged.iter().find(|e| e.same_headword(headword.trim()))
    }

    /// Entries whose headword or any synonym contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&VocabEntry> {
        let needle = term.trim().to_lowercase();
        self.merged
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.headword.to_lowercase().contains(&needle)
                    || e.synonyms.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Adds or replaces a user entry. Blank synonyms are dropped; a user entry
    /// that is replaced keeps its id.
    pub fn upsert_user(
        &mut self,
        headword: &str,
        synonyms: &[String],
        is_class_word: bool,
    ) -> Result<VocabEntry, StoreError> {
        let headword = headword.trim();
        if headword.is_empty() {
            return Err(StoreError::InvalidEntry("headword is empty"));
        }

        let synonyms: Vec<String> = synonyms
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if synonyms.is_empty() {
            return Err(StoreError::InvalidEntry("at least one synonym is required"));
        }

        let key = headword.to_lowercase();
        let existing = self.user.iter().position(|e| e.key() == key);
        let id = existing
            .map(|i| self.user[i].id.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let entry = VocabEntry {
            id,
            headword: headword.to_string(),
            synonyms,
            is_class_word,
        };

        match existing {
            Some(i) => {
                debug!("Replacing user entry '{}'", entry.headword);
                self.user[i] = entry.clone();
            }
            None => {
                debug!("Adding user entry '{}'", entry.headword);
                self.user.push(entry.clone());
            }
        }
        self.rebuild();

        Ok(entry)
    }

    /// Removes the user's version of `headword`. Reference entries under the
    /// same key become visible again. Returns whether anything was removed.
    pub fn remove_user(&mut self, headword: &str) -> bool {
        let key = headword.trim().to_lowercase();
        let before = self.user.len();
        self.user.retain(|e| e.key() != key);
        let removed = self.user.len() != before;
        if removed {
            self.rebuild();
        }
        removed
    }
}

/// Splits comma-separated form input into synonym strings.
pub fn parse_synonym_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
