//! The inverted term index backing search.
//!
//! Terms are metadata values, lowercased at the index boundary so that
//! lookups are case-insensitive. Each term maps to the files carrying
//! that value anywhere in their metadata list. Files are referenced by
//! their position in the catalog's file list; positions are stable
//! because files are never individually removed from the catalog.

use crate::model::MediaFile;
use std::collections::HashMap;

/// Position of a file in the catalog's file list.
pub type FileId = usize;

#[derive(Debug, Default)]
pub struct Indexer {
    index: HashMap<String, Vec<FileId>>,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the files indexed under a term. Exact match on the
    /// lowercased key.
    pub fn search(&self, term: &str) -> &[FileId] {
        self.index
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Index every metadata value of a file.
    pub fn add_file(&mut self, id: FileId, file: &MediaFile) {
        for term in file.terms() {
            self.add_term(term, id);
        }
    }

    /// Add a single term/file mapping. A file appears at most once per
    /// term, so identical values within one file collapse.
    pub fn add_term(&mut self, term: &str, id: FileId) {
        let bucket = self.index.entry(term.to_lowercase()).or_default();
        if !bucket.contains(&id) {
            bucket.push(id);
        }
    }

    /// Remove a term/file mapping. Empty buckets are dropped so the
    /// index never holds dangling terms.
    pub fn remove_term(&mut self, term: &str, id: FileId) {
        let key = term.to_lowercase();
        if let Some(bucket) = self.index.get_mut(&key) {
            bucket.retain(|f| *f != id);
            if bucket.is_empty() {
                self.index.remove(&key);
            }
        }
    }

    /// Rebuild the whole index from a file list.
    pub fn reindex<'a>(&mut self, files: impl IntoIterator<Item = &'a MediaFile>) {
        self.index.clear();
        for (id, file) in files.into_iter().enumerate() {
            self.add_file(id, file);
        }
    }

    /// Number of distinct terms currently indexed.
    pub fn term_count(&self) -> usize {
        self.index.len()
    }
}
