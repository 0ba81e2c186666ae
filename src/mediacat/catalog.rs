//! The catalog facade: single source of truth for tracked files.
//!
//! `Catalog` owns the file list and the inverted index and mediates
//! every read and write. Metadata mutations rebuild the index before
//! returning, so callers never observe the index out of step with the
//! file list.

use crate::error::{CatalogError, Result};
use crate::index::{FileId, Indexer};
use crate::model::{eq_fold, MediaFile, Metadata};
use crate::transfer::{Exporter, ImportReport, Importer, JsonExporter, JsonImporter};

#[derive(Debug, Default)]
pub struct Catalog {
    files: Vec<MediaFile>,
    index: Indexer,
}

/// What a [`Catalog::strip_value`] call did: how many files lost the
/// pair, and the full paths of files left untouched because removal
/// would have broken their required metadata.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StripOutcome {
    pub removed: usize,
    pub skipped: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file and index all of its metadata values. There is no
    /// duplicate check; adding the same path twice yields two entries.
    pub fn add(&mut self, file: MediaFile) {
        let id = self.files.len();
        self.index.add_file(id, &file);
        self.files.push(file);
    }

    /// Every tracked file, in insertion order.
    pub fn all(&self) -> &[MediaFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: FileId) -> Option<&MediaFile> {
        self.files.get(id)
    }

    /// Find files indexed under a metadata value. Case-insensitive
    /// exact match on the value.
    pub fn search(&self, term: &str) -> Vec<&MediaFile> {
        self.index
            .search(term)
            .iter()
            .map(|id| &self.files[*id])
            .collect()
    }

    /// Find files carrying this exact keyword/value pair. Narrows by
    /// value through the index first, then filters on the keyword.
    pub fn search_item(&self, item: &Metadata) -> Vec<&MediaFile> {
        self.search(item.value())
            .into_iter()
            .filter(|f| f.contains(item))
            .collect()
    }

    /// Broad scan, independent of the index: matches files whose
    /// metadata keyword or value, derived kind, filename, or path
    /// equals the term, all case-insensitively. Files satisfying no
    /// required set never match by kind.
    pub fn search_all(&self, term: &str) -> Vec<&MediaFile> {
        self.files
            .iter()
            .filter(|f| {
                f.metadata()
                    .iter()
                    .any(|m| eq_fold(m.keyword(), term) || eq_fold(m.value(), term))
                    || f.kind().is_some_and(|k| eq_fold(k.tag(), term))
                    || eq_fold(f.filename(), term)
                    || eq_fold(f.path(), term)
            })
            .collect()
    }

    /// Remove a keyword/value pair from every file that carries it,
    /// wherever doing so keeps the file's required metadata intact.
    ///
    /// For each file indexed under the value, the file's metadata is
    /// checked with the keyword stripped entirely; only if that reduced
    /// set still satisfies the file's current kind is the pair removed.
    /// Files where removal would break the kind requirement are left
    /// untouched and reported in the outcome. No error is raised.
    pub fn strip_value(&mut self, item: &Metadata) -> StripOutcome {
        let candidates: Vec<FileId> = self.index.search(item.value()).to_vec();
        let mut outcome = StripOutcome::default();

        for id in candidates {
            let file = &self.files[id];
            let reduced: Vec<Metadata> = file
                .metadata()
                .iter()
                .filter(|m| !eq_fold(m.keyword(), item.keyword()))
                .cloned()
                .collect();
            let keeps_kind = match file.kind() {
                Some(kind) => kind
                    .required_keywords()
                    .iter()
                    .all(|kw| crate::model::has_keyword(&reduced, kw)),
                None => true,
            };

            if !keeps_kind {
                if file.contains(item) {
                    outcome.skipped.push(file.fullpath());
                }
                continue;
            }

            if self.files[id].remove_entry(item) {
                outcome.removed += 1;
                // Another entry may still carry the same value under a
                // different keyword; only then does the term stay.
                let value_still_held = self.files[id]
                    .terms()
                    .any(|t| eq_fold(t, item.value()));
                if !value_still_held {
                    self.index.remove_term(item.value(), id);
                }
            }
        }

        outcome
    }

    /// Append a keyword/value pair to every file at this full path,
    /// then reindex. Errors if no file matches.
    pub fn add_metadata(&mut self, fullpath: &str, keyword: &str, value: &str) -> Result<usize> {
        self.mutate(fullpath, |file| file.add_entry(keyword, value))
    }

    /// Replace a keyword on every file at this full path (delete then
    /// add), then reindex. Errors if no file matches.
    pub fn set_metadata(&mut self, fullpath: &str, keyword: &str, value: &str) -> Result<usize> {
        self.mutate(fullpath, |file| file.set_entry(keyword, value))
    }

    /// Drop every entry with this keyword from every file at this full
    /// path, then reindex. Errors if no file matches.
    pub fn delete_metadata(&mut self, fullpath: &str, keyword: &str) -> Result<usize> {
        self.mutate(fullpath, |file| {
            file.delete_keyword(keyword);
        })
    }

    /// Apply a mutation to every file equal to `fullpath`, then rebuild
    /// the index. The rebuild happens before returning so the index
    /// invariant holds again by the time the caller sees the result.
    fn mutate<F: FnMut(&mut MediaFile)>(&mut self, fullpath: &str, mut op: F) -> Result<usize> {
        let mut touched = 0;
        for file in &mut self.files {
            if eq_fold(&file.fullpath(), fullpath) {
                op(file);
                touched += 1;
            }
        }
        if touched == 0 {
            return Err(CatalogError::UnknownFile(fullpath.to_string()));
        }
        self.index.reindex(&self.files);
        Ok(touched)
    }

    /// Import a snapshot and add every file that validated. The report
    /// carries both the added files and the per-record failures; I/O
    /// and decode errors propagate instead.
    pub fn load(&mut self, filename: &str) -> Result<ImportReport> {
        self.load_with(&JsonImporter, filename)
    }

    pub fn load_with(&mut self, importer: &dyn Importer, filename: &str) -> Result<ImportReport> {
        let report = importer.read(filename)?;
        for file in &report.files {
            self.add(file.clone());
        }
        Ok(report)
    }

    /// Export the whole catalog.
    pub fn save(&self, filename: &str) -> Result<()> {
        self.save_subset(filename, &self.files)
    }

    /// Export an explicit subset.
    pub fn save_subset(&self, filename: &str, files: &[MediaFile]) -> Result<()> {
        self.save_with(&JsonExporter, filename, files)
    }

    pub fn save_with(
        &self,
        exporter: &dyn Exporter,
        filename: &str,
        files: &[MediaFile],
    ) -> Result<()> {
        exporter.write(filename, files)
    }
}
