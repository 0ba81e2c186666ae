use crate::catalog::Catalog;
use crate::commands::ListedFile;
use crate::error::{CatalogError, Result};
use crate::model::MediaFile;

/// Pair every catalog file with its 1-based position.
pub fn listed_all(catalog: &Catalog) -> Vec<ListedFile> {
    catalog
        .all()
        .iter()
        .enumerate()
        .map(|(i, file)| ListedFile {
            position: i + 1,
            file: file.clone(),
            kind: file.kind(),
        })
        .collect()
}

/// Keep only the catalog entries present in `matches`, positions intact.
/// Matching is by identity of the reference, not file equality, so
/// duplicate paths stay distinguishable.
pub fn listed_subset(catalog: &Catalog, matches: &[&MediaFile]) -> Vec<ListedFile> {
    catalog
        .all()
        .iter()
        .enumerate()
        .filter(|(_, file)| matches.iter().any(|m| std::ptr::eq(*m, *file)))
        .map(|(i, file)| ListedFile {
            position: i + 1,
            file: file.clone(),
            kind: file.kind(),
        })
        .collect()
}

/// Resolve a 1-based position into a catalog file.
pub fn file_at(catalog: &Catalog, position: usize) -> Result<&MediaFile> {
    if position == 0 {
        return Err(CatalogError::OutOfRange(position));
    }
    catalog
        .get(position - 1)
        .ok_or(CatalogError::OutOfRange(position))
}
