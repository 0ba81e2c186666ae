use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MediaFile;

use super::helpers::file_at;

/// Export the catalog, or an explicit subset addressed by 1-based
/// positions, to a snapshot file.
pub fn run(catalog: &Catalog, filename: &str, positions: &[usize]) -> Result<CmdResult> {
    let (files, count): (Vec<MediaFile>, usize) = if positions.is_empty() {
        (catalog.all().to_vec(), catalog.len())
    } else {
        let mut subset = Vec::with_capacity(positions.len());
        for position in positions {
            subset.push(file_at(catalog, *position)?.clone());
        }
        let count = subset.len();
        (subset, count)
    };

    catalog.save_subset(filename, &files)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} file(s) to {}",
        count, filename
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;
    use crate::transfer::{Importer, JsonImporter};

    fn doc(fullpath: &str, creator: &str) -> MediaFile {
        MediaFile::from_fullpath(fullpath, vec![Metadata::new("creator", creator)])
    }

    #[test]
    fn saves_the_whole_catalog_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let mut catalog = Catalog::new();
        catalog.add(doc("/a/1.txt", "x"));
        catalog.add(doc("/a/2.txt", "y"));

        run(&catalog, out.to_str().unwrap(), &[]).unwrap();

        let report = JsonImporter.read(out.to_str().unwrap()).unwrap();
        assert_eq!(report.files.len(), 2);
    }

    #[test]
    fn saves_only_the_addressed_subset() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let mut catalog = Catalog::new();
        catalog.add(doc("/a/1.txt", "x"));
        catalog.add(doc("/a/2.txt", "y"));

        run(&catalog, out.to_str().unwrap(), &[2]).unwrap();

        let report = JsonImporter.read(out.to_str().unwrap()).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].fullpath(), "/a/2.txt");
    }

    #[test]
    fn bad_positions_abort_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let mut catalog = Catalog::new();
        catalog.add(doc("/a/1.txt", "x"));

        assert!(run(&catalog, out.to_str().unwrap(), &[7]).is_err());
        assert!(!out.exists());
    }
}
