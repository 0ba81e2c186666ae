//! The import/export transform between the catalog's internal model and
//! its serialized snapshot form.
//!
//! A snapshot is a JSON array of records, each carrying a full path, a
//! kind discriminator and a string-to-string metadata map. Import
//! validates each record against its declared kind's required keywords;
//! records that fail are collected into the [`ImportReport`] rather than
//! aborting the batch, so one bad record never blocks the rest.
//!
//! Export derives each file's kind from its metadata (files satisfying
//! no required set are tagged `unknown`) and flattens the metadata list
//! into a map, last write winning on duplicate keywords.

use crate::error::{CatalogError, Result};
use crate::model::{Kind, MediaFile, Metadata};
use crate::validate::ValidatorSuite;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const UNKNOWN_KIND_TAG: &str = "unknown";

/// One serialized catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub fullpath: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub metadata: BTreeMap<String, String>,
}

impl Record {
    /// Serialize a file back into record form. Duplicate keywords
    /// collapse last-write-wins, matching the metadata list order.
    pub fn from_file(file: &MediaFile) -> Record {
        let mut metadata = BTreeMap::new();
        for m in file.metadata() {
            metadata.insert(m.keyword().to_string(), m.value().to_string());
        }
        let kind = file
            .kind()
            .map(Kind::tag)
            .unwrap_or(UNKNOWN_KIND_TAG)
            .to_string();
        Record {
            fullpath: file.fullpath(),
            kind,
            metadata,
        }
    }
}

/// Why a single record was rejected during import.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown kind tag: {0}")]
    UnknownKind(String),

    #[error("missing required keywords: {}", .0.join(", "))]
    MissingKeywords(Vec<String>),
}

/// A rejected record, keyed by its source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    pub fullpath: String,
    pub error: RecordError,
}

impl std::fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.fullpath, self.error)
    }
}

/// The outcome of importing one snapshot: the files that validated and
/// the records that did not. A batch with failures still yields its
/// valid files.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub files: Vec<MediaFile>,
    pub failures: Vec<RecordFailure>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reads a snapshot into typed files.
pub trait Importer {
    fn read(&self, filename: &str) -> Result<ImportReport>;
}

/// Writes a list of files out as a snapshot.
pub trait Exporter {
    fn write(&self, filename: &str, files: &[MediaFile]) -> Result<()>;
}

/// Validate one record and construct its file.
fn convert(record: Record) -> std::result::Result<MediaFile, RecordFailure> {
    let Some(kind) = Kind::from_tag(&record.kind) else {
        return Err(RecordFailure {
            fullpath: record.fullpath,
            error: RecordError::UnknownKind(record.kind),
        });
    };

    // BTreeMap iteration gives a deterministic metadata order.
    let metadata: Vec<Metadata> = record
        .metadata
        .iter()
        .map(|(k, v)| Metadata::new(k.clone(), v.clone()))
        .collect();

    let errors = ValidatorSuite::for_kind(kind).validate(&metadata);
    if !errors.is_empty() {
        return Err(RecordFailure {
            fullpath: record.fullpath,
            error: RecordError::MissingKeywords(
                errors.iter().map(|e| e.keyword().to_string()).collect(),
            ),
        });
    }

    Ok(MediaFile::from_fullpath(&record.fullpath, metadata))
}

/// Expand `~/` against the home directory and resolve relative paths
/// against the current directory. Absolute paths pass through.
pub fn normalize_path(filename: &str) -> PathBuf {
    if let Some(rest) = filename.strip_prefix("~/") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    let path = Path::new(filename);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn read_snapshot(filename: &str) -> Result<String> {
    let path = normalize_path(filename);
    fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::NotFound(filename.to_string()),
        std::io::ErrorKind::PermissionDenied => CatalogError::Permission(filename.to_string()),
        _ => CatalogError::Io(e),
    })
}

/// The JSON snapshot importer.
#[derive(Debug, Default)]
pub struct JsonImporter;

impl JsonImporter {
    /// Parse snapshot text directly, without touching the filesystem.
    pub fn read_str(&self, content: &str) -> Result<ImportReport> {
        let records: Vec<Record> = serde_json::from_str(content)?;
        let mut report = ImportReport::default();
        for record in records {
            match convert(record) {
                Ok(file) => report.files.push(file),
                Err(failure) => report.failures.push(failure),
            }
        }
        Ok(report)
    }
}

impl Importer for JsonImporter {
    fn read(&self, filename: &str) -> Result<ImportReport> {
        self.read_str(&read_snapshot(filename)?)
    }
}

/// The JSON snapshot exporter.
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn write_string(&self, files: &[MediaFile]) -> Result<String> {
        let records: Vec<Record> = files.iter().map(Record::from_file).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl Exporter for JsonExporter {
    fn write(&self, filename: &str, files: &[MediaFile]) -> Result<()> {
        let path = normalize_path(filename);
        fs::write(&path, self.write_string(files)?).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::NotFound(filename.to_string()),
            std::io::ErrorKind::PermissionDenied => CatalogError::Permission(filename.to_string()),
            _ => CatalogError::Io(e),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_IMAGE: &str = r#"[
        {
            "fullpath": "/a/b.jpg",
            "type": "image",
            "metadata": {"creator": "X", "resolution": "1080p"}
        }
    ]"#;

    #[test]
    fn imports_a_valid_record() {
        let report = JsonImporter.read_str(VALID_IMAGE).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.files.len(), 1);
        let file = &report.files[0];
        assert_eq!(file.fullpath(), "/a/b.jpg");
        assert_eq!(file.kind(), Some(Kind::Image));
    }

    #[test]
    fn missing_keywords_are_all_reported() {
        let content = r#"[
            {"fullpath": "/m/song.mp3", "type": "video", "metadata": {"creator": "X"}}
        ]"#;
        let report = JsonImporter.read_str(content).unwrap();
        assert!(report.files.is_empty());
        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.fullpath, "/m/song.mp3");
        match &failure.error {
            RecordError::MissingKeywords(missing) => {
                let mut missing = missing.clone();
                missing.sort_unstable();
                assert_eq!(missing, ["resolution", "runtime"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn audio_without_runtime_adds_nothing() {
        let content = r#"[
            {"fullpath": "/m/song.mp3", "type": "audio", "metadata": {"creator": "X"}}
        ]"#;
        let report = JsonImporter.read_str(content).unwrap();
        assert_eq!(report.files.len(), 0);
        assert_eq!(report.failures.len(), 1);
        match &report.failures[0].error {
            RecordError::MissingKeywords(missing) => assert_eq!(missing, &["runtime"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unknown_kind_fails_that_record_only() {
        let content = r#"[
            {"fullpath": "/x/y.bin", "type": "novel", "metadata": {"creator": "X"}},
            {"fullpath": "/a/b.jpg", "type": "image",
             "metadata": {"creator": "X", "resolution": "1080p"}}
        ]"#;
        let report = JsonImporter.read_str(content).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].error,
            RecordError::UnknownKind("novel".to_string())
        );
    }

    #[test]
    fn mixed_batch_yields_both_files_and_failures() {
        let content = r#"[
            {"fullpath": "/ok/1.txt", "type": "document", "metadata": {"creator": "A"}},
            {"fullpath": "/bad/2.mp3", "type": "audio", "metadata": {"creator": "B"}},
            {"fullpath": "/ok/3.txt", "type": "document", "metadata": {"creator": "C"}},
            {"fullpath": "/bad/4.avi", "type": "video", "metadata": {}}
        ]"#;
        let report = JsonImporter.read_str(content).unwrap();
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn export_derives_the_kind_tag() {
        let file = MediaFile::from_fullpath(
            "/a/b.avi",
            vec![
                Metadata::new("creator", "X"),
                Metadata::new("resolution", "4k"),
                Metadata::new("runtime", "120"),
            ],
        );
        let record = Record::from_file(&file);
        assert_eq!(record.kind, "video");
        assert_eq!(record.fullpath, "/a/b.avi");
    }

    #[test]
    fn export_flattens_duplicate_keywords_last_write_wins() {
        let file = MediaFile::from_fullpath(
            "/a/b.txt",
            vec![Metadata::new("creator", "old"), Metadata::new("creator", "new")],
        );
        let record = Record::from_file(&file);
        assert_eq!(record.metadata.get("creator"), Some(&"new".to_string()));
        assert_eq!(record.metadata.len(), 1);
    }

    #[test]
    fn unclassifiable_file_exports_as_unknown() {
        let file =
            MediaFile::from_fullpath("/a/b.xyz", vec![Metadata::new("label", "misc")]);
        assert_eq!(Record::from_file(&file).kind, UNKNOWN_KIND_TAG);
    }

    #[test]
    fn roundtrip_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("catalog.json");

        let original = JsonImporter.read_str(VALID_IMAGE).unwrap().files;
        JsonExporter
            .write(snapshot.to_str().unwrap(), &original)
            .unwrap();
        let reimported = JsonImporter.read(snapshot.to_str().unwrap()).unwrap();

        assert!(reimported.is_clean());
        assert_eq!(reimported.files, original);
        assert_eq!(
            Record::from_file(&reimported.files[0]),
            Record::from_file(&original[0])
        );
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = JsonImporter.read(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn malformed_snapshot_is_a_decode_error() {
        let err = JsonImporter.read_str("not json at all").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
