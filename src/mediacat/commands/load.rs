use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Import one or more snapshot files into the catalog.
///
/// Per-record validation failures become warnings; every valid record
/// is still added. An unreadable or malformed snapshot aborts only its
/// own file, is reported at error level, and the batch moves on.
pub fn run(catalog: &mut Catalog, paths: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        match catalog.load(path) {
            Ok(report) => {
                for failure in &report.failures {
                    result.add_message(CmdMessage::warning(format!("skipped {}", failure)));
                }
                result.add_message(CmdMessage::success(format!(
                    "Imported {} file(s) from {}",
                    report.files.len(),
                    path
                )));
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!("could not load {}: {}", path, e)));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use std::fs;

    #[test]
    fn loads_valid_records_and_warns_on_invalid_ones() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("media.json");
        fs::write(
            &snapshot,
            r#"[
                {"fullpath": "/a/b.jpg", "type": "image",
                 "metadata": {"creator": "X", "resolution": "1080p"}},
                {"fullpath": "/m/song.mp3", "type": "audio",
                 "metadata": {"creator": "Y"}}
            ]"#,
        )
        .unwrap();

        let mut catalog = Catalog::new();
        let result = run(&mut catalog, &[snapshot.to_str().unwrap().to_string()]).unwrap();

        assert_eq!(catalog.len(), 1);
        let warnings: Vec<_> = result
            .messages
            .iter()
            .filter(|m| matches!(m.level, MessageLevel::Warning))
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].content.contains("/m/song.mp3"));
        assert!(warnings[0].content.contains("runtime"));
    }

    #[test]
    fn a_missing_snapshot_does_not_block_the_next_one() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        fs::write(
            &good,
            r#"[{"fullpath": "/a/b.txt", "type": "document", "metadata": {"creator": "X"}}]"#,
        )
        .unwrap();

        let mut catalog = Catalog::new();
        let result = run(
            &mut catalog,
            &[
                dir.path().join("absent.json").to_str().unwrap().to_string(),
                good.to_str().unwrap().to_string(),
            ],
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error)));
    }
}
