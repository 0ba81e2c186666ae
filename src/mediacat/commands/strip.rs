use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Metadata;

/// Remove a keyword/value pair collection-wide, skipping files where
/// that would break their required metadata.
pub fn run(catalog: &mut Catalog, keyword: &str, value: &str) -> Result<CmdResult> {
    let outcome = catalog.strip_value(&Metadata::new(keyword, value));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {}: {} from {} file(s)",
        keyword, value, outcome.removed
    )));
    for fullpath in &outcome.skipped {
        result.add_message(CmdMessage::warning(format!(
            "kept on {}: removal would drop required metadata",
            fullpath
        )));
    }
    Ok(result)
}
