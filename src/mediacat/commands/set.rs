use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::file_at;

/// Replace a keyword on the file at a 1-based position (delete then add).
pub fn run(catalog: &mut Catalog, position: usize, keyword: &str, value: &str) -> Result<CmdResult> {
    let fullpath = file_at(catalog, position)?.fullpath();
    let touched = catalog.set_metadata(&fullpath, keyword, value)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Set {}: {} on {} file(s) at {}",
        keyword, value, touched, fullpath
    )));
    Ok(result)
}
