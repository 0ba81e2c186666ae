use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::file_at;

/// Drop every entry with this keyword from the file at a 1-based
/// position.
pub fn run(catalog: &mut Catalog, position: usize, keyword: &str) -> Result<CmdResult> {
    let fullpath = file_at(catalog, position)?.fullpath();
    let touched = catalog.delete_metadata(&fullpath, keyword)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} from {} file(s) at {}",
        keyword, touched, fullpath
    )));
    Ok(result)
}
