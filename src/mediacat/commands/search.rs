use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::listed_subset;

/// Search the catalog. The narrow form hits the term index (metadata
/// values only); `broad` scans keywords, values, derived kind,
/// filename and path.
pub fn run(catalog: &Catalog, term: &str, broad: bool) -> Result<CmdResult> {
    let matches = if broad {
        catalog.search_all(term)
    } else {
        catalog.search(term)
    };

    let listed = listed_subset(catalog, &matches);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} match(es) for \"{}\"",
        listed.len(),
        term
    )));
    Ok(result.with_listed(listed))
}
