use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

use super::helpers::listed_all;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(listed_all(catalog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaFile, Metadata};

    #[test]
    fn lists_the_catalog_in_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add(MediaFile::from_fullpath(
            "/b/2.txt",
            vec![Metadata::new("creator", "x")],
        ));
        catalog.add(MediaFile::from_fullpath(
            "/a/1.txt",
            vec![Metadata::new("creator", "y")],
        ));

        let result = run(&catalog).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].file.fullpath(), "/b/2.txt");
        assert_eq!(result.listed[1].position, 2);
    }
}
