//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! all catalog operations, regardless of the UI driving them. It owns
//! the catalog, dispatches to the command functions, and returns
//! structured `CmdResult`s. It does no business logic, no terminal I/O
//! and no formatting; that split mirrors the layering described in
//! [`crate`].

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;

pub struct MediaApi {
    catalog: Catalog,
}

impl Default for MediaApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaApi {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    /// Build an API around a catalog snapshot on disk. A missing
    /// snapshot starts an empty catalog; per-record failures inside an
    /// existing one are ignored here since they were already reported
    /// when the snapshot was written.
    pub fn open(snapshot: &str) -> Result<Self> {
        let mut api = Self::new();
        match api.catalog.load(snapshot) {
            Ok(_) => Ok(api),
            Err(crate::error::CatalogError::NotFound(_)) => Ok(api),
            Err(e) => Err(e),
        }
    }

    /// Persist the catalog back to its snapshot file.
    pub fn persist(&self, snapshot: &str) -> Result<()> {
        self.catalog.save(snapshot)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load(&mut self, paths: &[String]) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.catalog, paths)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn search(&self, term: &str, broad: bool) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, term, broad)
    }

    pub fn add_metadata(
        &mut self,
        position: usize,
        keyword: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, position, keyword, value)
    }

    pub fn set_metadata(
        &mut self,
        position: usize,
        keyword: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::set::run(&mut self.catalog, position, keyword, value)
    }

    pub fn delete_metadata(&mut self, position: usize, keyword: &str) -> Result<commands::CmdResult> {
        commands::del::run(&mut self.catalog, position, keyword)
    }

    pub fn strip_value(&mut self, keyword: &str, value: &str) -> Result<commands::CmdResult> {
        commands::strip::run(&mut self.catalog, keyword, value)
    }

    pub fn save(&self, filename: &str, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::save::run(&self.catalog, filename, positions)
    }
}

pub use commands::{CmdMessage, CmdResult, ListedFile, MessageLevel};
