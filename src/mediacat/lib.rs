//! # Mediacat Architecture
//!
//! Mediacat is a **UI-agnostic media-metadata catalog library**. The CLI
//! binary is a thin client; everything it can do goes through the
//! library, and the same core could serve any other front end.
//!
//! ## The Layers
//!
//! ```text
//! CLI Layer (args.rs + main.rs)
//!   Parses arguments, formats output, owns stdout/stderr/exit codes.
//!          |
//! API Layer (api.rs)
//!   Thin facade over commands; owns the catalog instance.
//!          |
//! Command Layer (commands/*.rs)
//!   One function per user-facing operation, pure logic,
//!   returns structured CmdResults. No I/O assumptions.
//!          |
//! Core (catalog.rs, index.rs, model.rs, validate.rs, transfer.rs)
//!   The file list, the inverted term index, kind derivation,
//!   validation rules and the snapshot import/export transform.
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout or stderr, and never assumes
//! a terminal. Snapshot file reads and writes are the one deliberate
//! exception, confined to `transfer.rs`.
//!
//! ## Consistency model
//!
//! The catalog is an explicit owned value, not a global. Every metadata
//! mutation rebuilds the inverted index before returning, so callers
//! never observe the index out of step with the file list. All text
//! comparison (keywords, values, kind tags, filenames, paths, search
//! terms) is case-insensitive; stored casing is preserved.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`catalog`]: The collection facade owning files and index
//! - [`index`]: The inverted value index backing search
//! - [`model`]: Core data types (`MediaFile`, `Metadata`, `Kind`)
//! - [`validate`]: Required-keyword validation per kind
//! - [`transfer`]: Snapshot import/export and record validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod transfer;
pub mod validate;
