use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mediacat")]
#[command(about = "Catalog media file metadata and search it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog snapshot to operate on (defaults to the configured one)
    #[arg(short = 'f', long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import snapshot files into the catalog
    Load {
        /// Snapshot files to import
        #[arg(required = true, num_args = 1..)]
        files: Vec<String>,
    },

    /// List the catalog
    #[command(alias = "ls")]
    List,

    /// Search metadata values (use --all for keywords, kind, filename and path too)
    Search {
        term: String,

        /// Broad scan instead of the value index
        #[arg(long)]
        all: bool,
    },

    /// Add a keyword/value pair to a file (by list position)
    Add {
        position: usize,
        keyword: String,
        value: String,
    },

    /// Replace a keyword on a file (by list position)
    Set {
        position: usize,
        keyword: String,
        value: String,
    },

    /// Delete a keyword from a file (by list position)
    Del { position: usize, keyword: String },

    /// Remove a keyword/value pair from every file that can spare it
    Strip { keyword: String, value: String },

    /// Export the catalog (or a subset of list positions) to a file
    Save {
        file: String,

        /// Positions to export (defaults to the whole catalog)
        #[arg(num_args = 0..)]
        positions: Vec<usize>,
    },
}
