use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use mediacat::api::{CmdMessage, ListedFile, MediaApi, MessageLevel};
use mediacat::config::MediaConfig;
use mediacat::error::Result;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MediaApi,
    snapshot: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Load { files } => handle_load(&mut ctx, files),
        Commands::List => handle_list(&ctx),
        Commands::Search { term, all } => handle_search(&ctx, term, all),
        Commands::Add {
            position,
            keyword,
            value,
        } => handle_mutation(&mut ctx, |api| api.add_metadata(position, &keyword, &value)),
        Commands::Set {
            position,
            keyword,
            value,
        } => handle_mutation(&mut ctx, |api| api.set_metadata(position, &keyword, &value)),
        Commands::Del { position, keyword } => {
            handle_mutation(&mut ctx, |api| api.delete_metadata(position, &keyword))
        }
        Commands::Strip { keyword, value } => {
            handle_mutation(&mut ctx, |api| api.strip_value(&keyword, &value))
        }
        Commands::Save { file, positions } => handle_save(&ctx, file, positions),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let snapshot = match &cli.catalog {
        Some(path) => path.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "mediacat", "mediacat")
                .ok_or_else(|| mediacat::error::CatalogError::Api(
                    "could not determine config dir".to_string(),
                ))?;
            let config = MediaConfig::load(proj_dirs.config_dir()).unwrap_or_default();
            config.snapshot_path(proj_dirs.data_dir())
        }
    };
    ensure_parent_dir(&snapshot)?;

    let snapshot = snapshot.to_string_lossy().to_string();
    let api = MediaApi::open(&snapshot)?;
    Ok(AppContext { api, snapshot })
}

fn ensure_parent_dir(snapshot: &PathBuf) -> Result<()> {
    if let Some(parent) = snapshot.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn handle_load(ctx: &mut AppContext, files: Vec<String>) -> Result<()> {
    let result = ctx.api.load(&files)?;
    ctx.api.persist(&ctx.snapshot)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_files(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String, all: bool) -> Result<()> {
    let result = ctx.api.search(&term, all)?;
    print_files(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_mutation<F>(ctx: &mut AppContext, op: F) -> Result<()>
where
    F: FnOnce(&mut MediaApi) -> Result<mediacat::api::CmdResult>,
{
    let result = op(&mut ctx.api)?;
    ctx.api.persist(&ctx.snapshot)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &AppContext, file: String, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.save(&file, &positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const KIND_WIDTH: usize = 10;

fn print_files(files: &[ListedFile]) {
    if files.is_empty() {
        println!("No files found.");
        return;
    }

    for listed in files {
        let idx_str = format!("{}. ", listed.position);
        let kind_str = listed
            .kind
            .map(|k| k.tag().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let kind_col = format!("[{:<width$}]", kind_str, width = KIND_WIDTH - 2);

        let metadata_preview = listed
            .file
            .metadata()
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let line = format!("{} {}", listed.file.fullpath(), metadata_preview);

        let fixed = idx_str.width() + KIND_WIDTH + 1;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let body = truncate_to_width(&line, available);

        println!("{}{} {}", idx_str, kind_col.dimmed(), body);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
