use crate::model::{Kind, MediaFile};

pub mod add;
pub mod del;
pub mod helpers;
pub mod list;
pub mod load;
pub mod save;
pub mod search;
pub mod set;
pub mod strip;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A file paired with its 1-based position in the catalog, the number
/// users address it by in mutation commands.
#[derive(Debug, Clone)]
pub struct ListedFile {
    pub position: usize,
    pub file: MediaFile,
    pub kind: Option<Kind>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedFile>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedFile>) -> Self {
        self.listed = listed;
        self
    }
}
