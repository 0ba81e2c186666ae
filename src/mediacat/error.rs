use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    Permission(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no file in catalog at {0}")]
    UnknownFile(String),

    #[error("position out of range: {0}")]
    OutOfRange(usize),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
