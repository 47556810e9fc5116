use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("not a regular file: {0}")]
    NotAFile(String),

    #[error("file type not allowed: {0}")]
    DisallowedExtension(String),

    #[error("file is empty: {0}")]
    EmptyFile(String),

    #[error("file is not valid UTF-8 text: {0}")]
    Decode(String),

    #[error("invalid notebook format: {0}")]
    NotebookParse(String),

    #[error("no code cells found in notebook: {0}")]
    NoCodeCells(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DetectError>;
