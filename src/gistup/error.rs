use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("GitHub token not provided. Set GITHUB_TOKEN or GH_TOKEN.")]
    MissingToken,

    #[error("GitHub API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GistError>;
