use crate::error::{GistError, Result};
use std::io::Read;
use std::path::Path;

pub const STDIN_FILENAME: &str = "stdin.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub content: String,
    /// Name the file gets in the gist unless overridden.
    pub default_filename: String,
}

/// Reads `path`, or standard input when no path is given.
pub fn read_content(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(path) => read_file(path),
        None => read_from(std::io::stdin().lock()),
    }
}

pub fn read_file(path: &Path) -> Result<Input> {
    let content = std::fs::read_to_string(path).map_err(|source| GistError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let default_filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| STDIN_FILENAME.to_string());
    Ok(Input {
        content,
        default_filename,
    })
}

pub fn read_from<R: Read>(mut reader: R) -> Result<Input> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(Input {
        content,
        default_filename: STDIN_FILENAME.to_string(),
    })
}
