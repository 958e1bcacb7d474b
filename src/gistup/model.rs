use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single upload, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub content: String,
    pub filename: String,
    pub description: String,
    pub public: bool,
    /// When set, the existing gist is patched instead of creating a new one.
    pub gist_id: Option<String>,
    pub token: String,
}

impl UploadRequest {
    pub fn payload(&self) -> GistPayload<'_> {
        let mut files = BTreeMap::new();
        files.insert(
            self.filename.as_str(),
            GistFile {
                content: self.content.as_str(),
            },
        );
        GistPayload {
            description: &self.description,
            public: self.public,
            files,
        }
    }
}

/// Request body for both create and update calls.
#[derive(Debug, Serialize)]
pub struct GistPayload<'a> {
    pub description: &'a str,
    pub public: bool,
    pub files: BTreeMap<&'a str, GistFile<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GistFile<'a> {
    pub content: &'a str,
}

/// The service's response. Fields we don't model are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gist {
    pub html_url: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
