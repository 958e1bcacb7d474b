//! # API Layer
//!
//! The entry point for library callers. [`upload_to_gist`] resolves the token
//! and description defaults, builds an [`UploadRequest`] and hands it to an
//! [`Uploader`]. Nothing here prints or exits; failures come back as
//! [`GistError`].

use crate::client::{GistClient, Uploader};
use crate::config::{env_lookup, resolve_token, Settings};
use crate::error::{GistError, Result};
use crate::model::{Gist, UploadRequest};
use chrono::{DateTime, Utc};

/// Everything about an upload except the content itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub filename: String,
    /// Overrides `GITHUB_TOKEN` / `GH_TOKEN`.
    pub token: Option<String>,
    pub gist_id: Option<String>,
    pub description: Option<String>,
    pub public: bool,
}

/// Creates or updates a gist using settings and credentials from the environment.
pub fn upload_to_gist(content: &str, options: UploadOptions) -> Result<Gist> {
    let client = GistClient::new(&Settings::from_env())?;
    upload_with(&client, content, options, env_lookup)
}

pub fn upload_with<U: Uploader>(
    uploader: &U,
    content: &str,
    options: UploadOptions,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Gist> {
    let token = resolve_token(options.token.as_deref(), lookup).ok_or(GistError::MissingToken)?;
    let request = UploadRequest {
        content: content.to_string(),
        filename: options.filename,
        description: options
            .description
            .unwrap_or_else(|| default_description(Utc::now())),
        public: options.public,
        gist_id: options.gist_id.filter(|id| !id.is_empty()),
        token,
    };
    uploader.upload(&request)
}

pub fn default_description(now: DateTime<Utc>) -> String {
    format!(
        "Uploaded with gistup - {}",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Map;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingUploader {
        seen: RefCell<Vec<UploadRequest>>,
    }

    impl Uploader for RecordingUploader {
        fn upload(&self, request: &UploadRequest) -> Result<Gist> {
            self.seen.borrow_mut().push(request.clone());
            Ok(Gist {
                html_url: "https://gist.github.com/test".to_string(),
                id: request.gist_id.clone(),
                extra: Map::new(),
            })
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn options() -> UploadOptions {
        UploadOptions {
            filename: "test.txt".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_token_missing() {
        let uploader = RecordingUploader::default();
        let err = upload_with(&uploader, "test content", options(), no_env).unwrap_err();

        assert!(matches!(err, GistError::MissingToken));
        assert!(err.to_string().contains("GitHub token not provided"));
        assert!(uploader.seen.borrow().is_empty());
    }

    #[test]
    fn test_token_from_env_fallback() {
        let uploader = RecordingUploader::default();
        let lookup = |name: &str| (name == "GH_TOKEN").then(|| "from_env".to_string());
        upload_with(&uploader, "x", options(), lookup).unwrap();

        assert_eq!(uploader.seen.borrow()[0].token, "from_env");
    }

    #[test]
    fn test_request_built_from_options() {
        let uploader = RecordingUploader::default();
        let opts = UploadOptions {
            filename: "data.json".to_string(),
            token: Some("test_token".to_string()),
            gist_id: Some("abc123".to_string()),
            description: Some("nightly".to_string()),
            public: true,
        };
        let gist = upload_with(&uploader, "{}", opts, no_env).unwrap();

        assert_eq!(gist.html_url, "https://gist.github.com/test");
        let seen = uploader.seen.borrow();
        assert_eq!(
            seen[0],
            UploadRequest {
                content: "{}".to_string(),
                filename: "data.json".to_string(),
                description: "nightly".to_string(),
                public: true,
                gist_id: Some("abc123".to_string()),
                token: "test_token".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_gist_id_means_create() {
        let uploader = RecordingUploader::default();
        let opts = UploadOptions {
            token: Some("t".to_string()),
            gist_id: Some(String::new()),
            ..options()
        };
        upload_with(&uploader, "x", opts, no_env).unwrap();
        assert_eq!(uploader.seen.borrow()[0].gist_id, None);
    }

    #[test]
    fn test_default_description_used_when_missing() {
        let uploader = RecordingUploader::default();
        let opts = UploadOptions {
            token: Some("t".to_string()),
            ..options()
        };
        upload_with(&uploader, "x", opts, no_env).unwrap();

        let description = &uploader.seen.borrow()[0].description;
        assert!(description.starts_with("Uploaded with gistup - "));
        assert!(description.ends_with(" UTC"));
    }

    #[test]
    fn test_default_description_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            default_description(now),
            "Uploaded with gistup - 2024-03-09 07:05:01 UTC"
        );
    }
}
