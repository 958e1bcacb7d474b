//! # HTTP Client
//!
//! One blocking request per upload. A request with a gist id is sent as
//! `PATCH <api_url>/<id>`, anything else as `POST <api_url>`. Only 200 and 201
//! count as success; every other status becomes [`GistError::Api`] with the
//! body passed through untouched.

use crate::config::Settings;
use crate::error::{GistError, Result};
use crate::model::{Gist, UploadRequest};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use tracing::debug;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// Anything that can deliver an [`UploadRequest`] to a gist service.
pub trait Uploader {
    fn upload(&self, request: &UploadRequest) -> Result<Gist>;
}

pub struct GistClient {
    http: Client,
    api_url: String,
}

impl GistClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    fn target(&self, gist_id: Option<&str>) -> (Method, String) {
        match gist_id.filter(|id| !id.is_empty()) {
            Some(id) => (Method::PATCH, format!("{}/{}", self.api_url, id)),
            None => (Method::POST, self.api_url.clone()),
        }
    }
}

impl Uploader for GistClient {
    fn upload(&self, request: &UploadRequest) -> Result<Gist> {
        if request.token.is_empty() {
            return Err(GistError::MissingToken);
        }

        let (method, url) = self.target(request.gist_id.as_deref());
        debug!(%method, %url, filename = %request.filename, "sending gist request");

        let response = self
            .http
            .request(method, &url)
            .bearer_auth(&request.token)
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .json(&request.payload())
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "gist response received");

        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(GistError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GistError::InvalidResponse(e.to_string()))
    }
}
