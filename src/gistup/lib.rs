//! # gistup
//!
//! gistup uploads text or JSON to GitHub Gist. It is a small library with a
//! thin CLI on top: the binary parses arguments, reads input and prints the
//! result, while everything that talks to the service lives here and works
//! without a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads input, formats JSON              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves token and description defaults                  │
//! │  - Builds the UploadRequest                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client.rs)                                   │
//! │  - Uploader trait, GistClient (blocking reqwest)            │
//! │  - POST to create, PATCH to update                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use gistup::api::{upload_to_gist, UploadOptions};
//!
//! let gist = upload_to_gist(
//!     "hello",
//!     UploadOptions {
//!         filename: "hello.txt".to_string(),
//!         ..Default::default()
//!     },
//! )?;
//! println!("{}", gist.html_url);
//! # Ok::<(), gistup::error::GistError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: Entry point, `upload_to_gist`
//! - [`client`]: HTTP transport and the `Uploader` seam
//! - [`model`]: Request, payload and response types
//! - [`config`]: Endpoint settings and token resolution
//! - [`input`]: Reading files and standard input
//! - [`format`]: JSON pretty-printing and minifying
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
