//! # CLI Layer
//!
//! The only place that knows about terminal I/O, exit codes and output
//! formatting. For the overall architecture see the crate docs in `lib.rs`.
//!
//! ## Flow
//!
//! 1. Parse arguments (`setup`)
//! 2. Install logging, `warn` by default, `debug` with `--verbose`
//! 3. Read the file or standard input
//! 4. Reformat JSON if `--indent` or `--raw-json` was given. Input that is not
//!    JSON is uploaded unchanged with a warning
//! 5. Upload and print the gist URL (`render`)
//!
//! Stdout only ever carries the result line, so `gistup file | pbcopy` works.

mod commands;
mod render;
mod setup;

pub use commands::run;
