//! Parsers for the two inputs this crate consumes: the assistant's
//! `history.jsonl` log and `git diff --numstat` output.
//!
//! # Error Handling Strategy
//!
//! The history log is appended to by another process and may hold a partially
//! written last line, so parsing is **best effort**:
//!
//! - **Individual line failures**: blank lines and lines that do not decode are skipped.
//!   They are never returned as errors and never stop the rest of the log from being read.
//!   The number of skipped lines is reported through `tracing` at debug level.
//!
//! - **Read failures**: an I/O error from the underlying reader is the only error
//!   propagated, with context, via `anyhow::Result`.
//!
//! Numstat parsing is infallible: lines without a path are dropped and `-` counts
//! (binary files) become zero.

pub mod deserializers;
pub mod history;
pub mod numstat;

pub use history::{parse_history, parse_history_file, parse_history_reader};
pub use numstat::parse_numstat;
