//! # CLI Module
//!
//! This module provides the command-line interface layer for lyrdl. It
//! implements the single user-facing operation — downloading lyrics for a
//! song — and coordinates the underlying configuration, API, selection, and
//! output components.
//!
//! ## Pipeline
//!
//! The [`download`] command runs a strictly linear pipeline once per
//! invocation:
//!
//! ```text
//! Credential Loader (GENIUS_ACCESS_TOKEN)
//!     ↓
//! Search Client (Genius /search)
//!     ↓
//! Interactive Selector (fzf subprocess, or --first)
//!     ↓
//! Lyrics Fetcher (Genius /songs/{id} + song page)
//!     ↓
//! Output Writer (stdout or slug-named Markdown file)
//! ```
//!
//! There is no loop, no retry, and no parallelism; each stage either
//! produces input for the next or ends the process with an explanatory
//! message.
//!
//! ## Exit Behavior
//!
//! - Missing credential, no search results, failed fetch, or a missing fzf
//!   binary terminate with exit code 1 via the [`crate::error!`] macro.
//! - A cancelled selection is not an error: the command prints
//!   "No song selected." and returns normally (exit code 0).

mod download;

pub use download::download;
