//! # Genius Integration Module
//!
//! This module provides the interface to the Genius API, implementing song
//! search, song detail retrieval, and lyrics extraction. It serves as the
//! integration layer between lyrdl and Genius, handling all HTTP
//! communication and response decoding.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific part of the pipeline:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Genius Integration Layer
//!     ├── Search (song candidates by free-text query)
//!     ├── Song Details (title, artist, page URL by id)
//!     └── Lyrics Extraction (lyrics body from the song page)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Genius API / genius.com
//! ```
//!
//! ## Core Modules
//!
//! - [`search`] - `GET /search` with bearer authentication; returns a
//!   bounded list of candidate hits in server-provided order.
//! - [`song`] - `GET /songs/{id}` for the full song record. The REST API
//!   does not serve lyrics bodies, so this step also resolves the public
//!   song page URL.
//! - [`lyrics`] - Fetches the song page and extracts the lyrics text from
//!   its lyrics containers, with optional `[Verse]`/`[Chorus]` section
//!   header stripping.
//!
//! ## Authentication
//!
//! Genius uses a static bearer access token obtained from the developer
//! dashboard. The token is passed once to [`GeniusClient::new`] and attached
//! to every API request; the public song page is fetched without it.
//!
//! ## Error Types
//!
//! All operations return [`crate::Res`], propagating `reqwest` errors for
//! network and HTTP failures. "Not found" outcomes (unknown song id, empty
//! lyrics container) are `Ok(None)`, not errors.

pub mod lyrics;
pub mod search;
pub mod song;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

/// Client for the Genius API and the genius.com song pages.
///
/// Holds the shared HTTP client, the bearer access token, and the
/// `remove_section_headers` normalization flag applied to extracted lyrics.
pub struct GeniusClient {
    http: Client,
    token: String,
    remove_section_headers: bool,
}

impl GeniusClient {
    /// Creates a new client with the given access token.
    pub fn new(token: String) -> Self {
        GeniusClient {
            http: Client::new(),
            token,
            remove_section_headers: false,
        }
    }

    /// Enables or disables stripping of `[Verse]`, `[Chorus]` and similar
    /// section header lines from extracted lyrics.
    pub fn remove_section_headers(mut self, strip: bool) -> Self {
        self.remove_section_headers = strip;
        self
    }
}

/// Spinner shown while a network request is in flight.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
