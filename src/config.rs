//! Configuration management for the Genius lyrics downloader.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The configuration system follows
//! a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lyrdl/.env`. This allows users to store the
/// Genius access token without exporting it in every shell session.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lyrdl/.env`
/// - macOS: `~/Library/Application Support/lyrdl/.env`
/// - Windows: `%LOCALAPPDATA%/lyrdl/.env`
///
/// A missing `.env` file is not an error; variables already present in the
/// environment always take priority.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lyrdl/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Genius API access token, if one is configured.
///
/// Retrieves the `GENIUS_ACCESS_TOKEN` environment variable. Returns `None`
/// when the variable is unset or blank so the caller can print setup
/// guidance instead of failing with a bare lookup error.
///
/// # Example
///
/// ```
/// if let Some(token) = genius_token() {
///     // build a client
/// }
/// ```
pub fn genius_token() -> Option<String> {
    match env::var("GENIUS_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Some(token),
        _ => None,
    }
}

/// Returns the Genius Web API base URL.
///
/// Retrieves the `GENIUS_API_URL` environment variable, falling back to the
/// public `https://api.genius.com` endpoint when unset. The override exists
/// mainly so the client can be pointed at a local stub server.
///
/// # Example
///
/// ```
/// let api_url = genius_apiurl(); // e.g., "https://api.genius.com"
/// ```
pub fn genius_apiurl() -> String {
    env::var("GENIUS_API_URL").unwrap_or_else(|_| "https://api.genius.com".to_string())
}
