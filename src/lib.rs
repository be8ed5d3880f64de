//! Genius Lyrics Downloader Library
//!
//! This library provides the building blocks for the `lyrdl` command-line
//! tool, which searches the Genius API for a song, lets the user pick a
//! match interactively, and saves the lyrics as a Markdown document with
//! YAML frontmatter.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementation
//! - `config` - Configuration management and environment variables
//! - `genius` - Genius API client (search, song details, lyrics extraction)
//! - `output` - Lyrics document rendering and persistence
//! - `selector` - Interactive song selection (fzf subprocess or first-hit)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use lyrdl::{config, genius::GeniusClient};
//!
//! #[tokio::main]
//! async fn main() -> lyrdl::Res<()> {
//!     config::load_env().await?;
//!     let token = config::genius_token().expect("token must be set");
//!     let genius = GeniusClient::new(token).remove_section_headers(true);
//!     let hits = genius.search_songs("Bohemian Rhapsody", 10).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod genius;
pub mod output;
pub mod selector;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use lyrdl::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates throughout the download pipeline, for
/// example echoing the search query or the song being fetched.
///
/// # Example
///
/// ```
/// info!("Searching for: {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm completed operations such as a saved lyrics file.
///
/// # Example
///
/// ```
/// success!("Saved to: {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 immediately after printing. Reserved for
/// unrecoverable outcomes: a missing credential, no search results, a failed
/// lyrics fetch, or a missing fzf binary.
///
/// # Example
///
/// ```
/// error!("No songs found.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that should not terminate the program,
/// such as a missing `.env` file.
///
/// # Example
///
/// ```
/// warning!("Cannot load environment. Err: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
