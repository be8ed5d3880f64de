//! Lyrics document rendering and persistence.
//!
//! A saved song becomes a Markdown file with a YAML frontmatter block
//! (`title`, `artist`, `source`) followed by a blank line and the raw lyrics
//! body. The filename is a slug derived from the song title; see
//! [`song_filename`] for the empty-slug fallback.

use std::path::{Path, PathBuf};

use crate::{Res, types::Song, utils};

/// Source URL recorded in the frontmatter of every saved document.
pub const SOURCE_URL: &str = "https://genius.com";

/// Renders the full Markdown document for a song.
///
/// # Example
///
/// ```
/// let doc = render_document(&song);
/// // ---
/// // title: "Test Song"
/// // artist: "Tester"
/// // source: "https://genius.com"
/// // ---
/// //
/// // La la la
/// ```
pub fn render_document(song: &Song) -> String {
    format!(
        "---\ntitle: \"{title}\"\nartist: \"{artist}\"\nsource: \"{source}\"\n---\n\n{lyrics}\n",
        title = song.title,
        artist = song.artist,
        source = SOURCE_URL,
        lyrics = song.lyrics
    )
}

/// Returns the output filename for a song.
///
/// Titles that slugify to an empty string (all-punctuation titles) fall back
/// to the Genius song id so the file is never a bare `.md`.
pub fn song_filename(song: &Song) -> String {
    let slug = utils::slugify(&song.title);
    if slug.is_empty() {
        format!("song-{}.md", song.id)
    } else {
        format!("{}.md", slug)
    }
}

/// Writes the song document into `output_dir`, creating the directory tree
/// if necessary and overwriting any existing file with the same slug.
///
/// # Returns
///
/// The path of the written file, for confirmation messaging.
pub async fn save_song(song: &Song, output_dir: &Path) -> Res<PathBuf> {
    async_fs::create_dir_all(output_dir).await?;

    let path = output_dir.join(song_filename(song));
    async_fs::write(&path, render_document(song)).await?;

    Ok(path)
}

/// Print mode: raw lyrics to stdout, preceded by a blank line. No file I/O.
pub fn print_lyrics(song: &Song) {
    println!();
    println!("{}", song.lyrics);
}
