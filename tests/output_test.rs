use std::path::PathBuf;

use lyrdl::output::{render_document, save_song, song_filename};
use lyrdl::types::Song;

// Helper function to create a test song
fn create_test_song(id: u64, title: &str, artist: &str, lyrics: &str) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        lyrics: lyrics.to_string(),
        url: format!("https://genius.com/{}-lyrics", id),
    }
}

// Unique scratch directory per test so runs don't interfere
fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lyrdl-test-{}-{}", name, std::process::id()))
}

#[test]
fn test_render_document_exact_layout() {
    let song = create_test_song(1, "Test Song", "Tester", "La la la");

    let expected = "---\n\
                    title: \"Test Song\"\n\
                    artist: \"Tester\"\n\
                    source: \"https://genius.com\"\n\
                    ---\n\
                    \n\
                    La la la\n";
    assert_eq!(render_document(&song), expected);
}

#[test]
fn test_render_document_multiline_lyrics() {
    let song = create_test_song(1, "Song", "Artist", "line one\n\nline two");
    let doc = render_document(&song);

    // Frontmatter is separated from the body by exactly one blank line
    assert!(doc.contains("---\n\nline one\n\nline two\n"));
    assert!(doc.ends_with("line two\n"));
}

#[test]
fn test_song_filename_from_title_slug() {
    let song = create_test_song(7, "Hello, World!! ", "Tester", "La");
    assert_eq!(song_filename(&song), "hello-world.md");
}

#[test]
fn test_song_filename_empty_slug_falls_back_to_id() {
    let song = create_test_song(12345, "?!?", "Tester", "La");
    assert_eq!(song_filename(&song), "song-12345.md");
}

#[tokio::test]
async fn test_save_song_writes_document() {
    let dir = scratch_dir("write");
    let song = create_test_song(1, "Test Song", "Tester", "La la la");

    let path = save_song(&song, &dir).await.unwrap();
    assert_eq!(path, dir.join("test-song.md"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, render_document(&song));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_save_song_creates_nested_directories() {
    let dir = scratch_dir("nested").join("src/content/songs");
    let song = create_test_song(2, "Nested", "Tester", "La");

    let path = save_song(&song, &dir).await.unwrap();
    assert!(path.exists());

    std::fs::remove_dir_all(scratch_dir("nested")).unwrap();
}

#[tokio::test]
async fn test_save_song_overwrites_same_title() {
    let dir = scratch_dir("overwrite");

    let first = create_test_song(3, "Same Title", "Tester", "old lyrics");
    let second = create_test_song(3, "Same Title", "Tester", "new lyrics");

    let path_a = save_song(&first, &dir).await.unwrap();
    let path_b = save_song(&second, &dir).await.unwrap();
    assert_eq!(path_a, path_b);

    // One file, holding the newest body
    let entries = std::fs::read_dir(&dir).unwrap().count();
    assert_eq!(entries, 1);
    let contents = std::fs::read_to_string(&path_b).unwrap();
    assert!(contents.contains("new lyrics"));
    assert!(!contents.contains("old lyrics"));

    std::fs::remove_dir_all(&dir).unwrap();
}
