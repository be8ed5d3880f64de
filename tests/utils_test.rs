use lyrdl::utils::{build_query, slugify};

fn words(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_build_query_joins_song_words() {
    let query = build_query(&words(&["hotel", "california"]), None);
    assert_eq!(query, "hotel california");

    // Single word stays as-is
    let query = build_query(&words(&["hello"]), None);
    assert_eq!(query, "hello");
}

#[test]
fn test_build_query_appends_artist() {
    let query = build_query(&words(&["hotel", "california"]), Some("Eagles"));
    assert_eq!(query, "hotel california Eagles");

    // Multi-word artist is appended verbatim
    let query = build_query(&words(&["yesterday"]), Some("The Beatles"));
    assert_eq!(query, "yesterday The Beatles");
}

#[test]
fn test_slugify_strips_punctuation() {
    assert_eq!(slugify("Hello, World!! "), "hello-world");
}

#[test]
fn test_slugify_lowercases() {
    assert_eq!(slugify("Bohemian Rhapsody"), "bohemian-rhapsody");
    assert_eq!(slugify("MONEY"), "money");
}

#[test]
fn test_slugify_collapses_whitespace_and_hyphens() {
    // Interior whitespace runs collapse into a single hyphen
    assert_eq!(slugify("a   b"), "a-b");

    // Punctuation removal must not leave duplicate hyphens behind
    assert_eq!(slugify("Song - Live Version"), "song-live-version");
    assert_eq!(slugify("--edges--"), "edges");
}

#[test]
fn test_slugify_is_idempotent() {
    let once = slugify("Hello, World!! ");
    assert_eq!(slugify(&once), once);

    // An already-valid slug passes through unchanged
    assert_eq!(slugify("test-song"), "test-song");
}

#[test]
fn test_slugify_keeps_unicode_letters() {
    assert_eq!(slugify("Déjà Vu"), "déjà-vu");
}

#[test]
fn test_slugify_all_punctuation_is_empty() {
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify("?!?... "), "");
}
