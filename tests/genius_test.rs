use lyrdl::genius::lyrics::{extract_lyrics, strip_section_headers};
use lyrdl::types::{SearchHit, SearchResponse};

#[test]
fn test_search_response_decoding() {
    // Trimmed-down payload in the shape the Genius /search endpoint returns
    let payload = r#"{
        "response": {
            "hits": [
                {
                    "result": {
                        "id": 3039923,
                        "title": "Hello",
                        "url": "https://genius.com/Adele-hello-lyrics",
                        "primary_artist": { "name": "Adele" }
                    }
                },
                {
                    "result": {
                        "id": 104451,
                        "title": "Hello",
                        "url": "https://genius.com/Lionel-richie-hello-lyrics",
                        "primary_artist": { "name": "Lionel Richie" }
                    }
                }
            ]
        }
    }"#;

    let res: SearchResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(res.response.hits.len(), 2);

    let hit = SearchHit::from(res.response.hits[0].result.clone());
    assert_eq!(hit.id, 3039923);
    assert_eq!(hit.title, "Hello");
    assert_eq!(hit.artist, "Adele");
    assert_eq!(hit.url, "https://genius.com/Adele-hello-lyrics");
}

#[test]
fn test_search_response_decoding_no_hits() {
    let res: SearchResponse = serde_json::from_str(r#"{"response":{"hits":[]}}"#).unwrap();
    assert!(res.response.hits.is_empty());
}

#[test]
fn test_extract_lyrics_from_container() {
    let html = r#"<html><body>
        <div data-lyrics-container="true">Is this the real life?<br>Is this just fantasy?</div>
    </body></html>"#;

    let lyrics = extract_lyrics(html).unwrap();
    assert_eq!(lyrics, "Is this the real life?\nIs this just fantasy?");
}

#[test]
fn test_extract_lyrics_flattens_annotations() {
    // Annotated passages are wrapped in anchors and spans on the real pages
    let html = r#"<div data-lyrics-container="true"><a href="/123"><span>Caught in a landslide</span></a><br>No escape from reality</div>"#;

    let lyrics = extract_lyrics(html).unwrap();
    assert_eq!(lyrics, "Caught in a landslide\nNo escape from reality");
}

#[test]
fn test_extract_lyrics_joins_multiple_containers() {
    let html = r#"
        <div data-lyrics-container="true">first block</div>
        <div data-lyrics-container="true">second block</div>
    "#;

    let lyrics = extract_lyrics(html).unwrap();
    assert_eq!(lyrics, "first block\nsecond block");
}

#[test]
fn test_extract_lyrics_missing_container() {
    assert!(extract_lyrics("<html><body><p>nothing here</p></body></html>").is_none());
}

#[test]
fn test_extract_lyrics_empty_container() {
    assert!(extract_lyrics(r#"<div data-lyrics-container="true">   </div>"#).is_none());
}

#[test]
fn test_strip_section_headers() {
    let raw = "[Verse 1]\nHello from the other side\n\n[Chorus]\nI must have called a thousand times";
    let cleaned = strip_section_headers(raw);
    assert_eq!(
        cleaned,
        "Hello from the other side\n\nI must have called a thousand times"
    );
}

#[test]
fn test_strip_section_headers_collapses_blank_runs() {
    let raw = "[Intro]\n\n\nline one\n\n\n\n[Outro]\nline two";
    let cleaned = strip_section_headers(raw);
    assert_eq!(cleaned, "line one\n\nline two");
}

#[test]
fn test_strip_section_headers_keeps_inline_brackets() {
    // Only whole-line headers are removed
    let raw = "she said [something] quietly";
    assert_eq!(strip_section_headers(raw), "she said [something] quietly");
}
