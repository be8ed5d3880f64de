use regex::Regex;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Node, Selector};

use crate::Res;

use super::GeniusClient;

impl GeniusClient {
    /// Extracts the lyrics body from a song's public page.
    ///
    /// Fetches the page at `song_url` and collects the text of all lyrics
    /// containers. When the client was built with section header stripping
    /// enabled, `[Verse]`/`[Chorus]`-style lines are removed from the result.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))` - Extracted (and optionally normalized) lyrics
    /// - `Ok(None)` - Page missing, no lyrics container, or empty lyrics
    /// - `Err(_)` - Network or HTTP error
    pub(crate) async fn fetch_lyrics(&self, song_url: &str) -> Res<Option<String>> {
        let pb = super::spinner("Fetching lyrics...");

        let response = match self.http.get(song_url).send().await {
            Ok(resp) => {
                if resp.status() == StatusCode::NOT_FOUND {
                    pb.finish_and_clear();
                    return Ok(None);
                }
                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        pb.finish_and_clear();
                        return Err(err.into());
                    }
                }
            }
            Err(err) => {
                pb.finish_and_clear();
                return Err(err.into());
            }
        };

        let html = match response.text().await {
            Ok(html) => html,
            Err(err) => {
                pb.finish_and_clear();
                return Err(err.into());
            }
        };
        pb.finish_and_clear();

        let raw = match extract_lyrics(&html) {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let lyrics = if self.remove_section_headers {
            strip_section_headers(&raw)
        } else {
            raw
        };

        if lyrics.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(lyrics))
    }
}

/// Pulls the lyrics text out of a Genius song page.
///
/// Genius renders lyrics inside `div[data-lyrics-container='true']` elements
/// where line breaks are `<br>` tags and annotated passages are wrapped in
/// anchors. Returns `None` when no container is present or the containers
/// hold no text.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    // Selector string is static, parse cannot fail.
    let selector = Selector::parse("div[data-lyrics-container='true']").ok()?;

    let mut lyrics = String::new();
    let mut containers = 0;

    for container in document.select(&selector) {
        containers += 1;
        collect_text(container, &mut lyrics);
        lyrics.push('\n');
    }

    if containers == 0 || lyrics.trim().is_empty() {
        return None;
    }
    Some(lyrics.trim_end().to_string())
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(node) => {
                if node.name() == "br" {
                    out.push('\n');
                } else if let Some(child_ref) = ElementRef::wrap(child) {
                    // Flatten anchors, spans and other inline wrappers.
                    collect_text(child_ref, out);
                }
            }
            _ => {}
        }
    }
}

/// Removes `[Verse 1]`, `[Chorus]` and similar bracketed section header
/// lines from lyrics, collapsing the blank runs they leave behind.
pub fn strip_section_headers(lyrics: &str) -> String {
    let headers = Regex::new(r"(?m)^[ \t]*\[[^\]]*\][ \t]*\n?").unwrap();
    let stripped = headers.replace_all(lyrics, "");

    let blanks = Regex::new(r"\n{3,}").unwrap();
    blanks.replace_all(&stripped, "\n\n").trim().to_string()
}
