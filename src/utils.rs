pub fn build_query(song_words: &[String], artist: Option<&str>) -> String {
    let song = song_words.join(" ");
    match artist {
        Some(artist) => format!("{} {}", song, artist),
        None => song,
    }
}

pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect();

    cleaned
        .trim()
        .replace(' ', "-")
        .split('-')
        .filter(|part| !part.is_empty()) // collapse duplicate hyphens
        .collect::<Vec<_>>()
        .join("-")
}
