use std::path::PathBuf;

use crate::{
    config, error,
    genius::GeniusClient,
    info, output,
    selector::{FirstSelector, FzfSelector, SongSelector},
    success, utils,
};

/// Searches Genius for a song, lets the user pick a match, and prints or
/// saves the lyrics.
///
/// # Arguments
///
/// * `song_words` - Song name, one or more words joined with spaces
/// * `artist` - Optional artist name appended to the search query
/// * `output_dir` - Directory for saved lyrics files
/// * `print_only` - Write lyrics to stdout instead of a file
/// * `first` - Skip interactive selection, use the first hit
/// * `num_results` - Maximum number of candidates to offer
pub async fn download(
    song_words: Vec<String>,
    artist: Option<String>,
    output_dir: PathBuf,
    print_only: bool,
    first: bool,
    num_results: usize,
) {
    let token = match config::genius_token() {
        Some(token) => token,
        None => {
            println!("Error: GENIUS_ACCESS_TOKEN environment variable not set.");
            println!();
            println!("To get a token:");
            println!("1. Go to https://genius.com/api-clients");
            println!("2. Create a new API client");
            println!("3. Generate an access token");
            println!("4. Export it: export GENIUS_ACCESS_TOKEN='your_token_here'");
            std::process::exit(1);
        }
    };

    // Strip [Chorus], [Verse], etc. from fetched lyrics
    let genius = GeniusClient::new(token).remove_section_headers(true);

    let query = utils::build_query(&song_words, artist.as_deref());
    info!("Searching for: {}", query);

    let hits = match genius.search_songs(&query, num_results).await {
        Ok(hits) => hits,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    if hits.is_empty() {
        error!("No songs found.");
    }

    let selector: Box<dyn SongSelector> = if first {
        Box::new(FirstSelector)
    } else {
        Box::new(FzfSelector)
    };

    let selected = match selector.select(&hits) {
        Ok(Some(hit)) => hit,
        Ok(None) => {
            info!("No song selected.");
            return;
        }
        Err(e) => error!("{}", e),
    };

    info!("Fetching: {} by {}", selected.title, selected.artist);

    let song = match genius.get_song(selected.id).await {
        Ok(Some(song)) => song,
        Ok(None) => error!("Failed to fetch lyrics."),
        Err(e) => error!("Failed to fetch lyrics. Err: {}", e),
    };

    if print_only {
        output::print_lyrics(&song);
    } else {
        match output::save_song(&song, &output_dir).await {
            Ok(path) => success!("Saved to: {}", path.display()),
            Err(e) => error!("Failed to save lyrics. Err: {}", e),
        }
    }
}
