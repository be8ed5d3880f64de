use reqwest::StatusCode;

use crate::{
    Res, config,
    types::{Song, SongResponse},
};

use super::GeniusClient;

impl GeniusClient {
    /// Fetches the full song record for a search hit's identifier.
    ///
    /// Retrieves the song metadata from the `/songs/{id}` endpoint and then
    /// extracts the lyrics body from the song's public page, since the
    /// Genius REST API does not serve lyrics directly.
    ///
    /// # Arguments
    ///
    /// * `id` - Opaque song identifier as returned by the search stage
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Some(Song))` - Fully populated song including lyrics
    /// - `Ok(None)` - Unknown id, or the page yielded no lyrics; callers
    ///   report this and stop, it is not a process-level error
    /// - `Err(_)` - Network error, API error, or malformed response
    ///
    /// # Example
    ///
    /// ```
    /// match genius.get_song(hit.id).await? {
    ///     Some(song) => println!("{}", song.lyrics),
    ///     None => println!("Failed to fetch lyrics."),
    /// }
    /// ```
    pub async fn get_song(&self, id: u64) -> Res<Option<Song>> {
        let api_url = format!(
            "{uri}/songs/{id}?text_format=plain",
            uri = config::genius_apiurl(),
            id = id
        );

        let pb = super::spinner("Fetching song details...");

        let response = self.http.get(&api_url).bearer_auth(&self.token).send().await;

        let response = match response {
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
            } // network or reqwest error
        };

        let res = match response.json::<SongResponse>().await {
            Ok(res) => res,
            Err(err) => {
                pb.finish_and_clear();
                return Err(err.into());
            }
        };
        pb.finish_and_clear();

        let details = res.response.song;

        let lyrics = match self.fetch_lyrics(&details.url).await? {
            Some(lyrics) => lyrics,
            None => return Ok(None),
        };

        Ok(Some(Song {
            id: details.id,
            title: details.title,
            artist: details.primary_artist.name,
            lyrics,
            url: details.url,
        }))
    }
}
