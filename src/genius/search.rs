use crate::{
    Res, config,
    types::{SearchHit, SearchResponse},
};

use super::GeniusClient;

impl GeniusClient {
    /// Searches Genius for songs matching a free-text query.
    ///
    /// Sends the query to the `/search` endpoint and returns at most `limit`
    /// candidate hits in the order the server ranked them; no local
    /// re-ranking is applied.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query (song name, optionally artist)
    /// * `limit` - Maximum number of hits to return
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<SearchHit>)` - Candidate songs; empty when nothing matched,
    ///   which callers must treat as a normal outcome
    /// - `Err(_)` - Network error, API error, or malformed response
    ///
    /// # Example
    ///
    /// ```
    /// let hits = genius.search_songs("Hello Adele", 10).await?;
    /// for hit in &hits {
    ///     println!("{} - {}", hit.title, hit.artist);
    /// }
    /// ```
    pub async fn search_songs(&self, query: &str, limit: usize) -> Res<Vec<SearchHit>> {
        let api_url = format!(
            "{uri}/search?q={q}",
            uri = config::genius_apiurl(),
            q = urlencoding::encode(query)
        );

        let pb = super::spinner("Searching Genius...");

        let response = self.http.get(&api_url).bearer_auth(&self.token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(err.into());
                }
            },
            Err(err) => {
                pb.finish_and_clear();
                return Err(err.into());
            } // network or reqwest error
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                pb.finish_and_clear();
                return Err(err.into());
            }
        };
        pb.finish_and_clear();

        let res: SearchResponse = serde_json::from_str(&body)?;

        let hits = res
            .response
            .hits
            .into_iter()
            .take(limit)
            .map(|hit| SearchHit::from(hit.result))
            .collect();

        Ok(hits)
    }
}
