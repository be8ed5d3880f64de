use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub lyrics: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBody {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub result: HitResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitResult {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub primary_artist: PrimaryArtist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongResponse {
    pub response: SongBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongBody {
    pub song: SongDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDetails {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub primary_artist: PrimaryArtist,
}

impl From<HitResult> for SearchHit {
    fn from(result: HitResult) -> Self {
        SearchHit {
            id: result.id,
            title: result.title,
            artist: result.primary_artist.name,
            url: result.url,
        }
    }
}
