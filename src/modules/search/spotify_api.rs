use crate::core::models::{
    AlbumHit, ArtistHit, Credentials, PlaylistHit, SearchKind, SearchResults, TrackHit,
};
use crate::modules::ui::progress;
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Spotify Web API client using the client-credentials flow.
///
/// A token is requested per search; catalog searches do not need user
/// authorization and the CLI runs one command per process.
pub struct SpotifyApi {
    agent: ureq::Agent,
    credentials: Credentials,
}

impl SpotifyApi {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            credentials,
        }
    }

    pub fn search(&self, kind: SearchKind, query: &str, limit: u8) -> Result<SearchResults> {
        let token = self.request_token()?;
        let url = format!(
            "{SEARCH_URL}?q={}&type={}&limit={limit}",
            urlencoding::encode(query),
            kind.api_type(),
        );

        debug!("GET {url}");
        let response: SearchResponse = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {token}"))
            .call()
            .context("search request failed")?
            .into_json()
            .context("failed to parse search response")?;

        Ok(response.into_results(kind))
    }

    fn request_token(&self) -> Result<String> {
        debug!("POST {TOKEN_URL}");
        let response: TokenResponse = self
            .agent
            .post(TOKEN_URL)
            .set(
                "Authorization",
                &basic_auth(&self.credentials.client_id, &self.credentials.client_secret),
            )
            .send_form(&[("grant_type", "client_credentials")])
            .context("token request failed")?
            .into_json()
            .context("failed to parse token response")?;
        Ok(response.access_token)
    }
}

/// `Authorization` header value for the client-credentials token request.
fn basic_auth(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    albums: Option<Page<AlbumItem>>,
    artists: Option<Page<ArtistItem>>,
    playlists: Option<Page<PlaylistItem>>,
    tracks: Option<Page<TrackItem>>,
}

/// One page of catalog items. Pages occasionally contain null entries.
#[derive(Debug, Deserialize)]
struct Page<T> {
    items: Vec<Option<T>>,
}

impl<T> Page<T> {
    fn items(self) -> impl Iterator<Item = T> {
        self.items.into_iter().flatten()
    }
}

#[derive(Debug, Deserialize)]
struct AlbumItem {
    name: String,
    artists: Vec<ArtistRef>,
}

#[derive(Debug, Deserialize)]
struct ArtistRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ArtistItem {
    name: String,
    followers: Followers,
}

#[derive(Debug, Deserialize)]
struct Followers {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    name: String,
    tracks: TrackCount,
}

#[derive(Debug, Deserialize)]
struct TrackCount {
    total: u32,
}

#[derive(Debug, Deserialize)]
struct TrackItem {
    name: String,
    duration_ms: u64,
    artists: Vec<ArtistRef>,
    album: AlbumRef,
}

#[derive(Debug, Deserialize)]
struct AlbumRef {
    name: String,
}

impl SearchResponse {
    /// Flatten the page for the requested kind into indexed hits. A missing
    /// page yields no hits.
    fn into_results(self, kind: SearchKind) -> SearchResults {
        match kind {
            SearchKind::Albums => SearchResults::Albums(
                self.albums
                    .map(|page| {
                        page.items()
                            .enumerate()
                            .map(|(index, item)| AlbumHit {
                                index,
                                album: item.name,
                                artists: join_artists(&item.artists),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            SearchKind::Artists => SearchResults::Artists(
                self.artists
                    .map(|page| {
                        page.items()
                            .enumerate()
                            .map(|(index, item)| ArtistHit {
                                index,
                                name: item.name,
                                followers: item.followers.total,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            SearchKind::Playlists => SearchResults::Playlists(
                self.playlists
                    .map(|page| {
                        page.items()
                            .enumerate()
                            .map(|(index, item)| PlaylistHit {
                                index,
                                name: item.name,
                                tracks: item.tracks.total,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            SearchKind::Tracks => SearchResults::Tracks(
                self.tracks
                    .map(|page| {
                        page.items()
                            .enumerate()
                            .map(|(index, item)| TrackHit {
                                index,
                                track: item.name,
                                duration: progress::format_duration_compact(
                                    Duration::from_millis(item.duration_ms),
                                ),
                                artists: join_artists(&item.artists),
                                album: item.album.name,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
        }
    }
}

fn join_artists(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── auth ──────────────────────────────────────────────────────────────────

    #[test]
    fn basic_auth_encodes_id_and_secret() {
        assert_eq!(basic_auth("id", "secret"), "Basic aWQ6c2VjcmV0");
    }

    // ── response mapping ──────────────────────────────────────────────────────

    #[test]
    fn track_page_maps_to_indexed_hits() {
        let body = r#"{
            "tracks": {
                "items": [
                    {
                        "name": "Song",
                        "duration_ms": 200000,
                        "artists": [{"name": "Artist"}],
                        "album": {"name": "Album"}
                    },
                    {
                        "name": "Other",
                        "duration_ms": 61000,
                        "artists": [{"name": "A"}, {"name": "B"}],
                        "album": {"name": "Elsewhere"}
                    }
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let SearchResults::Tracks(hits) = response.into_results(SearchKind::Tracks) else {
            panic!("expected track hits");
        };
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[0].track, "Song");
        assert_eq!(hits[0].duration, "3:20");
        assert_eq!(hits[0].artists, "Artist");
        assert_eq!(hits[0].album, "Album");
        assert_eq!(hits[1].index, 1);
        assert_eq!(hits[1].artists, "A, B");
        assert_eq!(hits[1].duration, "1:01");
    }

    #[test]
    fn album_page_joins_artist_names() {
        let body = r#"{
            "albums": {
                "items": [
                    {"name": "Collab", "artists": [{"name": "X"}, {"name": "Y"}]}
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let SearchResults::Albums(hits) = response.into_results(SearchKind::Albums) else {
            panic!("expected album hits");
        };
        assert_eq!(hits[0].album, "Collab");
        assert_eq!(hits[0].artists, "X, Y");
    }

    #[test]
    fn artist_page_carries_follower_totals() {
        let body = r#"{
            "artists": {
                "items": [
                    {"name": "Queen", "followers": {"total": 28104873}}
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let SearchResults::Artists(hits) = response.into_results(SearchKind::Artists) else {
            panic!("expected artist hits");
        };
        assert_eq!(hits[0].name, "Queen");
        assert_eq!(hits[0].followers, 28104873);
    }

    #[test]
    fn playlist_page_skips_null_entries() {
        let body = r#"{
            "playlists": {
                "items": [
                    null,
                    {"name": "Road Trip", "tracks": {"total": 42}},
                    null
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let SearchResults::Playlists(hits) = response.into_results(SearchKind::Playlists) else {
            panic!("expected playlist hits");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[0].name, "Road Trip");
        assert_eq!(hits[0].tracks, 42);
    }

    #[test]
    fn missing_page_yields_no_hits() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_results(SearchKind::Tracks).is_empty());
    }
}
