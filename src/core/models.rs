use crate::modules::ui::progress;
use anyhow::anyhow;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Playback state as reported by the Spotify desktop app.
///
/// The app reports `stopped` in addition to the two states a running track
/// can be in; it renders like a paused track in the progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

impl PlayerState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlayerState::Playing)
    }
}

impl FromStr for PlayerState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playing" => Ok(PlayerState::Playing),
            "paused" => Ok(PlayerState::Paused),
            "stopped" => Ok(PlayerState::Stopped),
            other => Err(anyhow!("unknown player state: {other}")),
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Stopped => "stopped",
        };
        write!(f, "{}", label)
    }
}

/// Snapshot of the player at the moment a command ran.
///
/// `position` and `duration` are the human-readable forms of the two second
/// counts; the constructor keeps them consistent.
#[derive(Debug, Clone)]
pub struct PlayerStatus {
    pub state: PlayerState,
    pub artist: String,
    pub track: String,
    pub album: String,
    pub duration_secs: u64,
    pub position_secs: u64,
    pub position: String,
    pub duration: String,
}

impl PlayerStatus {
    pub fn new(
        state: PlayerState,
        artist: String,
        track: String,
        album: String,
        duration_secs: u64,
        position_secs: u64,
    ) -> Self {
        Self {
            state,
            artist,
            track,
            album,
            duration_secs,
            position_secs,
            position: progress::format_duration_compact(Duration::from_secs(position_secs)),
            duration: progress::format_duration_compact(Duration::from_secs(duration_secs)),
        }
    }
}

/// The catalog categories a search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Albums,
    Artists,
    Playlists,
    Tracks,
}

impl SearchKind {
    /// The `type` parameter the Web API expects (singular).
    pub fn api_type(&self) -> &'static str {
        match self {
            SearchKind::Albums => "album",
            SearchKind::Artists => "artist",
            SearchKind::Playlists => "playlist",
            SearchKind::Tracks => "track",
        }
    }
}

impl FromStr for SearchKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "albums" => Ok(SearchKind::Albums),
            "artists" => Ok(SearchKind::Artists),
            "playlists" => Ok(SearchKind::Playlists),
            "tracks" => Ok(SearchKind::Tracks),
            other => Err(anyhow!("{other} can not be printed")),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchKind::Albums => "albums",
            SearchKind::Artists => "artists",
            SearchKind::Playlists => "playlists",
            SearchKind::Tracks => "tracks",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct AlbumHit {
    pub index: usize,
    pub album: String,
    pub artists: String,
}

#[derive(Debug, Clone)]
pub struct ArtistHit {
    pub index: usize,
    pub name: String,
    pub followers: u64,
}

#[derive(Debug, Clone)]
pub struct PlaylistHit {
    pub index: usize,
    pub name: String,
    pub tracks: u32,
}

#[derive(Debug, Clone)]
pub struct TrackHit {
    pub index: usize,
    pub track: String,
    pub duration: String,
    pub artists: String,
    pub album: String,
}

/// Search hits grouped by the kind that produced them.
///
/// One variant per [`SearchKind`]; the printer dispatches on the variant, so
/// a hit can never reach a renderer of the wrong kind.
#[derive(Debug, Clone)]
pub enum SearchResults {
    Albums(Vec<AlbumHit>),
    Artists(Vec<ArtistHit>),
    Playlists(Vec<PlaylistHit>),
    Tracks(Vec<TrackHit>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Albums(hits) => hits.len(),
            SearchResults::Artists(hits) => hits.len(),
            SearchResults::Playlists(hits) => hits.len(),
            SearchResults::Tracks(hits) => hits.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Spotify Web API application credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Everything spotify-cli persists between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,

    /// Level to restore on `unmute`, saved by `mute`.
    #[serde(default)]
    pub last_volume: Option<u8>,
}

impl Config {
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some(Credentials {
                client_id: id.clone(),
                client_secret: secret.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── PlayerState ───────────────────────────────────────────────────────────

    #[test]
    fn player_state_parses_all_reported_states() {
        assert_eq!("playing".parse::<PlayerState>().unwrap(), PlayerState::Playing);
        assert_eq!("paused".parse::<PlayerState>().unwrap(), PlayerState::Paused);
        assert_eq!("stopped".parse::<PlayerState>().unwrap(), PlayerState::Stopped);
    }

    #[test]
    fn player_state_rejects_unknown_strings() {
        assert!("buffering".parse::<PlayerState>().is_err());
    }

    #[test]
    fn player_state_displays_lowercase() {
        assert_eq!(PlayerState::Playing.to_string(), "playing");
        assert_eq!(PlayerState::Paused.to_string(), "paused");
    }

    // ── PlayerStatus ──────────────────────────────────────────────────────────

    #[test]
    fn status_constructor_formats_position_and_duration() {
        let status = PlayerStatus::new(
            PlayerState::Playing,
            "Artist".into(),
            "Track".into(),
            "Album".into(),
            215,
            43,
        );
        assert_eq!(status.position, "0:43");
        assert_eq!(status.duration, "3:35");
    }

    // ── SearchKind ────────────────────────────────────────────────────────────

    #[test]
    fn valid_search_kinds_parse() {
        assert_eq!("albums".parse::<SearchKind>().unwrap(), SearchKind::Albums);
        assert_eq!("artists".parse::<SearchKind>().unwrap(), SearchKind::Artists);
        assert_eq!("playlists".parse::<SearchKind>().unwrap(), SearchKind::Playlists);
        assert_eq!("tracks".parse::<SearchKind>().unwrap(), SearchKind::Tracks);
    }

    #[test]
    fn unknown_search_kind_fails_before_anything_prints() {
        let err = "podcasts".parse::<SearchKind>().unwrap_err();
        assert!(err.to_string().contains("can not be printed"));
    }

    #[test]
    fn api_type_is_singular() {
        assert_eq!(SearchKind::Albums.api_type(), "album");
        assert_eq!(SearchKind::Tracks.api_type(), "track");
    }

    // ── Config ────────────────────────────────────────────────────────────────

    #[test]
    fn credentials_require_both_halves() {
        let mut config = Config::default();
        assert!(config.credentials().is_none());

        config.client_id = Some("id".into());
        assert!(config.credentials().is_none());

        config.client_secret = Some("secret".into());
        let creds = config.credentials().unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
    }
}
