use crate::core::models::{Config, PlayerStatus};
use anyhow::Result;

/// Abstraction over the desktop player scripting bridge.
///
/// Every operation is a single round-trip to the player application; there is
/// no session or connection to hold on to.
pub trait PlayerBridge {
    /// Snapshot the player and the current track
    fn player_status(&self) -> Result<PlayerStatus>;

    /// Resume playback
    fn play(&self) -> Result<()>;

    /// Pause playback
    fn pause(&self) -> Result<()>;

    /// Skip to the next track in the queue
    fn next_track(&self) -> Result<()>;

    /// Return to the previous track
    fn previous_track(&self) -> Result<()>;

    /// Current volume (0-100)
    fn volume(&self) -> Result<u8>;

    /// Set volume (0-100)
    fn set_volume(&self, level: u8) -> Result<()>;

    /// Flip shuffle and return the new state
    fn toggle_shuffle(&self) -> Result<bool>;

    /// Flip repeat and return the new state
    fn toggle_repeat(&self) -> Result<bool>;

    /// Cover art URL of the current track
    fn artwork_url(&self) -> Result<String>;
}

/// Abstraction for persistent storage
pub trait StorageBackend {
    /// Load the stored configuration
    fn load(&self) -> Result<Config>;

    /// Save the configuration
    fn save(&self, config: &Config) -> Result<()>;
}
