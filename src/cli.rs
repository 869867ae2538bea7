use clap::{Parser, Subcommand};

use crate::core::models::SearchKind;
use crate::utils::APP_NAME;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Control the Spotify desktop app from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what is playing right now
    Status,

    /// Resume playback
    Play,

    /// Pause playback
    Pause,

    /// Skip to the next track
    Next,

    /// Return to the previous track
    Previous,

    /// Set the volume, or show it when no level is given
    Volume {
        /// Volume level between 0 and 100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: Option<u8>,
    },

    /// Turn the volume up
    Up {
        /// Amount to increase by
        #[arg(default_value_t = 10)]
        amount: u8,
    },

    /// Turn the volume down
    Down {
        /// Amount to decrease by
        #[arg(default_value_t = 10)]
        amount: u8,
    },

    /// Mute playback, remembering the current volume
    Mute,

    /// Restore the volume saved by mute
    Unmute,

    /// Toggle shuffle
    Shuffle,

    /// Toggle repeat
    Repeat,

    /// Search the Spotify catalog
    Search {
        /// What to search for
        kind: SearchKind,

        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: u8,
    },

    /// Store Spotify Web API credentials for search
    Config {
        /// Application client id
        client_id: String,

        /// Application client secret
        client_secret: String,
    },
}
