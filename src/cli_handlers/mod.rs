mod config;
mod playback;
mod search;
mod status;
mod toggle;
mod volume;

pub use config::ConfigCommand;
pub use playback::{NextCommand, PauseCommand, PlayCommand, PreviousCommand};
pub use search::SearchCommand;
pub use status::StatusCommand;
pub use toggle::{RepeatCommand, ShuffleCommand};
pub use volume::{DownCommand, MuteCommand, UnmuteCommand, UpCommand, VolumeCommand};

use crate::cli::Commands;
use anyhow::Result;

/// Every CLI command implements this trait.
///
/// Commands own their arguments and are consumed on execution — they run exactly once.
pub trait CliCommand {
    fn execute(self: Box<Self>) -> Result<()>;
}

/// Converts a parsed [`Commands`] variant into a boxed [`CliCommand`] ready to execute.
///
/// Keeping this in one place means `main.rs` never needs to know about concrete command types.
pub fn from_cli(cmd: Commands) -> Box<dyn CliCommand> {
    match cmd {
        Commands::Status => Box::new(StatusCommand),
        Commands::Play => Box::new(PlayCommand),
        Commands::Pause => Box::new(PauseCommand),
        Commands::Next => Box::new(NextCommand),
        Commands::Previous => Box::new(PreviousCommand),
        Commands::Volume { level } => Box::new(VolumeCommand { level }),
        Commands::Up { amount } => Box::new(UpCommand { amount }),
        Commands::Down { amount } => Box::new(DownCommand { amount }),
        Commands::Mute => Box::new(MuteCommand),
        Commands::Unmute => Box::new(UnmuteCommand),
        Commands::Shuffle => Box::new(ShuffleCommand),
        Commands::Repeat => Box::new(RepeatCommand),
        Commands::Search { kind, query, limit } => Box::new(SearchCommand { kind, query, limit }),
        Commands::Config {
            client_id,
            client_secret,
        } => Box::new(ConfigCommand {
            client_id,
            client_secret,
        }),
    }
}
