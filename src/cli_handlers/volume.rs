use crate::cli_handlers::CliCommand;
use crate::core::traits::{PlayerBridge, StorageBackend};
use crate::modules::player::applescript::AppleScriptBridge;
use crate::modules::storage::json_backend::JsonStorageBackend;
use crate::modules::ui::printer;
use anyhow::Result;

/// Restore level when mute never saved one.
const DEFAULT_UNMUTE_VOLUME: u8 = 75;

// ── Volume ────────────────────────────────────────────────────────────────────

pub struct VolumeCommand {
    pub level: Option<u8>,
}

impl CliCommand for VolumeCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();

        match self.level {
            Some(level) => {
                bridge.set_volume(level)?;
                printer::print_set_volume(level);
            }
            None => {
                let level = bridge.volume()?;
                printer::print_volume(level);
            }
        }

        Ok(())
    }
}

// ── Up / Down ─────────────────────────────────────────────────────────────────

pub struct UpCommand {
    pub amount: u8,
}

impl CliCommand for UpCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();

        let current = bridge.volume()?;
        let level = current.saturating_add(self.amount).min(100);
        bridge.set_volume(level)?;

        printer::print_volume_increase(self.amount, level);

        Ok(())
    }
}

pub struct DownCommand {
    pub amount: u8,
}

impl CliCommand for DownCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();

        let current = bridge.volume()?;
        let level = current.saturating_sub(self.amount);
        bridge.set_volume(level)?;

        printer::print_volume_decrease(self.amount, level);

        Ok(())
    }
}

// ── Mute / Unmute ─────────────────────────────────────────────────────────────

pub struct MuteCommand;

impl CliCommand for MuteCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let storage = JsonStorageBackend::new()?;
        let bridge = AppleScriptBridge::new();

        let current = bridge.volume()?;
        if current > 0 {
            let mut config = storage.load()?;
            config.last_volume = Some(current);
            storage.save(&config)?;
        }

        bridge.set_volume(0)?;
        printer::print_mute(0);

        Ok(())
    }
}

pub struct UnmuteCommand;

impl CliCommand for UnmuteCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let storage = JsonStorageBackend::new()?;
        let bridge = AppleScriptBridge::new();

        let level = storage.load()?.last_volume.unwrap_or(DEFAULT_UNMUTE_VOLUME);
        bridge.set_volume(level)?;

        printer::print_unmute(level);

        Ok(())
    }
}
