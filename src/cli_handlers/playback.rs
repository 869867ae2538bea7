use crate::cli_handlers::CliCommand;
use crate::core::traits::PlayerBridge;
use crate::modules::player::applescript::AppleScriptBridge;
use crate::modules::ui::printer;
use anyhow::Result;

// ── Play / Pause ──────────────────────────────────────────────────────────────

pub struct PlayCommand;

impl CliCommand for PlayCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        bridge.play()?;

        let status = bridge.player_status()?;
        printer::print_player_status(&status);

        Ok(())
    }
}

pub struct PauseCommand;

impl CliCommand for PauseCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        bridge.pause()?;

        let status = bridge.player_status()?;
        printer::print_player_status(&status);

        Ok(())
    }
}

// ── Next / Previous ───────────────────────────────────────────────────────────

pub struct NextCommand;

impl CliCommand for NextCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        bridge.next_track()?;

        let status = bridge.player_status()?;
        printer::print_next(&status);

        Ok(())
    }
}

pub struct PreviousCommand;

impl CliCommand for PreviousCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        bridge.previous_track()?;

        let status = bridge.player_status()?;
        printer::print_previous(&status);

        Ok(())
    }
}
