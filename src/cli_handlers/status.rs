use crate::cli_handlers::CliCommand;
use crate::core::traits::PlayerBridge;
use crate::modules::player::applescript::AppleScriptBridge;
use crate::modules::ui::printer;
use anyhow::Result;

pub struct StatusCommand;

impl CliCommand for StatusCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        let status = bridge.player_status()?;

        printer::print_player_status(&status);

        Ok(())
    }
}
