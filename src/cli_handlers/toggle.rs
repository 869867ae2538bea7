use crate::cli_handlers::CliCommand;
use crate::core::traits::PlayerBridge;
use crate::modules::player::applescript::AppleScriptBridge;
use crate::modules::ui::printer;
use anyhow::Result;

pub struct ShuffleCommand;

impl CliCommand for ShuffleCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        let enabled = bridge.toggle_shuffle()?;

        printer::print_toggle_shuffle(enabled);

        Ok(())
    }
}

pub struct RepeatCommand;

impl CliCommand for RepeatCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let bridge = AppleScriptBridge::new();
        let enabled = bridge.toggle_repeat()?;

        printer::print_toggle_repeat(enabled);

        Ok(())
    }
}
