use crate::cli_handlers::CliCommand;
use crate::core::traits::StorageBackend;
use crate::modules::storage::json_backend::JsonStorageBackend;
use crate::modules::ui::printer;
use anyhow::Result;

pub struct ConfigCommand {
    pub client_id: String,
    pub client_secret: String,
}

impl CliCommand for ConfigCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let storage = JsonStorageBackend::new()?;

        let mut config = storage.load()?;
        config.client_id = Some(self.client_id);
        config.client_secret = Some(self.client_secret);
        storage.save(&config)?;

        printer::print_config();

        Ok(())
    }
}
