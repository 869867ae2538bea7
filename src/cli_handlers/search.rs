use crate::cli_handlers::CliCommand;
use crate::core::models::SearchKind;
use crate::core::traits::StorageBackend;
use crate::modules::search::spotify_api::SpotifyApi;
use crate::modules::storage::json_backend::JsonStorageBackend;
use crate::modules::ui::printer;
use crate::utils::APP_NAME;
use anyhow::{Result, anyhow};

pub struct SearchCommand {
    pub kind: SearchKind,
    pub query: String,
    pub limit: u8,
}

impl CliCommand for SearchCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let storage = JsonStorageBackend::new()?;
        let config = storage.load()?;

        let credentials = config.credentials().ok_or_else(|| {
            anyhow!("No API credentials configured. Run '{APP_NAME} config <client-id> <client-secret>' first.")
        })?;

        let api = SpotifyApi::new(credentials);
        let results = api.search(self.kind, &self.query, self.limit)?;

        if results.is_empty() {
            printer::warning(&format!("No {} found for '{}'.", self.kind, self.query));
            return Ok(());
        }

        printer::print_search_results(&results);

        Ok(())
    }
}
