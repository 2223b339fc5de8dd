// Data fetching: spawns the one-shot catalog load.

use tracing::info;

use crate::action::Action;
use crate::app::App;

impl App {
    /// Start the catalog fetch. Runs at most once per app; failures are
    /// reported, never retried.
    pub(super) fn load_catalog(&mut self) {
        if self.catalog_requested {
            return;
        }
        self.catalog_requested = true;
        self.card_strip.set_loading(true);

        let client = self.catalog_client.clone();
        let source = self.catalog_source.clone();
        let tx = self.action_tx.clone();
        info!(%source, "loading catalog");
        tokio::spawn(async move {
            match client.fetch(&source).await {
                Ok(records) => tx.send(Action::CatalogLoaded(records)).ok(),
                Err(e) => tx.send(Action::CatalogFailed(format!("{e:#}"))).ok(),
            };
        });
    }
}
