// Action dispatch: routes each Action variant to the right handler.

use tracing::{debug, error, info};

use crate::action::Action;
use crate::app::App;
use crate::catalog::models::Catalog;
use crate::components::Component;
use crate::search;

impl App {
    pub fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            // Lifecycle
            Action::Quit => self.running = false,

            // Catalog
            Action::LoadCatalog => self.load_catalog(),
            Action::CatalogLoaded(records) => {
                info!(count = records.len(), "catalog loaded");
                self.catalog = Catalog::new(records);
                self.card_strip.render(self.catalog.records(), true);
            }
            Action::CatalogFailed(msg) => {
                error!(error = %msg, "catalog load failed");
                self.error_message = Some(format!("failed to load catalog: {msg}"));
                self.card_strip.render(&[], true);
                let screen = self.screen;
                self.set_screen(screen);
            }

            // Modal
            Action::OpenMode { name } => self.open_mode(&name),
            Action::CloseModal => self.close_modal(),
            Action::GalleryPrev | Action::GalleryNext | Action::GallerySelect(_) => {
                self.mode_modal.update(&action)?;
            }

            // Search
            Action::FocusSearch => {
                self.search_bar.update(&action)?;
            }
            Action::SearchSubmit => {
                let plan = search::plan(self.catalog.records(), self.search_bar.input());
                debug!(
                    query = self.search_bar.input(),
                    shown = plan.items.len(),
                    duplicate = plan.duplicate,
                    "search"
                );
                self.card_strip.render(&plan.items, plan.duplicate);
                self.search_bar.update(&action)?;
            }
            Action::SearchCleared => {
                self.card_strip.render(self.catalog.records(), true);
            }

            // Navigation
            Action::Back => {
                if self.mode_modal.is_visible() {
                    self.close_modal();
                } else {
                    for follow_up in self.search_bar.update(&Action::Back)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // Help
            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,

            // Frame tick
            Action::Tick => {
                self.card_strip.update(&action)?;
            }
        }
        Ok(())
    }

    /// Resolve a card's name against the full catalog. A name that is no
    /// longer there opens nothing.
    fn open_mode(&mut self, name: &str) {
        match self.catalog.find(name) {
            Some(record) => {
                self.mode_modal.open(record);
                self.card_strip.set_scroll_locked(true);
            }
            None => debug!(mode = name, "card does not resolve to a catalog record"),
        }
    }

    fn close_modal(&mut self) {
        self.mode_modal.close();
        self.card_strip.set_scroll_locked(false);
    }
}
