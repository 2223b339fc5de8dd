// Central coordinator: owns the authoritative catalog and every component.
// Runs the event loop (key/mouse → Action → handle_action → component updates → draw).

mod actions;
mod fetch;
mod input;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::catalog::client::{CatalogClient, CatalogSource};
use crate::catalog::models::Catalog;
use crate::components::card_strip::CardStrip;
use crate::components::mode_modal::ModeModal;
use crate::components::search_bar::SearchBar;
use crate::components::Component;
use crate::config::Config;
use crate::theme::Theme;
use crate::tui::{Tui, TuiEvent};
use crate::ui;

/// Top-level coordinator: owns every component and the catalog. Components
/// never see each other; they talk through [`Action`]s sent on the channel.
pub struct App {
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub card_strip: CardStrip,
    pub search_bar: SearchBar,
    pub mode_modal: ModeModal,

    // State
    /// Every record, unfiltered. Card clicks resolve against this.
    pub catalog: Catalog,
    pub(crate) catalog_client: CatalogClient,
    pub(crate) catalog_source: CatalogSource,
    /// Set once the single catalog fetch has been started.
    pub(crate) catalog_requested: bool,
    pub(crate) config: Config,
    pub theme: Theme,
    pub show_help: bool,
    pub error_message: Option<String>,
    /// Terminal area as of the last draw, for mouse hit-testing.
    pub screen: Rect,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut card_strip = CardStrip::new(&config.carousel);
        let mut search_bar = SearchBar::new();
        let mut mode_modal = ModeModal::new();

        for component in [
            &mut card_strip as &mut dyn Component,
            &mut search_bar,
            &mut mode_modal,
        ] {
            component.register_action_handler(action_tx.clone());
        }

        Ok(Self {
            running: true,
            action_tx,
            action_rx,
            card_strip,
            search_bar,
            mode_modal,
            catalog: Catalog::default(),
            catalog_client: CatalogClient::new(),
            catalog_source: CatalogSource::parse(&config.catalog.source),
            catalog_requested: false,
            theme: Theme::from_name(&config.general.theme),
            config,
            show_help: false,
            error_message: None,
            screen: Rect::default(),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.tick_period())?;
        tui.enter()?;

        self.action_tx.send(Action::LoadCatalog)?;

        while self.running {
            self.set_screen(tui.area()?);
            let state = ui::DrawState {
                card_strip: &self.card_strip,
                search_bar: &self.search_bar,
                mode_modal: &self.mode_modal,
                theme: &self.theme,
                mode_count: self.catalog.len(),
                error_message: &self.error_message,
                show_help: self.show_help,
            };
            tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.event_rx.recv() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Mouse(mouse) => self.handle_mouse(mouse)?,
                        TuiEvent::FocusLost => self.card_strip.carousel_mut().leave(),
                        TuiEvent::Resize => {} // picked up by set_screen on the next pass
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
            }
        }

        tui.exit()?;
        Ok(())
    }

    /// Record the terminal size and resize the carousel viewport to match.
    pub fn set_screen(&mut self, area: Rect) {
        self.screen = area;
        let regions = ui::regions(area, self.error_message.is_some());
        self.card_strip.set_viewport_width(regions.strip.width);
    }

    /// Wait for the next queued action without handling it.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Drain and handle every queued action. Used by tests to settle the app.
    pub fn flush_actions(&mut self) -> anyhow::Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action)?;
        }
        Ok(())
    }
}
