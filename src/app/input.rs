// Key and mouse handling: maps terminal input to actions.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;
use crate::components::Component;
use crate::ui;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::{Char, Esc};

        // Overlays consume all keys
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }
        if self.mode_modal.is_visible() {
            self.mode_modal.handle_key_event(key)?;
            return Ok(());
        }

        if key.code == Esc {
            return self.action_tx.send(Action::Back).map_err(Into::into);
        }

        // In search mode, forward to the search bar; if it didn't consume the
        // key (e.g. arrow keys), fall through to normal-mode bindings.
        if self.search_bar.is_focused() && self.search_bar.handle_key_event(key)? {
            return Ok(());
        }

        match key.code {
            Char('q') => self.action_tx.send(Action::Quit)?,
            Char('?') => self.action_tx.send(Action::ShowHelp)?,
            Char('/') => self.action_tx.send(Action::FocusSearch)?,
            _ => {
                self.card_strip.handle_key_event(key)?;
            }
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> anyhow::Result<()> {
        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.action_tx.send(Action::HideHelp)?;
            }
            return Ok(());
        }
        if self.mode_modal.is_visible() {
            self.mode_modal.handle_mouse_event(mouse, self.screen)?;
            return Ok(());
        }

        let regions = ui::regions(self.screen, self.error_message.is_some());
        self.card_strip.handle_mouse_event(mouse, regions.strip)?;
        Ok(())
    }
}
