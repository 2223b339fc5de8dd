// Text input for searching mode names. Activated with `/`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

#[derive(Default)]
pub struct SearchBar {
    action_tx: Option<UnboundedSender<Action>>,
    input: String,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    fn send(&self, action: Action) -> anyhow::Result<()> {
        if let Some(tx) = &self.action_tx {
            tx.send(action)?;
        }
        Ok(())
    }

    /// An edit that leaves the field blank restores the full catalog on its
    /// own, without waiting for Enter.
    fn edited(&self) -> anyhow::Result<()> {
        if self.input.trim().is_empty() {
            self.send(Action::SearchCleared)?;
        }
        Ok(())
    }

    /// Empty the field and unfocus. Returns the follow-up action, if the
    /// field had anything in it.
    fn reset(&mut self) -> Vec<Action> {
        self.focused = false;
        if self.input.is_empty() {
            return vec![];
        }
        self.input.clear();
        vec![Action::SearchCleared]
    }
}

impl Component for SearchBar {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.focused {
            return Ok(false);
        }
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.edited()?;
                Ok(true)
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.edited()?;
                Ok(true)
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.edited()?;
                }
                Ok(true)
            }
            KeyCode::Enter => {
                self.send(Action::SearchSubmit)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::FocusSearch => {
                self.focused = true;
            }
            Action::Back => return Ok(self.reset()),
            Action::SearchSubmit => {
                // Keep the query visible; just hand focus back to the cards.
                self.focused = false;
            }
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = if self.focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_dim)
        };

        let display = if self.input.is_empty() && !self.focused {
            "/ Search modes...".to_string()
        } else if self.focused {
            format!("/ {}_", self.input)
        } else {
            format!("/ {}", self.input)
        };

        let paragraph = Paragraph::new(display).style(style);
        frame.render_widget(paragraph, area);
    }
}
