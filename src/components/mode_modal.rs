// Details overlay for one game mode: name, description, link, and an image
// gallery with prev/next controls and a thumbnail strip.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::action::Action;
use crate::catalog::models::ModeRecord;
use crate::components::{centered_overlay, truncate, Component};
use crate::gallery::Gallery;
use crate::theme::Theme;

/// Columns taken by one thumbnail chip, including its trailing space.
pub const THUMB_WIDTH: u16 = 6;

const MODAL_WIDTH: u16 = 90;
const MODAL_HEIGHT: u16 = 26;

/// Text fields copied out of the record when the modal opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDetail {
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Where each part of the modal sits for a given screen area. Shared by
/// drawing and mouse hit-testing so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub overlay: Rect,
    pub close: Rect,
    pub description: Rect,
    pub link: Rect,
    pub prev: Rect,
    pub main_image: Rect,
    pub next: Rect,
    pub thumbnails: Rect,
    pub hints: Rect,
}

impl ModalLayout {
    pub fn new(area: Rect) -> Self {
        let overlay = centered_overlay(
            area,
            MODAL_WIDTH.min(area.width.saturating_sub(4)),
            MODAL_HEIGHT.min(area.height.saturating_sub(2)),
        );
        let close = Rect::new(
            (overlay.x + overlay.width).saturating_sub(5),
            overlay.y,
            3.min(overlay.width),
            1.min(overlay.height),
        );
        let inner = Block::default().borders(Borders::ALL).inner(overlay);

        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let gallery_row = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(rows[3]);

        Self {
            overlay,
            close,
            description: rows[0],
            link: rows[1],
            prev: gallery_row[0],
            main_image: gallery_row[1],
            next: gallery_row[2],
            thumbnails: rows[4],
            hints: rows[5],
        }
    }

    pub fn thumb_capacity(&self) -> usize {
        (self.thumbnails.width / THUMB_WIDTH) as usize
    }
}

#[derive(Default)]
pub struct ModeModal {
    action_tx: Option<UnboundedSender<Action>>,
    visible: bool,
    detail: Option<ModeDetail>,
    gallery: Gallery,
}

impl ModeModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show `record`. Any gallery from a previous open is dropped, not reused.
    pub fn open(&mut self, record: &ModeRecord) {
        debug!(mode = %record.name, images = record.images.len(), "opening mode");
        self.detail = Some(ModeDetail {
            name: record.name.clone(),
            description: record.description.clone(),
            link: record.link.clone(),
        });
        self.gallery = Gallery::new(record.images.clone());
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn detail(&self) -> Option<&ModeDetail> {
        self.detail.as_ref()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    fn send(&self, action: Action) -> anyhow::Result<()> {
        if let Some(tx) = &self.action_tx {
            tx.send(action)?;
        }
        Ok(())
    }

    fn draw_gallery(&self, frame: &mut Frame, layout: &ModalLayout, theme: &Theme) {
        let total = self.gallery.len();
        let title = if total == 0 {
            " no images ".to_string()
        } else {
            format!(" image {}/{} ", self.gallery.current_index() + 1, total)
        };
        let panel = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = panel.inner(layout.main_image);
        frame.render_widget(panel, layout.main_image);

        let width = inner.width as usize;
        let mut lines: Vec<Line> = (0..inner.height.saturating_sub(1))
            .map(|_| Line::styled("▒".repeat(width), Style::default().fg(theme.text_dim)))
            .collect();
        lines.push(Line::styled(
            truncate(self.gallery.current_image().unwrap_or(""), width),
            Style::default().fg(theme.text),
        ));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

        if self.gallery.controls_visible() {
            let arrow_style = Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD);
            for (rect, glyph) in [(layout.prev, "◀"), (layout.next, "▶")] {
                let mid = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1.min(rect.height));
                frame.render_widget(
                    Paragraph::new(Span::styled(glyph, arrow_style)).alignment(Alignment::Center),
                    mid,
                );
            }
        }

        let window = self.gallery.thumb_window(layout.thumb_capacity());
        let mut spans = Vec::with_capacity(window.len() * 2);
        for i in window {
            let style = if self.gallery.is_active(i) {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme.text_dim)
            };
            spans.push(Span::styled(format!("[{:^3}]", i + 1), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), layout.thumbnails);
    }
}

impl Component for ModeModal {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.visible {
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.send(Action::CloseModal)?,
            KeyCode::Left | KeyCode::Char('h') => self.send(Action::GalleryPrev)?,
            KeyCode::Right | KeyCode::Char('l') => self.send(Action::GalleryNext)?,
            KeyCode::Home => self.send(Action::GallerySelect(0))?,
            KeyCode::End if !self.gallery.is_empty() => {
                self.send(Action::GallerySelect(self.gallery.len() - 1))?
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.send(Action::GallerySelect(index))?;
            }
            _ => {}
        }

        Ok(true)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> anyhow::Result<bool> {
        if !self.visible {
            return Ok(false);
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(true);
        }

        let layout = ModalLayout::new(area);
        let pos = Position::new(mouse.column, mouse.row);

        if !layout.overlay.contains(pos) || layout.close.contains(pos) {
            self.send(Action::CloseModal)?;
        } else if self.gallery.controls_visible() && layout.prev.contains(pos) {
            self.send(Action::GalleryPrev)?;
        } else if self.gallery.controls_visible() && layout.next.contains(pos) {
            self.send(Action::GalleryNext)?;
        } else if layout.thumbnails.contains(pos) {
            let window = self.gallery.thumb_window(layout.thumb_capacity());
            let slot = ((mouse.column - layout.thumbnails.x) / THUMB_WIDTH) as usize;
            let index = window.start + slot;
            if index < window.end {
                self.send(Action::GallerySelect(index))?;
            }
        }
        Ok(true)
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if !self.visible {
            return Ok(vec![]);
        }
        match action {
            Action::GalleryPrev => self.gallery.prev(),
            Action::GalleryNext => self.gallery.next(),
            Action::GallerySelect(index) => {
                self.gallery.select(*index);
            }
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }
        let Some(detail) = &self.detail else {
            return;
        };

        let layout = ModalLayout::new(area);
        frame.render_widget(Clear, layout.overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(format!(" {} ", detail.name))
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(block, layout.overlay);
        frame.render_widget(
            Paragraph::new(Span::styled("[x]", Style::default().fg(theme.accent))),
            layout.close,
        );

        frame.render_widget(
            Paragraph::new(detail.description.as_str())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: true }),
            layout.description,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("↗ ", Style::default().fg(theme.secondary)),
                Span::styled(
                    detail.link.as_str(),
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ])),
            layout.link,
        );

        self.draw_gallery(frame, &layout, theme);

        let hint = if self.gallery.controls_visible() {
            "←→ image · 1-9 jump · Esc close"
        } else {
            "Esc close"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.text_dim)))
                .alignment(Alignment::Center),
            layout.hints,
        );
    }
}
