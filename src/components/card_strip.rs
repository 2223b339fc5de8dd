// The looping card carousel: renders mode cards side by side, scrolls them on
// hover/drag/tick, and turns clicks into OpenMode actions.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::carousel::Carousel;
use crate::catalog::models::ModeRecord;
use crate::components::{truncate, Component, BRAILLE_SPINNER};
use crate::config::CarouselConfig;
use crate::theme::Theme;

/// One rendered card. Holds the record's name only; the record itself is
/// looked up again when the card is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub mode_name: String,
    pub cover: Option<String>,
}

impl From<&ModeRecord> for CardView {
    fn from(record: &ModeRecord) -> Self {
        Self {
            mode_name: record.name.clone(),
            cover: record.cover_image().map(str::to_string),
        }
    }
}

pub struct CardStrip {
    action_tx: Option<UnboundedSender<Action>>,
    cards: Vec<CardView>,
    carousel: Carousel,
    card_width: u16,
    card_pitch: u16,
    /// Index within one copy of the list when looping.
    selected: Option<usize>,
    /// Column where the left button went down, for click detection.
    press_column: Option<u16>,
    scroll_locked: bool,
    loading: bool,
    frame_count: u64,
}

impl CardStrip {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            action_tx: None,
            cards: vec![],
            carousel: Carousel::new(config),
            card_width: config.card_width.max(1),
            card_pitch: config.card_pitch(),
            selected: None,
            press_column: None,
            scroll_locked: false,
            loading: false,
            frame_count: 0,
        }
    }

    /// Replace the cards. With `duplicate`, `items` is rendered twice back to
    /// back so the carousel can loop without a visible seam.
    pub fn render(&mut self, items: &[ModeRecord], duplicate: bool) {
        self.cards = items.iter().map(CardView::from).collect();
        if duplicate {
            self.cards.extend_from_within(..);
        }
        let looping = duplicate && !items.is_empty();
        let content_width = self.cards.len() as f64 * f64::from(self.card_pitch);
        self.carousel.reset(content_width, looping);
        self.selected = if self.cards.is_empty() { None } else { Some(0) };
        self.press_column = None;
        self.loading = false;
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.mode_name.as_str()).collect()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.carousel.set_viewport_width(f64::from(width));
    }

    /// While locked (modal open) the strip ignores pointer input and stops scrolling.
    pub fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        if locked {
            self.carousel.leave();
            self.carousel.end_drag();
            self.press_column = None;
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&CardView> {
        self.selected.and_then(|i| self.cards.get(i))
    }

    /// Leftmost content column currently drawn at the strip's left edge.
    fn scroll_column(&self) -> u64 {
        self.carousel.offset().max(0.0).floor() as u64
    }

    /// Card under strip-relative column `local_x`, if any (gaps hit nothing).
    pub fn card_at(&self, local_x: u16) -> Option<usize> {
        if self.cards.is_empty() {
            return None;
        }
        let pitch = u64::from(self.card_pitch);
        let content_x = self.scroll_column() + u64::from(local_x);
        if content_x % pitch >= u64::from(self.card_width) {
            return None;
        }
        let tile = (content_x / pitch) as usize;
        if self.carousel.is_looping() {
            Some(tile % self.cards.len())
        } else {
            (tile < self.cards.len()).then_some(tile)
        }
    }

    /// Number of distinct cards: one copy of the list when looping.
    fn set_len(&self) -> usize {
        if self.carousel.is_looping() {
            self.cards.len() / 2
        } else {
            self.cards.len()
        }
    }

    /// Both copies of a card count as selected when looping.
    fn is_selected(&self, index: usize) -> bool {
        let len = self.set_len();
        len > 0 && self.selected == Some(index % len)
    }

    pub fn select_next(&mut self) {
        let len = self.set_len();
        if len == 0 {
            return;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % len);
        self.select(next);
    }

    pub fn select_prev(&mut self) {
        let len = self.set_len();
        if len == 0 {
            return;
        }
        let prev = match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select(prev);
    }

    /// Select `index` (within one copy) and scroll the nearest copy of it
    /// into view.
    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        let pitch = f64::from(self.card_pitch);
        let width = f64::from(self.card_width);
        let start = index as f64 * pitch;

        let target = if self.carousel.is_looping() {
            let copy = start + self.carousel.single_set_width();
            if self.scroll_distance(copy, width) < self.scroll_distance(start, width) {
                copy
            } else {
                start
            }
        } else {
            start
        };
        self.carousel.reveal(target, target + width);
    }

    /// How far the strip would have to move to show `[start, start + width)`.
    fn scroll_distance(&self, start: f64, width: f64) -> f64 {
        let offset = self.carousel.offset();
        let view_end = offset + self.carousel.viewport_width();
        if start < offset {
            offset - start
        } else if start + width > view_end {
            start + width - view_end
        } else {
            0.0
        }
    }

    fn open(&self, card: &CardView) -> anyhow::Result<()> {
        if let Some(tx) = &self.action_tx {
            tx.send(Action::OpenMode {
                name: card.mode_name.clone(),
            })?;
        }
        Ok(())
    }

    fn draw_card(&self, card: &CardView, selected: bool, height: u16, theme: &Theme) -> Buffer {
        let area = Rect::new(0, 0, self.card_width, height);
        let mut buf = Buffer::empty(area);

        let border_color = if self.carousel.is_dragging() {
            theme.accent
        } else if selected {
            theme.primary
        } else {
            theme.border
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        if selected {
            block = block.style(Style::default().bg(theme.selection_bg));
        }
        let inner = block.inner(area);
        block.render(area, &mut buf);

        let width = inner.width as usize;
        let art_rows = inner.height.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = (0..art_rows)
            .map(|_| Line::styled("░".repeat(width), Style::default().fg(theme.text_dim)))
            .collect();
        let cover = card.cover.as_deref().unwrap_or("(no image)");
        lines.push(Line::styled(
            truncate(cover, width),
            Style::default().fg(theme.text_dim),
        ));
        let name_style = if selected {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::styled(truncate(&card.mode_name, width), name_style));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, &mut buf);
        buf
    }

    fn draw_placeholder(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = if self.loading {
            let idx = (self.frame_count / 3) as usize % BRAILLE_SPINNER.len();
            Line::from(vec![
                Span::styled(
                    format!("  {} ", BRAILLE_SPINNER[idx]),
                    Style::default().fg(theme.primary),
                ),
                Span::styled("Loading catalog...", Style::default().fg(theme.text_dim)),
            ])
        } else {
            Line::styled("  No game modes to show.", Style::default().fg(theme.text_dim))
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for CardStrip {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_next();
                Ok(true)
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_prev();
                Ok(true)
            }
            KeyCode::Enter => {
                if let Some(card) = self.selected_card() {
                    self.open(card)?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> anyhow::Result<bool> {
        if self.scroll_locked {
            return Ok(false);
        }
        let inside = area.contains(Position::new(mouse.column, mouse.row));
        let local_x = mouse.column.saturating_sub(area.x);

        match mouse.kind {
            MouseEventKind::Moved => {
                if inside {
                    self.carousel
                        .hover(f64::from(local_x), f64::from(area.width));
                } else {
                    self.carousel.leave();
                }
                Ok(inside)
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.press_column = Some(mouse.column);
                self.carousel.begin_drag(f64::from(mouse.column));
                Ok(true)
            }
            MouseEventKind::Drag(MouseButton::Left) if self.carousel.is_dragging() => {
                self.carousel.drag_to(f64::from(mouse.column));
                Ok(true)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let dragged = self.carousel.end_drag().is_some();
                let pressed_here = self.press_column.take() == Some(mouse.column);
                if pressed_here && inside {
                    if let Some(index) = self.card_at(local_x) {
                        self.selected = Some(index % self.set_len());
                        if let Some(card) = self.cards.get(index) {
                            self.open(card)?;
                        }
                    }
                }
                Ok(dragged)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::Tick = action {
            self.frame_count = self.frame_count.wrapping_add(1);
            if !self.scroll_locked {
                self.carousel.tick();
            }
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.cards.is_empty() || area.width == 0 || area.height == 0 {
            self.draw_placeholder(frame, area, theme);
            return;
        }

        let pitch = u64::from(self.card_pitch);
        let scroll = self.scroll_column();
        let view_end = scroll + u64::from(area.width);
        let mut tile = scroll / pitch;

        loop {
            let tile_start = tile * pitch;
            if tile_start >= view_end {
                break;
            }
            let index = if self.carousel.is_looping() {
                tile as usize % self.cards.len()
            } else if (tile as usize) < self.cards.len() {
                tile as usize
            } else {
                break;
            };

            let card = self.draw_card(
                &self.cards[index],
                self.is_selected(index),
                area.height,
                theme,
            );
            let buf = frame.buffer_mut();
            for cx in 0..self.card_width {
                let content_x = tile_start + u64::from(cx);
                if content_x < scroll || content_x >= view_end {
                    continue;
                }
                let x = area.x + (content_x - scroll) as u16;
                for cy in 0..area.height {
                    if let (Some(src), Some(dst)) =
                        (card.cell((cx, cy)), buf.cell_mut((x, area.y + cy)))
                    {
                        *dst = src.clone();
                    }
                }
            }
            tile += 1;
        }
    }
}
