// Layout and rendering: splits the terminal into header, card strip, search
// bar and error line, and composites overlays (mode modal, help).

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::components::card_strip::CardStrip;
use crate::components::mode_modal::ModeModal;
use crate::components::search_bar::SearchBar;
use crate::components::{centered_overlay, Component};
use crate::theme::Theme;

pub struct DrawState<'a> {
    pub card_strip: &'a CardStrip,
    pub search_bar: &'a SearchBar,
    pub mode_modal: &'a ModeModal,
    pub theme: &'a Theme,
    pub mode_count: usize,
    pub error_message: &'a Option<String>,
    pub show_help: bool,
}

/// Screen regions, computed the same way for drawing and for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub frame: Rect,
    pub header: Rect,
    pub strip: Rect,
    pub search: Rect,
    pub error: Rect,
}

pub fn regions(area: Rect, has_error: bool) -> Regions {
    let error_height = if has_error { 1 } else { 0 };
    let outer = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(error_height),
        Constraint::Length(1),
    ])
    .split(area);

    let inner = Block::default().borders(Borders::ALL).inner(outer[0]);
    let content = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);

    Regions {
        frame: outer[0],
        header: content[0],
        strip: content[1],
        search: outer[2],
        error: outer[1],
    }
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let theme = state.theme;
    let regions = regions(frame.area(), state.error_message.is_some());

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" modedeck ")
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(outer_block, regions.frame);

    let header = Line::from(vec![
        Span::styled(
            format!(" {} game modes", state.mode_count),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            "   hover the edges or drag to scroll · Enter/click to open · ? help",
            Style::default().fg(theme.text_dim),
        ),
    ]);
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(header).block(header_block), regions.header);

    state.card_strip.draw(frame, regions.strip, theme);
    state.search_bar.draw(frame, regions.search, theme);

    if let Some(ref msg) = state.error_message {
        let error_line = Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(theme.error)),
            Span::styled(msg.as_str(), Style::default().fg(theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(error_line), regions.error);
    }

    if state.mode_modal.is_visible() {
        state.mode_modal.draw(frame, frame.area(), theme);
    }

    if state.show_help {
        draw_help_overlay(frame, theme);
    }
}

fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let overlay_area = centered_overlay(frame.area(), 56, 20);

    frame.render_widget(Clear, overlay_area);

    let keybindings = [
        ("q", "Quit"),
        ("← / h", "Select previous card"),
        ("→ / l", "Select next card"),
        ("Enter", "Open selected card"),
        ("/", "Focus search bar"),
        ("Enter (search)", "Run search"),
        ("Ctrl+U", "Clear search"),
        ("Escape", "Clear search / close modal"),
        ("← → (modal)", "Previous / next image"),
        ("1–9 (modal)", "Jump to thumbnail"),
        ("Home/End (modal)", "First / last image"),
        ("mouse", "Hover edges, drag, click"),
        ("?", "Toggle this help overlay"),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:18}", key), Style::default().fg(theme.accent)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(theme.text_dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
