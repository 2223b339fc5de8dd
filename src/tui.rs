// Terminal backend: raw-mode setup, mouse capture, event polling, and tick generation.
// Wraps crossterm + ratatui so the rest of the app just sees key/mouse/resize/tick events.

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stderr>>;

pub struct Tui {
    terminal: CrosstermTerminal,
    pub event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    tick_period: Duration,
}

#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The terminal window lost focus; the pointer is gone.
    FocusLost,
    Resize,
    Tick,
}

impl Tui {
    pub fn new(tick_period: Duration) -> anyhow::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stderr());
        let terminal = Terminal::new(backend)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            tick_period: tick_period.max(Duration::from_millis(1)),
        })
    }

    pub fn enter(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            std::io::stderr(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.start_event_polling();
        Ok(())
    }

    pub fn exit(&mut self) -> anyhow::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            std::io::stderr(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Current terminal area, used for mouse hit-testing between draws.
    pub fn area(&self) -> anyhow::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    fn start_event_polling(&self) {
        let tx = self.event_tx.clone();
        let tick_rate = self.tick_period;

        tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    event = reader.next() => {
                        match event {
                            Some(Ok(CrosstermEvent::Key(key))) => {
                                if key.kind == KeyEventKind::Press {
                                    tx.send(TuiEvent::Key(key)).ok();
                                }
                            }
                            Some(Ok(CrosstermEvent::Mouse(mouse))) => {
                                tx.send(TuiEvent::Mouse(mouse)).ok();
                            }
                            Some(Ok(CrosstermEvent::FocusLost)) => {
                                tx.send(TuiEvent::FocusLost).ok();
                            }
                            Some(Ok(CrosstermEvent::Resize(..))) => {
                                tx.send(TuiEvent::Resize).ok();
                            }
                            Some(Err(_)) | None => break,
                            _ => {}
                        }
                    }
                    _ = tick_interval.tick() => {
                        tx.send(TuiEvent::Tick).ok();
                    }
                }
            }
        });
    }

    pub fn draw<F>(&mut self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}
