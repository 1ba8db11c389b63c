//! Viewer state and event loop

use crate::compiler::session::Session;
use crate::snapshot::LineSnapshot;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Statements,
    Symbols,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> statements -> symbols)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Statements,
            FocusedPane::Statements => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The finished (or aborted) run being inspected
    pub session: Session,

    /// The source file the run was fed
    pub source_code: String,

    /// Index into the session history
    pub position: usize,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: super::panes::SourceScrollState,
    pub statements_scroll: usize,
    pub symbols_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session, source_code: String) -> Self {
        let status_message = match session.diagnostics().len() {
            0 => String::from("Ready!"),
            n => format!("{} line(s) rejected", n),
        };
        App {
            session,
            source_code,
            position: 0,
            focused_pane: FocusedPane::Source,
            source_scroll: super::panes::SourceScrollState::default(),
            statements_scroll: 0,
            symbols_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    pub fn current_snapshot(&self) -> Option<&LineSnapshot> {
        self.session.history().get(self.position)
    }

    fn total_steps(&self) -> usize {
        self.session.history().len()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: Statements (top) | Symbols (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let snapshot = self.session.history().get(self.position);
        let current_line = snapshot.map(|s| s.line).unwrap_or(0);
        let is_error = snapshot.is_some_and(|s| !s.is_accepted());

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            current_line,
            is_error,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_statements_pane(
            frame,
            right_rows[0],
            snapshot,
            self.focused_pane == FocusedPane::Statements,
            &mut self.statements_scroll,
        );

        super::panes::render_symbols_pane(
            frame,
            right_rows[1],
            snapshot,
            self.session.symbols().capacity(),
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.position,
            self.total_steps(),
            is_error,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Statements => {
                    self.statements_scroll = self.statements_scroll.saturating_sub(1);
                }
                FocusedPane::Symbols => {
                    self.symbols_scroll = self.symbols_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Statements => {
                    self.statements_scroll = self.statements_scroll.saturating_add(1);
                }
                FocusedPane::Symbols => {
                    self.symbols_scroll = self.symbols_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter => {
                self.jump_to(self.total_steps().saturating_sub(1));
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.jump_to(0);
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn jump_to(&mut self, position: usize) {
        self.position = position;
        self.statements_scroll = 0;
        // Keep newly declared names in view
        self.symbols_scroll = usize::MAX;
    }

    fn step_forward(&mut self) {
        if self.position + 1 < self.total_steps() {
            self.jump_to(self.position + 1);
            self.status_message = self.describe_current();
        } else {
            self.status_message = "Cannot step forward: at last processed line".to_string();
        }
    }

    fn step_backward(&mut self) {
        if self.position > 0 {
            self.jump_to(self.position - 1);
            self.status_message = self.describe_current();
        } else {
            self.status_message = "Cannot step backward: at first line".to_string();
        }
    }

    fn describe_current(&self) -> String {
        match self.current_snapshot() {
            Some(snapshot) => match snapshot.error() {
                Some(error) => format!("Line {}: {}", snapshot.line, error.kind),
                None => format!(
                    "Line {}: {} statement(s)",
                    snapshot.line,
                    snapshot.statements().len()
                ),
            },
            None => String::new(),
        }
    }
}
