//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameHistory, GameView, MoveOutcome, Position};
use tracing::{debug, info, instrument};

use crate::input::{digit_cell, move_cursor};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

impl Focus {
    /// Toggles between board and history.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected_entry: usize,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_entry: 0,
            show_hints,
            should_quit: false,
        }
    }

    /// View of the current snapshot.
    pub fn view(&self) -> GameView {
        self.game.current_view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the move list.
    pub fn selected_entry(&self) -> usize {
        self.selected_entry
    }

    /// Whether the key help line is shown.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.place(cell);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_entry = self.game.current_move();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor.to_index()),
                Focus::History => self.game.jump_to(self.selected_entry),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.select_entry(key),
            },
            _ => {}
        }
    }

    fn place(&mut self, cell: usize) {
        if let MoveOutcome::Accepted { move_number, .. } = self.game.submit_move(cell) {
            self.selected_entry = move_number;
        }
    }

    fn select_entry(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        self.selected_entry = match key {
            KeyCode::Up => self.selected_entry.saturating_sub(1),
            KeyCode::Down => (self.selected_entry + 1).min(last),
            _ => self.selected_entry,
        };
        debug!(selected = self.selected_entry, "History selection moved");
    }

    fn restart(&mut self) {
        self.game.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected_entry = 0;
    }
}
