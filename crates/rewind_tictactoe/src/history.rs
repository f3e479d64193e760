//! Move history with rewind.
//!
//! [`GameHistory`] owns every board snapshot of the game and a pointer to
//! the one being shown. Moves made after rewinding replace the abandoned
//! future; there is no redo.

use crate::rules::{check_winner, is_full, winning_line};
use crate::view::{GameView, Phase};
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument, warn};

/// Why a submitted move had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Cell index outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
    /// Target square already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The current snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    GameOver(Player),
}

/// Result of [`GameHistory::submit_move`].
///
/// Front ends may drop this; an ignored move leaves the history untouched
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as snapshot `move_number`.
    Accepted {
        /// Index of the new snapshot.
        move_number: usize,
        /// Player who moved.
        player: Player,
        /// Square that was marked.
        position: Position,
    },
    /// The move was rejected and nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Ordered board snapshots plus the current position.
///
/// Snapshot 0 is always the empty board, and each later snapshot differs
/// from its predecessor by exactly one newly marked square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a history by submitting each cell index in order.
    ///
    /// Rejected indices are skipped, just as they would be interactively.
    #[instrument(skip(moves))]
    pub fn replay(moves: impl IntoIterator<Item = usize>) -> Self {
        let mut history = Self::new();
        for index in moves {
            let _ = history.submit_move(index);
        }
        history
    }

    /// Attempts to mark `cell_index` for the player whose turn it is.
    ///
    /// The move is ignored if the index is off the board, the square is
    /// taken, or the current snapshot already has a winner. Otherwise any
    /// snapshots after the current one are discarded, the new snapshot is
    /// appended, and the current position moves to it.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn submit_move(&mut self, cell_index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell_index) else {
            return self.ignore(IgnoreReason::OutOfBounds(cell_index));
        };

        let board = self.current_board();
        if let Some(winner) = check_winner(board) {
            return self.ignore(IgnoreReason::GameOver(winner));
        }
        if let Square::Occupied(_) = board.get(position) {
            return self.ignore(IgnoreReason::Occupied(position));
        }

        let player = self.next_player();
        let next = board.with_mark(position, player);

        let discarded = self.snapshots.len() - (self.current_move + 1);
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        debug!(
            %player,
            %position,
            move_number = self.current_move,
            discarded,
            "Move recorded"
        );

        MoveOutcome::Accepted {
            move_number: self.current_move,
            player,
            position,
        }
    }

    /// Moves the current position to snapshot `move_index`.
    ///
    /// History contents are not touched. An index past the end is a caller
    /// bug: it panics in debug builds and is ignored in release builds.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) {
        debug_assert!(
            move_index < self.snapshots.len(),
            "jump target {} out of range (history length {})",
            move_index,
            self.snapshots.len()
        );
        if move_index >= self.snapshots.len() {
            warn!(move_index, "Ignoring out-of-range jump");
            return;
        }
        debug!(from = self.current_move, to = move_index, "Jumping");
        self.current_move = move_index;
    }

    /// Snapshot, turn, winner and jump targets at the current position.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn current_view(&self) -> GameView {
        let board = *self.current_board();
        GameView::new(
            board,
            self.current_move,
            winning_line(&board),
            self.phase(),
            self.snapshots.len(),
        )
    }

    /// Resets to a single empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(len = self.snapshots.len(), "Restarting");
        *self = Self::new();
    }

    /// Phase of the current snapshot.
    pub fn phase(&self) -> Phase {
        let board = self.current_board();
        match check_winner(board) {
            Some(winner) => Phase::Won(winner),
            None if is_full(board) => Phase::Draw,
            None => Phase::InProgress,
        }
    }

    /// Snapshot at the current position.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_move]
    }

    /// Player whose turn it is at the current position.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Index of the current snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// All retained snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of retained snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never discarded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn ignore(&self, reason: IgnoreReason) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
