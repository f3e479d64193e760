//! Render-ready view of a game history.

use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where the displayed snapshot stands in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No winner and at least one empty square.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Full board, no winner.
    Draw,
}

impl Phase {
    /// Returns true for won and drawn boards.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// One navigable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Button text, e.g. "Go to move #3".
    label: String,
    /// Snapshot index the entry jumps to.
    move_index: usize,
}

impl HistoryEntry {
    /// Creates the entry for snapshot `move_index`.
    pub fn new(move_index: usize) -> Self {
        let label = if move_index > 0 {
            format!("Go to move #{}", move_index)
        } else {
            "Go to game start".to_string()
        };
        Self { label, move_index }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Snapshot at the current position.
    board: Board,
    /// Index of that snapshot in the history.
    current_move: usize,
    /// Player whose turn it is at this snapshot.
    next_player: Player,
    /// Winner on this snapshot, if any.
    winner: Option<Player>,
    /// Cells of the completed line, for highlighting.
    winning_line: Option<[Position; 3]>,
    /// Game phase of this snapshot.
    phase: Phase,
    /// Status line text.
    status: String,
    /// Jump targets, oldest first.
    entries: Vec<HistoryEntry>,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        current_move: usize,
        winning_line: Option<(Player, [Position; 3])>,
        phase: Phase,
        history_len: usize,
    ) -> Self {
        let next_player = Player::for_move(current_move);
        let status = match phase {
            Phase::Won(player) => format!("Winner: {}", player),
            Phase::Draw => "Draw".to_string(),
            Phase::InProgress => format!("Next player: {}", next_player),
        };
        Self {
            board,
            current_move,
            next_player,
            winner: phase.winner(),
            winning_line: winning_line.map(|(_, line)| line),
            phase,
            status,
            entries: (0..history_len).map(HistoryEntry::new).collect(),
        }
    }

    /// Number of snapshots in the history the view was taken from.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels() {
        assert_eq!(HistoryEntry::new(0).label(), "Go to game start");
        assert_eq!(HistoryEntry::new(4).label(), "Go to move #4");
        assert_eq!(*HistoryEntry::new(4).move_index(), 4);
    }

    #[test]
    fn test_phase_helpers() {
        assert!(!Phase::InProgress.is_terminal());
        assert!(Phase::Draw.is_terminal());
        assert_eq!(Phase::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Phase::Draw.winner(), None);
    }
}
