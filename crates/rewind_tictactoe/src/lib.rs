//! Tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] snapshots of nine [`Square`]s, addressed by [`Position`]
//! - **Rules**: pure evaluation of a single snapshot ([`check_winner`], [`is_draw`])
//! - **History**: [`GameHistory`] owns all snapshots and the current position
//! - **View**: [`GameView`] is what a front end renders
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     game.submit_move(cell);
//! }
//! assert_eq!(*game.current_view().winner(), Some(Player::X));
//!
//! game.jump_to(2);
//! assert_eq!(game.current_view().status(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use history::{GameHistory, IgnoreReason, MoveOutcome};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryEntry, Phase};

/// Alias matching the game's vocabulary.
pub type Mark = Player;
