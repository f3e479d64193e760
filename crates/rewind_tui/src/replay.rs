//! Non-interactive replay: apply moves, print the resulting view.

use anyhow::{Result, bail};
use rewind_tictactoe::{GameHistory, GameView};
use tracing::{info, instrument};

/// Replays `moves` and renders the view at `jump` (or the last move).
///
/// Rejected moves are skipped the same way the interactive game skips them.
#[instrument]
pub fn render(moves: &[usize], jump: Option<usize>, json: bool) -> Result<String> {
    let mut game = GameHistory::replay(moves.iter().copied());
    info!(
        submitted = moves.len(),
        recorded = game.len() - 1,
        "Replayed moves"
    );

    if let Some(target) = jump {
        if target >= game.len() {
            bail!(
                "Cannot jump to move {}: history only has moves 0-{}",
                target,
                game.len() - 1
            );
        }
        game.jump_to(target);
    }

    let view = game.current_view();
    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(to_text(&view))
    }
}

fn to_text(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(view.status());
    out.push('\n');
    for entry in view.entries() {
        let marker = if entry.move_index() == view.current_move() {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let out = render(&[0, 4, 1, 7, 2], None, false).unwrap();
        assert!(out.starts_with("X|X|X\n-+-+-\n4|O|6\n-+-+-\n7|O|9\n\nWinner: X\n"));
        assert!(out.contains("  Go to game start\n"));
        assert!(out.ends_with("> Go to move #5\n"));
    }

    #[test]
    fn test_jump_output() {
        let out = render(&[0, 4, 1], Some(1), false).unwrap();
        assert!(out.contains("Next player: O"));
        assert!(out.contains("> Go to move #1\n"));
        assert!(out.contains("  Go to move #3\n"));
    }

    #[test]
    fn test_rejected_moves_are_skipped() {
        let out = render(&[4, 4, 12, 0], None, false).unwrap();
        assert!(out.contains("O|2|3"));
        assert!(out.ends_with("> Go to move #2\n"));
    }

    #[test]
    fn test_jump_out_of_range_is_an_error() {
        let err = render(&[0], Some(5), false).unwrap_err();
        assert!(err.to_string().contains("Cannot jump to move 5"));
    }

    #[test]
    fn test_json_output() {
        let out = render(&[0, 4, 1, 7, 2], Some(2), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["current_move"], 2);
        assert_eq!(value["next_player"], "X");
        assert_eq!(value["status"], "Next player: X");
        assert_eq!(value["phase"], "InProgress");
        assert_eq!(value["entries"].as_array().map(Vec::len), Some(6));
    }
}
