use rand::prelude::IndexedRandom;

use crate::board::Board;
use crate::types::{Mark, Position};
use crate::win_detector::check_win;

/// Score of a decided position. X is the maximizing side, O the minimizing
/// side; a drawn or undecided position scores 0.
pub const WIN_SCORE: i32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotKind {
    Random,
    Minimax,
}

pub fn calculate_move(kind: BotKind, board: &mut Board, win_count: usize) -> Option<Position> {
    match kind {
        BotKind::Random => random_move(board),
        BotKind::Minimax => find_best_move(board, win_count),
    }
}

pub fn random_move(board: &Board) -> Option<Position> {
    board.empty_positions().choose(&mut rand::rng()).copied()
}

pub fn evaluate(board: &Board, win_count: usize) -> i32 {
    match check_win(board, win_count) {
        Some(Mark::X) => WIN_SCORE,
        Some(Mark::O) => -WIN_SCORE,
        _ => 0,
    }
}

/// Game-theoretic value of the position for the side to move, searched to
/// full depth. Recursion bottoms out on a decided position or a full board,
/// so a returned 0 always means a draw under optimal play. Every tried move
/// is reverted before the next one; the caller's board comes back unchanged.
///
/// `depth` only tracks how far down the tree the call is; it does not weight
/// the score.
pub fn minimax(board: &mut Board, win_count: usize, depth: usize, maximizing: bool) -> i32 {
    let score = evaluate(board, win_count);
    if score != 0 || board.is_full() {
        return score;
    }

    let dimension = board.dimension();
    let mover = if maximizing { Mark::X } else { Mark::O };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for row in 0..dimension {
        for col in 0..dimension {
            if board.is_occupied(row, col) {
                continue;
            }

            board.set(row, col, mover);
            let value = minimax(board, win_count, depth + 1, !maximizing);
            board.set(row, col, Mark::Empty);

            best = if maximizing { best.max(value) } else { best.min(value) };
        }
    }

    best
}

/// Best square for the maximizing side (X). Squares are tried in row-major
/// order and ties keep the first candidate, so the choice is deterministic.
/// `None` when the board has no empty square left.
pub fn find_best_move(board: &mut Board, win_count: usize) -> Option<Position> {
    let dimension = board.dimension();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for row in 0..dimension {
        for col in 0..dimension {
            if board.is_occupied(row, col) {
                continue;
            }

            board.set(row, col, Mark::X);
            let score = minimax(board, win_count, 0, false);
            board.set(row, col, Mark::Empty);

            if score > best_score {
                best_score = score;
                best_move = Some(Position::new(row, col));
            }
        }
    }

    best_move
}

#[cfg(test)]
mod tests {
    use super::*;

    use Mark::{Empty as E, O, X};

    #[test]
    fn test_evaluate_x_line_is_win_score() {
        #[rustfmt::skip]
        let board = Board::from_marks(&[
            X, X, X,
            O, O, E,
            E, E, E,
        ]);
        assert_eq!(evaluate(&board, 3), WIN_SCORE);
    }

    #[test]
    fn test_evaluate_o_line_is_negative_win_score() {
        #[rustfmt::skip]
        let board = Board::from_marks(&[
            X, X, E,
            O, O, O,
            X, E, E,
        ]);
        assert_eq!(evaluate(&board, 3), -WIN_SCORE);
    }

    #[test]
    fn test_evaluate_covers_all_four_axes() {
        #[rustfmt::skip]
        let column = Board::from_marks(&[
            X, O, E,
            X, O, E,
            X, E, E,
        ]);
        #[rustfmt::skip]
        let diagonal = Board::from_marks(&[
            X, O, E,
            O, X, E,
            E, E, X,
        ]);
        #[rustfmt::skip]
        let anti_diagonal = Board::from_marks(&[
            E, X, O,
            X, O, E,
            O, E, X,
        ]);
        assert_eq!(evaluate(&column, 3), WIN_SCORE);
        assert_eq!(evaluate(&diagonal, 3), WIN_SCORE);
        assert_eq!(evaluate(&anti_diagonal, 3), -WIN_SCORE);
    }

    #[test]
    fn test_evaluate_full_drawn_board_is_zero() {
        #[rustfmt::skip]
        let board = Board::from_marks(&[
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert_eq!(evaluate(&board, 3), 0);
    }

    #[test]
    fn test_minimax_leaves_board_unchanged() {
        #[rustfmt::skip]
        let mut board = Board::from_marks(&[
            X, O, X,
            E, O, E,
            E, E, E,
        ]);
        let before = board.clone();
        minimax(&mut board, 3, 0, true);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col), before.get(row, col));
            }
        }
    }

    #[test]
    fn test_minimax_empty_board_is_a_draw() {
        let mut board = Board::new(3);
        assert_eq!(minimax(&mut board, 3, 0, true), 0);
    }

    #[test]
    fn test_find_best_move_completes_winning_line() {
        #[rustfmt::skip]
        let mut board = Board::from_marks(&[
            X, X, E,
            O, O, E,
            E, E, E,
        ]);
        assert_eq!(find_best_move(&mut board, 3), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_find_best_move_blocks_opponent_line() {
        #[rustfmt::skip]
        let mut board = Board::from_marks(&[
            X, E, E,
            O, O, E,
            E, E, X,
        ]);
        assert_eq!(find_best_move(&mut board, 3), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_find_best_move_prefers_first_of_equal_wins() {
        #[rustfmt::skip]
        let mut board = Board::from_marks(&[
            X, X, E,
            X, X, E,
            O, E, O,
        ]);
        assert_eq!(find_best_move(&mut board, 3), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_find_best_move_on_full_board_is_none() {
        #[rustfmt::skip]
        let mut board = Board::from_marks(&[
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert_eq!(find_best_move(&mut board, 3), None);
    }

    #[test]
    fn test_random_move_picks_an_empty_square() {
        #[rustfmt::skip]
        let board = Board::from_marks(&[
            X, O, X,
            X, O, O,
            O, X, E,
        ]);
        assert_eq!(random_move(&board), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_random_move_on_full_board_is_none() {
        #[rustfmt::skip]
        let board = Board::from_marks(&[
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert_eq!(random_move(&board), None);
    }

    #[test]
    fn test_calculate_move_dispatches_to_minimax() {
        #[rustfmt::skip]
        let mut board = Board::from_marks(&[
            X, X, E,
            O, O, E,
            E, E, E,
        ]);
        assert_eq!(calculate_move(BotKind::Minimax, &mut board, 3), Some(Position::new(0, 2)));
    }
}
