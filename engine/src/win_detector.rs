use crate::board::Board;
use crate::types::{Direction, Mark, Position, WinningLine};

pub fn check_win(board: &Board, win_count: usize) -> Option<Mark> {
    check_win_with_line(board, win_count).map(|line| line.mark)
}

/// Scans every occupied square in all eight directions. A run can start
/// anywhere inside a line, so both directions of every axis are tested.
pub fn check_win_with_line(board: &Board, win_count: usize) -> Option<WinningLine> {
    if win_count == 0 {
        return None;
    }

    for row in 0..board.dimension() {
        for col in 0..board.dimension() {
            if !board.is_occupied(row, col) {
                continue;
            }

            for direction in Direction::ALL {
                if board.has_run_of_length(row, col, direction, win_count) {
                    let (dr, dc) = direction.offset();
                    let steps = (win_count - 1) as isize;
                    let start = Position::new(row, col);
                    let end = Position::new(
                        (row as isize + dr * steps) as usize,
                        (col as isize + dc * steps) as usize,
                    );
                    return Some(WinningLine::new(board.get(row, col), start, end));
                }
            }
        }
    }

    None
}
