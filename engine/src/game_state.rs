use crate::board::Board;
use crate::types::{GameStatus, Mark, Position};
use crate::win_detector::check_win;

/// Turn bookkeeping for one game: who moves, whether the game is decided,
/// and the board itself. Status is re-derived after every placed mark.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub win_count: usize,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    first_mark: Mark,
}

impl GameState {
    pub fn new(dimension: usize, win_count: usize, first_mark: Mark) -> Self {
        Self {
            board: Board::new(dimension),
            win_count,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            first_mark,
        }
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        let dimension = self.board.dimension();
        if row >= dimension || col >= dimension {
            return Err(format!(
                "Position ({row}, {col}) is outside the {dimension}x{dimension} board"
            ));
        }

        if self.board.is_occupied(row, col) {
            return Err(format!("Square ({row}, {col}) is already marked"));
        }

        self.board.set(row, col, self.current_mark);
        self.last_move = Some(Position::new(row, col));

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board, self.win_count) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    /// Fresh board for a rematch; the opening mark is restored as well.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = self.first_mark;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }
}
