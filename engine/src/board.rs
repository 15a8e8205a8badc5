use std::fmt;

use crate::types::{DEFAULT_DIMENSION, Direction, Mark, Position};

/// Square playing field, row-major flat storage.
#[derive(Clone, Debug)]
pub struct Board {
    dimension: usize,
    cells: Vec<Mark>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Board {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Mark::Empty; dimension * dimension],
        }
    }

    #[cfg(test)]
    pub fn from_marks(marks: &[Mark]) -> Self {
        let dimension = marks.len().isqrt();
        assert_eq!(dimension * dimension, marks.len());
        Self {
            dimension,
            cells: marks.to_vec(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn taken_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    /// In-range coordinates are the caller's responsibility.
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[Position::new(row, col).to_index(self.dimension)]
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[Position::new(row, col).to_index(self.dimension)] = mark;
    }

    /// Places `mark` when a move is present. `None` means no square was
    /// available and the board is left untouched, so callers can hand a bot
    /// result over without branching.
    pub fn apply(&mut self, mv: Option<Position>, mark: Mark) {
        if let Some(pos) = mv {
            self.set(pos.row, pos.col, mark);
        }
    }

    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != Mark::Empty
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.dimension && (col as usize) < self.dimension
    }

    /// True when the neighbor one step away in `direction` exists.
    pub fn has_adjacent(&self, row: usize, col: usize, direction: Direction) -> bool {
        let (dr, dc) = direction.offset();
        self.in_bounds(row as isize + dr, col as isize + dc)
    }

    /// True when the neighbor exists and carries the same non-empty mark as
    /// the origin square.
    pub fn matches_adjacent(&self, row: usize, col: usize, direction: Direction) -> bool {
        if self.get(row, col) == Mark::Empty {
            return false;
        }
        if !self.has_adjacent(row, col, direction) {
            return false;
        }
        let (dr, dc) = direction.offset();
        let neighbor = self.get((row as isize + dr) as usize, (col as isize + dc) as usize);
        neighbor == self.get(row, col)
    }

    /// True when the `len` squares starting at (row, col) and stepping in
    /// `direction` all stay in bounds and share the origin's non-empty mark.
    /// Directional: scanning a whole board for a win must test both
    /// directions of every axis.
    pub fn has_run_of_length(&self, row: usize, col: usize, direction: Direction, len: usize) -> bool {
        let mark = self.get(row, col);
        if mark == Mark::Empty {
            return false;
        }

        let (dr, dc) = direction.offset();
        for step in 1..len {
            let r = row as isize + dr * step as isize;
            let c = col as isize + dc * step as isize;
            if !self.in_bounds(r, c) {
                return false;
            }
            if self.get(r as usize, c as usize) != mark {
                return false;
            }
        }
        true
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if !self.is_occupied(row, col) {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = vec!["---"; self.dimension].join("+");
        for row in 0..self.dimension {
            if row > 0 {
                writeln!(f, "{separator}")?;
            }
            let line: Vec<String> = (0..self.dimension)
                .map(|col| format!(" {} ", self.get(row, col).symbol()))
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
