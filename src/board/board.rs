//! Board structure and move records

use super::{in_bounds, Mark, Pos, MIN_BOARD_SIZE};
use crate::error::{EngineError, Result};

/// Square game board stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
    /// Occupied cell count, kept in sync by `place`/`clear`
    marks: usize,
}

/// A single placement. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
    pub sequence_index: u32,
}

impl Move {
    pub fn new(pos: Pos, mark: Mark, sequence_index: u32) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            mark,
            sequence_index,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
            marks: 0,
        })
    }

    /// Build a board from row-major cells
    pub fn from_cells(size: usize, cells: Vec<Mark>) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize { size });
        }
        if cells.len() != size * size {
            return Err(EngineError::CellCountMismatch { cells: cells.len() });
        }
        let marks = cells.iter().filter(|m| m.is_player()).count();
        Ok(Self { size, cells, marks })
    }

    /// Parse rows of `.`/`X`/`O`/`Y` characters. Mostly useful for tests.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            for ch in row.chars().filter(|c| !c.is_whitespace()) {
                let mark = match ch {
                    '.' | '_' => Mark::Empty,
                    'X' => Mark::PlayerA,
                    'O' => Mark::PlayerB,
                    'Y' => Mark::PlayerC,
                    _ => return Err(EngineError::InvalidSymbol(ch.to_string())),
                };
                cells.push(mark);
            }
        }
        Self::from_cells(size, cells)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Get mark at position. Callers guarantee `pos` is on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index(self.size)]
    }

    /// Bounds-checked lookup
    #[inline]
    pub fn get_checked(&self, row: i64, col: i64) -> Option<Mark> {
        if in_bounds(row, col, self.size) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn is_cell_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark in scratch search boards (no validation)
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        let idx = pos.to_index(self.size);
        let was = self.cells[idx].is_player();
        self.cells[idx] = mark;
        match (was, mark.is_player()) {
            (false, true) => self.marks += 1,
            (true, false) => self.marks -= 1,
            _ => {}
        }
    }

    /// Remove a mark (undo of `place`)
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.place(pos, Mark::Empty);
    }

    /// Return a new board with `mv` applied. The receiver is untouched.
    pub fn apply(&self, mv: &Move) -> Result<Board> {
        if !in_bounds(mv.row as i64, mv.col as i64, self.size) {
            return Err(EngineError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        if !mv.mark.is_player() {
            return Err(EngineError::InvalidMark);
        }
        let pos = mv.pos();
        if !self.is_cell_empty(pos) {
            return Err(EngineError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        let mut next = self.clone();
        next.place(pos, mv.mark);
        Ok(next)
    }

    /// Check if no cell holds a mark
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.marks == self.cells.len()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.marks
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.marks
    }

    /// Whether any cell holds `mark`
    pub fn contains(&self, mark: Mark) -> bool {
        self.cells.contains(&mark)
    }

    /// Center cell, `(size/2, size/2)`
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |i| Pos::from_index(i, self.size))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Empty)
            .map(move |(i, _)| Pos::from_index(i, self.size))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for mark in row {
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
