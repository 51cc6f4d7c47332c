//! Boundary representation shared with the session and transport layers.
//!
//! A `BoardState` is a flat, row-major JSON array of cell symbols:
//! `""` for empty, `"X"`, `"O"` and `"Y"` for the three player marks.

use super::{Board, Mark};
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BoardState {
    pub cells: Vec<Mark>,
}

impl BoardState {
    /// Side length implied by the cell count
    pub fn size(&self) -> Result<usize> {
        let len = self.cells.len();
        let size = (len as f64).sqrt().round() as usize;
        if size * size != len {
            return Err(EngineError::CellCountMismatch { cells: len });
        }
        Ok(size)
    }

    pub fn to_board(&self) -> Result<Board> {
        Board::from_cells(self.size()?, self.cells.clone())
    }

    pub fn from_json(s: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        // Vec<Mark> of unit variants always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        Self {
            cells: board.cells().to_vec(),
        }
    }
}

impl TryFrom<&BoardState> for Board {
    type Error = EngineError;

    fn try_from(state: &BoardState) -> Result<Board> {
        state.to_board()
    }
}
