//! Board representation for Gomoku

pub mod board;
pub mod wire;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Move};
pub use wire::BoardState;

/// Smallest board on which five-in-a-row is possible
pub const MIN_BOARD_SIZE: usize = 5;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cell contents. `PlayerC` only appears in three-player games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Mark {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "X")]
    PlayerA,
    #[serde(rename = "O")]
    PlayerB,
    #[serde(rename = "Y")]
    PlayerC,
}

impl Mark {
    /// Every mark that belongs to a player
    pub const PLAYERS: [Mark; 3] = [Mark::PlayerA, Mark::PlayerB, Mark::PlayerC];

    #[inline]
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }

    /// Slot of a player mark in per-mark tables (`None` for `Empty`)
    #[inline]
    pub fn player_index(self) -> Option<usize> {
        match self {
            Mark::Empty => None,
            Mark::PlayerA => Some(0),
            Mark::PlayerB => Some(1),
            Mark::PlayerC => Some(2),
        }
    }

    /// Next mark in turn order for a game with `players` participants
    #[inline]
    pub fn next(self, players: u8) -> Mark {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB if players >= 3 => Mark::PlayerC,
            Mark::PlayerB | Mark::PlayerC => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Other participants in turn order, starting with the one moving next
    pub fn opponents(self, players: u8) -> Vec<Mark> {
        let mut out = Vec::with_capacity(2);
        let mut m = self.next(players);
        while m != self && m != Mark::Empty && out.len() < 2 {
            out.push(m);
            m = m.next(players);
        }
        out
    }

    /// Wire symbol (`""`, `"X"`, `"O"`, `"Y"`)
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::PlayerA => "X",
            Mark::PlayerB => "O",
            Mark::PlayerC => "Y",
        }
    }

    /// Parse a wire symbol
    pub fn from_symbol(s: &str) -> Option<Mark> {
        match s {
            "" => Some(Mark::Empty),
            "X" => Some(Mark::PlayerA),
            "O" => Some(Mark::PlayerB),
            "Y" => Some(Mark::PlayerC),
            _ => None,
        }
    }
}

impl std::str::FromStr for Mark {
    type Err = crate::error::EngineError;

    /// Parse a player symbol; the empty symbol is not a player.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Mark::from_symbol(s.trim()) {
            Some(mark) if mark.is_player() => Ok(mark),
            _ => Err(crate::error::EngineError::InvalidSymbol(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => f.write_str("."),
            m => f.write_str(m.symbol()),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Step `k` cells along `(dr, dc)`; `None` when leaving the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32, size: usize) -> Option<Pos> {
        let r = self.row as i64 + i64::from(dr) * i64::from(k);
        let c = self.col as i64 + i64::from(dc) * i64::from(k);
        if in_bounds(r, c, size) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

/// Check that `(row, col)` lies on a `size` x `size` board
#[inline]
pub fn in_bounds(row: i64, col: i64, size: usize) -> bool {
    row >= 0 && col >= 0 && (row as u64) < size as u64 && (col as u64) < size as u64
}
