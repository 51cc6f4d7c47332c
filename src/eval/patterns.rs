//! Pattern scores for Gomoku evaluation
//!
//! Window scores are indexed by how many of the five cells a single player
//! holds (the rest are empty). The table must stay strictly increasing so
//! that move ordering stays sane.

/// Pattern scores for evaluation and search results
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;
    /// Blocking an opponent's immediate win
    pub const BLOCK: i32 = 900_000;

    /// Window holding 4 own stones and 1 empty cell
    pub const WINDOW_FOUR: i32 = 5_000;
    /// Window holding 3 own stones and 2 empty cells
    pub const WINDOW_THREE: i32 = 500;
    /// Window holding 2 own stones and 3 empty cells
    pub const WINDOW_TWO: i32 = 50;
    /// Window holding 1 own stone and 4 empty cells
    pub const WINDOW_ONE: i32 = 5;
    /// Completed window
    pub const WINDOW_FIVE: i32 = 10_000;
}

/// Score of a live window by stone count (0..=5)
pub const WINDOW_SCORES: [i32; 6] = [
    0,
    PatternScore::WINDOW_ONE,
    PatternScore::WINDOW_TWO,
    PatternScore::WINDOW_THREE,
    PatternScore::WINDOW_FOUR,
    PatternScore::WINDOW_FIVE,
];

/// Opponent windows weigh 1.6x (8/5) to bias the engine toward defense
pub const DEFENSE_NUM: i32 = 8;
pub const DEFENSE_DEN: i32 = 5;

/// Score of a window that only `count` own stones occupy
#[inline]
pub fn own_window_score(count: usize) -> i32 {
    WINDOW_SCORES[count.min(5)]
}

/// Penalty of a window that only `count` stones of one opponent occupy
#[inline]
pub fn opponent_window_score(count: usize) -> i32 {
    -(WINDOW_SCORES[count.min(5)] * DEFENSE_NUM / DEFENSE_DEN)
}

/// Move-ordering scores for the line a candidate cell would form
pub struct ThreatScore;

impl ThreatScore {
    /// Five or more
    pub const FIVE: i32 = 100_000;
    /// `_XXXX_`
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four with one free end
    pub const FOUR: i32 = 2_000;
    /// `_XXX_`
    pub const OPEN_THREE: i32 = 1_000;
    /// Three with one free end
    pub const THREE: i32 = 100;
    pub const OPEN_TWO: i32 = 50;
    pub const TWO: i32 = 5;

    /// Own lines count this many times a blocked opponent line of the same
    /// shape, so completing a five outranks blocking one
    pub const ATTACK_WEIGHT: i32 = 2;
}

/// Ordering score of a run by length and number of free ends. Dead lines
/// and single stones score 0.
#[inline]
pub fn threat_score(len: usize, open_ends: usize) -> i32 {
    if len >= 5 {
        return ThreatScore::FIVE;
    }
    match (len, open_ends) {
        (4, 2) => ThreatScore::OPEN_FOUR,
        (4, 1) => ThreatScore::FOUR,
        (3, 2) => ThreatScore::OPEN_THREE,
        (3, 1) => ThreatScore::THREE,
        (2, 2) => ThreatScore::OPEN_TWO,
        (2, 1) => ThreatScore::TWO,
        _ => 0,
    }
}
