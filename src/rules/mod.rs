//! Game rules for five-in-a-row
//!
//! This module implements the rule set:
//! - Run detection (five in a row wins, overlines allowed)
//! - Threat patterns (open four, four with an open end, open three)
//! - Outcome resolution (win, guaranteed open-four win, draw)

pub mod outcome;
pub mod threat;
pub mod win;

// Re-exports for convenient access
pub use outcome::{any_player_can_win, can_still_win, resolve, Outcome};
pub use threat::{has_four_with_one_open_end, has_open_four, has_open_three, run_through, runs, Run};
pub use win::{find_run, has_run, has_run_through, line_length_through, wins_at};
