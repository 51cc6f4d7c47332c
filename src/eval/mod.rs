//! Position evaluation for the search

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{
    opponent_window_score, own_window_score, threat_score, PatternScore, ThreatScore, WINDOW_SCORES,
};
