/// Set scores a match winner can take a set by, most contested first.
/// This order is a priority ranking, not alphabetic.
pub const WINNING_SET_ORDER: [&str; 7] = ["7-6", "7-5", "6-4", "6-3", "6-2", "6-1", "6-0"];

/// Mirror scores for a set the match winner lost.
pub const LOSING_SET_ORDER: [&str; 7] = ["6-7", "5-7", "4-6", "3-6", "2-6", "1-6", "0-6"];

/// Grid rows: seven "won the first set" outcomes followed by their mirrors.
pub const ROW_COUNT: usize = 14;

/// Widest row: 7 straight-sets columns plus 7x7 three-set combinations.
pub const MAX_ROW_CAPACITY: usize = 56;

/// The season the precomputed per-season counters cover.
pub const SEASON_YEAR: u16 = 2024;

/// First year of the historical dataset (Open Era).
pub const FIRST_YEAR: u16 = 1968;

/// Sentinel used by the upstream pipeline for "no third set".
pub const NOT_APPLICABLE: &str = "NA";
