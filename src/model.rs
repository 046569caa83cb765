use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Tour circuit a match belongs to. Serialized in the data files as
/// literal "ATP" / "WTA".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Tour {
    Atp,
    Wta,
}

/// One mathematically possible match outcome. The loaded collection is
/// exhaustive and immutable; transient per-render state lives in
/// [`crate::classify::CellOverlay`], never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorelineRecord {
    pub scoreline: String,
    pub first_set: String,
    pub set2_score: String,
    /// `None` for straight-sets outcomes. Normalized at the load
    /// boundary; the raw files mark it with an "NA" sentinel.
    pub set3_score: Option<String>,
    pub is_straight_sets: bool,
    pub num_sets: u8,

    pub count_all_time: u64,
    pub count_atp_all_time: u64,
    pub count_wta_all_time: u64,
    pub count_2024: u64,
    pub count_atp_2024: u64,
    pub count_wta_2024: u64,

    pub observed_all_time: bool,
    pub observed_2024: bool,
}

impl ScorelineRecord {
    /// Season counter for one tour, or the combined counter.
    pub fn count_2024_for(&self, tour: Option<Tour>) -> u64 {
        match tour {
            Some(Tour::Atp) => self.count_atp_2024,
            Some(Tour::Wta) => self.count_wta_2024,
            None => self.count_2024,
        }
    }

    pub fn count_all_time_for(&self, tour: Option<Tour>) -> u64 {
        match tour {
            Some(Tour::Atp) => self.count_atp_all_time,
            Some(Tour::Wta) => self.count_wta_all_time,
            None => self.count_all_time,
        }
    }
}

/// One historical match. Read-only reference data for detail lookups and
/// for deriving counts outside the precomputed periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub year: u16,
    pub tour: Tour,
    pub scoreline: String,
    pub winner_name: String,
    pub loser_name: String,
    pub tourney_name: String,
    pub surface: String,
}

/// Matches played per year, split by tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: u16,
    pub atp: u64,
    pub wta: u64,
    pub total: u64,
}

/// Per-scoreline aggregate for one period (2024 or all-time). Only
/// observed scorelines appear; used for global statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCount {
    pub scoreline: String,
    pub total_count: u64,
    pub atp_count: u64,
    pub wta_count: u64,
}
