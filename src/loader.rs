use crate::config::DataPaths;
use crate::consts::NOT_APPLICABLE;
use crate::error::{ScorigamiError, SgResult};
use crate::model::{AggregateCount, MatchRecord, ScorelineRecord, Tour, YearCount};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// The five pre-aggregated input files, fully typed. Loading is
/// all-or-nothing: any missing, unreadable or empty file fails the whole
/// load. Field-level damage degrades instead (bad numerics coerce to 0).
#[derive(Debug, Clone)]
pub struct Dataset {
    pub scorelines: Vec<ScorelineRecord>,
    pub matches: Vec<MatchRecord>,
    pub year_counts: Vec<YearCount>,
    pub counts_2024: Vec<AggregateCount>,
    pub counts_all_time: Vec<AggregateCount>,
}

impl Dataset {
    pub fn load(paths: &DataPaths) -> SgResult<Self> {
        info!("📂 Loading scoreline data from {}", paths.data_dir);

        let scorelines = named(&paths.scorelines_file, load_scorelines(paths.scorelines()))?;
        let matches = named(&paths.matches_file, load_matches(paths.matches()))?;
        let year_counts = named(&paths.year_counts_file, load_year_counts(paths.year_counts()))?;
        let counts_2024 = named(&paths.counts_2024_file, load_aggregates(paths.counts_2024()))?;
        let counts_all_time = named(
            &paths.counts_all_time_file,
            load_aggregates(paths.counts_all_time()),
        )?;

        info!(
            "✅ Loaded {} scorelines, {} matches, {} years",
            scorelines.len(),
            matches.len(),
            year_counts.len()
        );

        Ok(Self {
            scorelines,
            matches,
            year_counts,
            counts_2024,
            counts_all_time,
        })
    }

    /// Distinct years available for filtering, most recent first.
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.year_counts.iter().map(|y| y.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

/// Attaches the file name to any error and rejects empty files.
fn named<T>(file: &str, result: SgResult<Vec<T>>) -> SgResult<Vec<T>> {
    match result {
        Ok(rows) if rows.is_empty() => Err(ScorigamiError::DataLoad(format!(
            "{file}: file is empty or contains no usable records"
        ))),
        Ok(rows) => Ok(rows),
        Err(e) => Err(ScorigamiError::DataLoad(format!("{file}: {e}"))),
    }
}

fn coerce_u64(s: &str) -> u64 {
    s.trim().parse().unwrap_or(0)
}

fn coerce_u16(s: &str) -> u16 {
    s.trim().parse().unwrap_or(0)
}

fn coerce_bool(s: &str) -> bool {
    s.trim() == "TRUE"
}

/// "NA" and blank both mean "no third set"; a straight-sets record never
/// has one regardless of what the file says.
fn normalize_set3(raw: &str, is_straight_sets: bool) -> Option<String> {
    let trimmed = raw.trim();
    if is_straight_sets || trimmed.is_empty() || trimmed == NOT_APPLICABLE {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RawScorelineRow {
    scoreline: String,
    first_set: String,
    set2_score: String,
    #[serde(default)]
    set3_score: String,
    #[serde(default)]
    is_straight_sets: String,
    #[serde(default)]
    num_sets: String,
    #[serde(default)]
    count_all_time: String,
    #[serde(default)]
    count_atp_all_time: String,
    #[serde(default)]
    count_wta_all_time: String,
    #[serde(default)]
    count_2024: String,
    #[serde(default)]
    count_atp_2024: String,
    #[serde(default)]
    count_wta_2024: String,
}

pub fn load_scorelines<P: AsRef<Path>>(path: P) -> SgResult<Vec<ScorelineRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in rdr.deserialize::<RawScorelineRow>() {
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping malformed scoreline row: {}", e);
                continue;
            }
        };

        let is_straight_sets = coerce_bool(&raw.is_straight_sets);
        let set3_score = normalize_set3(&raw.set3_score, is_straight_sets);

        let count_all_time = coerce_u64(&raw.count_all_time);
        let count_2024 = coerce_u64(&raw.count_2024);

        // Parsed at its own width so an out-of-range value falls into the
        // fallback instead of truncating.
        let mut num_sets = raw.num_sets.trim().parse::<u8>().unwrap_or(0);
        if num_sets == 0 {
            num_sets = if is_straight_sets { 2 } else { 3 };
        }

        // observed_* flags are derived from counts, not trusted from the file.
        records.push(ScorelineRecord {
            scoreline: raw.scoreline.trim().to_string(),
            first_set: raw.first_set.trim().to_string(),
            set2_score: raw.set2_score.trim().to_string(),
            set3_score,
            is_straight_sets,
            num_sets,
            count_all_time,
            count_atp_all_time: coerce_u64(&raw.count_atp_all_time),
            count_wta_all_time: coerce_u64(&raw.count_wta_all_time),
            count_2024,
            count_atp_2024: coerce_u64(&raw.count_atp_2024),
            count_wta_2024: coerce_u64(&raw.count_wta_2024),
            observed_all_time: count_all_time > 0,
            observed_2024: count_2024 > 0,
        });
    }

    debug!("Parsed {} scoreline records", records.len());
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RawMatchRow {
    #[serde(default)]
    year: String,
    #[serde(default)]
    tour: String,
    scoreline: String,
    #[serde(default)]
    winner_name: String,
    #[serde(default)]
    loser_name: String,
    #[serde(default)]
    tourney_name: String,
    #[serde(default)]
    surface: String,
}

pub fn load_matches<P: AsRef<Path>>(path: P) -> SgResult<Vec<MatchRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in rdr.deserialize::<RawMatchRow>() {
        let raw = match row {
            Ok(raw) => raw,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let tour = match Tour::from_str(raw.tour.trim()) {
            Ok(tour) => tour,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        records.push(MatchRecord {
            year: coerce_u16(&raw.year),
            tour,
            scoreline: raw.scoreline.trim().to_string(),
            winner_name: raw.winner_name,
            loser_name: raw.loser_name,
            tourney_name: raw.tourney_name,
            surface: raw.surface,
        });
    }

    if skipped > 0 {
        warn!("Skipped {} match rows with unknown tour or shape", skipped);
    }
    debug!("Parsed {} match records", records.len());
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RawYearRow {
    #[serde(default)]
    year: String,
    #[serde(default, rename = "ATP")]
    atp: String,
    #[serde(default, rename = "WTA")]
    wta: String,
    #[serde(default)]
    total: String,
}

pub fn load_year_counts<P: AsRef<Path>>(path: P) -> SgResult<Vec<YearCount>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for raw in rdr.deserialize::<RawYearRow>().flatten() {
        let year = coerce_u16(&raw.year);
        if year == 0 {
            continue;
        }
        records.push(YearCount {
            year,
            atp: coerce_u64(&raw.atp),
            wta: coerce_u64(&raw.wta),
            total: coerce_u64(&raw.total),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RawAggregateRow {
    scoreline: String,
    #[serde(default)]
    total_count: String,
    #[serde(default)]
    atp_count: String,
    #[serde(default)]
    wta_count: String,
}

pub fn load_aggregates<P: AsRef<Path>>(path: P) -> SgResult<Vec<AggregateCount>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for raw in rdr.deserialize::<RawAggregateRow>().flatten() {
        records.push(AggregateCount {
            scoreline: raw.scoreline.trim().to_string(),
            total_count: coerce_u64(&raw.total_count),
            atp_count: coerce_u64(&raw.atp_count),
            wta_count: coerce_u64(&raw.wta_count),
        });
    }

    Ok(records)
}
